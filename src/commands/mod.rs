//! Explain command implementations
//!
//! Each command is an `impl Explainer` block writing to the explainer's output:
//!
//! - `root`: the welcome message printed by bare `explain`
//! - `explain`: the `git` and `docker` subcommands (overview, `--command`, `--advanced`)
//! - `topics`: available topic listings (`--list` and the subcommand help footer)

pub mod explain;
pub mod root;
pub mod topics;
