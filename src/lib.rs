//! `explain`: a command-line reference for Git and Docker
//!
//! Prints fixed explanations of basic commands (`--command`) and advanced
//! concepts (`--advanced`) from a catalog compiled into the binary.
//!
//! - `areas`: the `Explainer` output sink
//! - `artifacts`: the explanation catalog, request resolution and output plumbing
//! - `commands`: the commands, as `impl Explainer` blocks

pub mod areas;
pub mod artifacts;
pub mod commands;

use clap::ValueEnum;
use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Applies the choice to `colored` for the rest of the process.
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {
                if !std::io::stdout().is_terminal() {
                    colored::control::set_override(false);
                }
            }
        }
    }
}
