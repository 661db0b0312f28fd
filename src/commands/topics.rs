use crate::areas::explainer::Explainer;
use crate::artifacts::catalog::{Catalog, Tool};

/// Keys shown in the `Examples:` section of the subcommand help:
/// two basic commands followed by two advanced topics.
fn example_keys(tool: Tool) -> [&'static str; 4] {
    match tool {
        Tool::Git => ["branch", "reset", "rebase", "cherry-pick"],
        Tool::Docker => ["run", "build", "compose", "swarm"],
    }
}

fn joined_keys<T>(catalog: &Catalog<T>) -> String {
    catalog.keys().copied().collect::<Vec<_>>().join(", ")
}

/// Available basic commands and advanced topics for a tool.
pub fn topics_listing(tool: Tool) -> String {
    format!(
        "Available Commands:\n  {}\n\nAvailable Advanced Topics:\n  {}",
        joined_keys(tool.commands()),
        joined_keys(tool.concepts())
    )
}

/// Footer appended to `explain git --help` and `explain docker --help`.
pub fn help_footer(tool: Tool) -> String {
    let bin = tool.binary();
    let [command, short_command, advanced, short_advanced] = example_keys(tool);

    format!(
        "Examples:\n  \
         explain {bin} --command {command}\n  \
         explain {bin} -c {short_command}\n  \
         explain {bin} --advanced {advanced}\n  \
         explain {bin} -a {short_advanced}\n\n\
         {}",
        topics_listing(tool)
    )
}

impl Explainer {
    pub fn topics(&self, tool: Tool) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", topics_listing(tool))?;
        Ok(())
    }
}
