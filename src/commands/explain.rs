use crate::areas::explainer::Explainer;
use crate::artifacts::catalog::request::{ExplainFlags, ExplainRequest};
use crate::artifacts::catalog::{Mode, Tool};
use colored::Colorize;
use tracing::{debug, info};

impl Explainer {
    /// Runs the `git` or `docker` subcommand.
    pub fn explain(&self, tool: Tool, flags: ExplainFlags) -> anyhow::Result<()> {
        let request = flags.resolve();
        debug!(%tool, ?request, "resolved explain request");

        match request {
            ExplainRequest::StrayArguments => self.stray_arguments(tool),
            ExplainRequest::Lookup { mode, key } => self.lookup(tool, mode, &key),
            ExplainRequest::Topics => self.topics(tool),
            ExplainRequest::Overview => self.overview(tool),
        }
    }

    pub fn lookup(&self, tool: Tool, mode: Mode, key: &str) -> anyhow::Result<()> {
        let explanation = tool.lookup(mode, key);

        if explanation.is_available() {
            debug!(%tool, %mode, key, "found explanation");
        } else {
            info!(%tool, %mode, key, "no explanation available");
        }

        writeln!(self.writer(), "{explanation}")?;
        Ok(())
    }

    pub fn overview(&self, tool: Tool) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{}", tool.introduction())?;
        for (key, entry) in tool.commands().entries() {
            let name = format!("{} {}", tool.binary(), key);
            writeln!(writer, "- {}: {}", name.green(), entry.brief)?;
        }

        Ok(())
    }

    pub fn stray_arguments(&self, tool: Tool) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{tool} command has no subcommands. Please provide one of the following flags:\n\
             --command\n\
             --advanced"
        )?;
        Ok(())
    }
}
