use crate::areas::explainer::Explainer;

const WELCOME: &str = "Welcome to Explain! Use subcommands to get explanations.";

impl Explainer {
    pub fn welcome(&self) -> anyhow::Result<()> {
        writeln!(self.writer(), "{WELCOME}")?;
        Ok(())
    }
}
