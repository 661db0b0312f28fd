use crate::artifacts::catalog::Mode;
use derive_new::new;

/// Raw flag values of an explainer subcommand, as parsed from the command line.
#[derive(Debug, Clone, Default, new)]
pub struct ExplainFlags {
    pub command: Option<String>,
    pub advanced: Option<String>,
    pub list: bool,
    pub stray: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainRequest {
    /// Positional arguments were given; explainers take flags only
    StrayArguments,
    Lookup { mode: Mode, key: String },
    Topics,
    Overview,
}

impl ExplainFlags {
    /// Picks the single action an explainer performs.
    ///
    /// Positional arguments win over everything, then `--command`, then
    /// `--advanced`, then `--list`. Empty flag values count as absent.
    pub fn resolve(self) -> ExplainRequest {
        if !self.stray.is_empty() {
            return ExplainRequest::StrayArguments;
        }

        let non_empty = |value: Option<String>| value.filter(|value| !value.is_empty());

        if let Some(key) = non_empty(self.command) {
            return ExplainRequest::Lookup {
                mode: Mode::Command,
                key,
            };
        }

        if let Some(key) = non_empty(self.advanced) {
            return ExplainRequest::Lookup {
                mode: Mode::Advanced,
                key,
            };
        }

        if self.list {
            ExplainRequest::Topics
        } else {
            ExplainRequest::Overview
        }
    }
}
