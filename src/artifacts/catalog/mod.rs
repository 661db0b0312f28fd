//! Static explanation catalog
//!
//! Every explanation printed by `explain` lives in one of four compile-time
//! tables, keyed by the value passed to `--command` or `--advanced`:
//!
//! - `git::COMMANDS` / `git::CONCEPTS`
//! - `docker::COMMANDS` / `docker::CONCEPTS`
//!
//! The tables are `phf` ordered maps, so lookups are exact and
//! case-sensitive and iteration follows the order in which topics are
//! presented to users.

pub mod docker;
pub mod git;
pub mod request;

use colored::Colorize;
use std::fmt;

pub type Catalog<T> = phf::OrderedMap<&'static str, T>;

const CHEATSHEET_INTRO: &str = "Here’s a summary of the different commands associated with";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Git,
    Docker,
}

impl Tool {
    /// Name used in prose, e.g. "Try another Git command."
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Git => "Git",
            Tool::Docker => "Docker",
        }
    }

    /// Executable name used in examples and in the overview listing.
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Docker => "docker",
        }
    }

    pub fn introduction(&self) -> &'static str {
        match self {
            Tool::Git => git::INTRODUCTION,
            Tool::Docker => docker::INTRODUCTION,
        }
    }

    pub fn commands(&self) -> &'static Catalog<CommandEntry> {
        match self {
            Tool::Git => &git::COMMANDS,
            Tool::Docker => &docker::COMMANDS,
        }
    }

    pub fn concepts(&self) -> &'static Catalog<ConceptEntry> {
        match self {
            Tool::Git => &git::CONCEPTS,
            Tool::Docker => &docker::CONCEPTS,
        }
    }

    pub fn lookup(&self, mode: Mode, key: &str) -> Explanation {
        let found = match mode {
            Mode::Command => self.commands().get(key).map(Explanation::Command),
            Mode::Advanced => self.concepts().get(key).map(Explanation::Concept),
        };

        found.unwrap_or_else(|| Explanation::Unavailable {
            tool: *self,
            mode,
            key: key.to_string(),
        })
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Basic command, selected with `--command`
    Command,
    /// Advanced concept, selected with `--advanced`
    Advanced,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Command => write!(f, "command"),
            Mode::Advanced => write!(f, "advanced"),
        }
    }
}

/// Explanation of a single basic command.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandEntry {
    /// One-line description shown in the tool overview
    pub brief: &'static str,
    pub summary: &'static str,
    pub example: &'static str,
    pub outcome: &'static str,
}

/// Explanation of an advanced concept, with its command cheatsheet.
#[derive(Debug, PartialEq, Eq)]
pub struct ConceptEntry {
    pub overview: &'static str,
    pub subject: &'static str,
    pub cheatsheet: &'static str,
    /// Body printed under the `Example:` heading
    pub example: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Explanation {
    Command(&'static CommandEntry),
    Concept(&'static ConceptEntry),
    Unavailable { tool: Tool, mode: Mode, key: String },
}

impl Explanation {
    pub fn is_available(&self) -> bool {
        !matches!(self, Explanation::Unavailable { .. })
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Explanation::Command(entry) => {
                writeln!(f, "{}", entry.summary)?;
                writeln!(f, "{} {}", "Example:".bold(), entry.example)?;
                write!(f, "{}", entry.outcome)
            }
            Explanation::Concept(entry) => {
                writeln!(f, "- {}", entry.overview)?;
                writeln!(f)?;
                writeln!(f, "{}", format!("{CHEATSHEET_INTRO} {}:", entry.subject).bold())?;
                writeln!(f, "{}", entry.cheatsheet)?;
                writeln!(f)?;
                writeln!(f, "{}", "Example:".bold())?;
                write!(f, "{}", entry.example)
            }
            Explanation::Unavailable { tool, mode, key } => match (tool, mode) {
                (Tool::Git, Mode::Command) => write!(
                    f,
                    "Explanation for '{key}' is not available. Try another Git command."
                ),
                (Tool::Git, Mode::Advanced) => write!(
                    f,
                    "Explanation for '{key}' is not available. Try another advanced Git concept."
                ),
                (Tool::Docker, Mode::Command) => write!(
                    f,
                    "Explanation for '{key}' Docker command is not available. Try another Docker command."
                ),
                (Tool::Docker, Mode::Advanced) => write!(
                    f,
                    "Explanation for '{key}' Docker concept is not available. Try another advanced Docker concept."
                ),
            },
        }
    }
}
