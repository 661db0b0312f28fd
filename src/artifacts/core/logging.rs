use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding an `EnvFilter` directive. Overrides `-v`.
pub const LOG_ENV: &str = "EXPLAIN_LOG";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub enum VerbosityLevel {
    /// Only warnings and errors.
    #[default]
    Default,

    /// Emits events up to [`INFO`](tracing::Level::INFO), e.g. unknown keys. Corresponds to `-v`.
    Verbose,

    /// Emits events up to [`DEBUG`](tracing::Level::DEBUG). Corresponds to `-vv`.
    ExtraVerbose,

    /// Everything. Corresponds to `-vvv` and above.
    Trace,
}

impl VerbosityLevel {
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Default,
            1 => Self::Verbose,
            2 => Self::ExtraVerbose,
            _ => Self::Trace,
        }
    }

    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Default => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::ExtraVerbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

fn env_filter(verbosity: VerbosityLevel, directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::builder()
            .with_default_directive(verbosity.level_filter().into())
            .parse_lossy(directive),
        None => EnvFilter::default().add_directive(verbosity.level_filter().into()),
    }
}

/// Installs the stderr subscriber. Stdout is reserved for explanations.
pub fn init_logging(verbosity: VerbosityLevel, ansi: bool) -> anyhow::Result<()> {
    let directive = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity, directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(())
}
