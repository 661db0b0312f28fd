use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use explain::ColorMode;
use explain::areas::explainer::Explainer;
use explain::artifacts::catalog::Tool;
use explain::artifacts::catalog::request::ExplainFlags;
use explain::artifacts::core::PagerWriter;
use explain::artifacts::core::logging::{VerbosityLevel, init_logging};
use explain::commands::topics::help_footer;
use is_terminal::IsTerminal;
use minus::Pager;

#[derive(Parser)]
#[command(
    name = "explain",
    version = "0.1.0",
    about = "Explain is a command-line tool to provide information about software development",
    long_about = "Use Explain to remember important concepts, such as using Git commands, etc. \
    For example: \"explain git --command init\", \"explain docker --command run\".",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}

OPTIONS:
{options}
"
)]
struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Log more to stderr (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[arg(
        long,
        value_enum,
        default_value_t = ColorMode::Auto,
        global = true,
        help = "When to colour the output"
    )]
    color: ColorMode,
    #[arg(long, global = true, help = "Show the output in a pager when stdout is a terminal")]
    pager: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "git",
        about = "Explains something about Git",
        long_about = "This command provides explanations and examples related to Git. \
        For example: explaining basic Git commands, \
        or giving extensive information about advanced Git features.",
        after_help = help_footer(Tool::Git),
        args_override_self = true
    )]
    Git(ExplainArgs),
    #[command(
        name = "docker",
        about = "Explains something about Docker",
        long_about = "This command provides explanations and examples related to Docker. \
        For example: explaining basic Docker commands, \
        or giving extensive information about advanced Docker features.",
        after_help = help_footer(Tool::Docker),
        args_override_self = true
    )]
    Docker(ExplainArgs),
}

// Repeated flags keep their last value and keys may start with a hyphen,
// so `-c init -c add` explains `add` and `-c --advanced` looks up "--advanced".
#[derive(Args)]
struct ExplainArgs {
    #[arg(
        short,
        long,
        value_name = "NAME",
        allow_hyphen_values = true,
        help = "Specify a command to explain"
    )]
    command: Option<String>,
    #[arg(
        short,
        long,
        value_name = "TOPIC",
        allow_hyphen_values = true,
        help = "Explain an advanced concept"
    )]
    advanced: Option<String>,
    #[arg(short, long, help = "List the available commands and advanced topics")]
    list: bool,
    #[arg(hide = true)]
    stray: Vec<String>,
}

impl From<ExplainArgs> for ExplainFlags {
    fn from(args: ExplainArgs) -> Self {
        ExplainFlags::new(args.command, args.advanced, args.list, args.stray)
    }
}

fn run(explainer: &Explainer, command: Option<Commands>) -> Result<()> {
    match command {
        None => explainer.welcome(),
        Some(Commands::Git(args)) => explainer.explain(Tool::Git, args.into()),
        Some(Commands::Docker(args)) => explainer.explain(Tool::Docker, args.into()),
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                err.print()?;
                std::process::exit(1);
            }
        },
    };

    cli.color.apply();
    let ansi_logs = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stderr().is_terminal(),
    };
    init_logging(VerbosityLevel::from_occurrences(cli.verbose), ansi_logs)?;

    if cli.pager && std::io::stdout().is_terminal() {
        let pager = Pager::new();
        let explainer = Explainer::new(Box::new(PagerWriter::new(pager.clone())));
        run(&explainer, cli.command)?;
        explainer.flush()?;
        minus::page_all(pager)?;
    } else {
        let explainer = Explainer::new(Box::new(std::io::stdout()));
        run(&explainer, cli.command)?;
        explainer.flush()?;
    }

    Ok(())
}
