use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use projspell::cli::{output, Masthead};
use projspell::{Config, SpellCommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "projspell")]
#[command(about = "Spellcheck whole documentation projects with spell(1)", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Files to check
    #[arg(
        value_name = "SOURCE",
        required_unless_present_any = ["version", "completion"]
    )]
    source: Vec<String>,

    /// File listing words to leave out of the report, one per line
    #[arg(short, long, value_name = "FILE", env = "PROJSPELL_IGNORE")]
    ignore: Option<PathBuf>,

    /// Show the full masthead and debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "projspell", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    output::print_masthead(&Masthead::new(cli.verbose || cli.version))
        .context("Failed to write masthead")?;
    if cli.version {
        return Ok(());
    }

    let config = Config::load(cli.ignore)?;
    let checker = SpellCommand::from_config(&config);

    let results = projspell::run(&cli.source, &checker, config.ignore_file.as_deref())
        .context("Spellcheck aborted")?;

    output::print_report(&results, true).context("Failed to write report")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
