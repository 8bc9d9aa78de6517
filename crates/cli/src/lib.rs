use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use huddle_graph::{analyze_source, ClosureStrategy, GraphError, TextFileSource};
use std::io;
use std::path::PathBuf;

use crate::flags::ModeFlag;

mod config;
mod flags;
mod output;

const MISSING_PATH_MESSAGE: &str = "Please supply a valid text file name.";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Largest group of players that can all see one another", long_about = None)]
#[command(version)]
struct Cli {
    /// Visibility file (`.txt`, one `player, seen, seen, ...` row per line)
    path: Option<PathBuf>,

    /// Closure strategy (overrides HUDDLE_CLOSURE_MODE)
    #[arg(long, value_enum)]
    mode: Option<ModeFlag>,

    /// Print a single JSON object instead of the text line
    #[arg(long)]
    json: bool,

    /// Also list every player's class
    #[arg(long)]
    classes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(path) = cli.path.as_ref() else {
        anyhow::bail!(MISSING_PATH_MESSAGE);
    };

    let strategy: ClosureStrategy = cli
        .mode
        .map(ModeFlag::as_domain)
        .unwrap_or_else(config::closure_strategy_from_env);

    let source = TextFileSource::new(path)?;
    let report = analyze_source(&source, strategy)
        .inspect_err(|err: &GraphError| log::debug!("analysis failed ({})", err.kind()))
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    let rendered = if cli.json {
        output::render_json(&report, cli.classes)?
    } else {
        output::render_text(&report, cli.classes)
    };

    print_stdout(&rendered)
}
