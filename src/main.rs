use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use maskfield::{App, CaseRule, CrosstermTerminal, MaskConfig, MaskFormatter, MaskedField};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mask pattern: # digit, @ letter, a lowercase, A uppercase, * letter or digit
    #[arg(short = 'p', long, value_name = "PATTERN")]
    pattern: Option<String>,

    /// Fixed text shown in front of non-empty output
    #[arg(short = 'x', long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Reject letters of the wrong case instead of converting them
    #[arg(long)]
    strict_case: bool,

    /// Edit a single masked field in the terminal
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Write debug logging to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut config = MaskConfig::from_env()?;
    if let Some(pattern) = args.pattern {
        config.pattern = pattern;
    }
    if let Some(prefix) = args.prefix {
        config.prefix = prefix;
    }
    if args.strict_case {
        config.case_rule = CaseRule::Strict;
    }
    log::debug!("starting with {:?}", config);

    let formatter = config.formatter();
    if args.interactive {
        run_interactive(formatter)
    } else {
        run_batch(&formatter)
    }
}

/// Format each line of stdin.
fn run_batch(formatter: &MaskFormatter) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(out, "{}", formatter.format(&line))?;
    }
    out.flush()?;
    Ok(())
}

fn run_interactive(formatter: MaskFormatter) -> Result<()> {
    let mut app = App::new(MaskedField::new(formatter), "Input");
    let mut terminal = CrosstermTerminal::new();
    app.run(&mut terminal)?;
    for value in &app.submitted {
        println!("{}", value);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = fern::log_file(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(file)
        .apply()?;
    Ok(())
}
