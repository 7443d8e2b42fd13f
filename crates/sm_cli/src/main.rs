//! Sport Management CLI
//!
//! Numbered-menu console front-end over [`sm_core::Registry`]. Reads
//! integers and lines from stdin, prints formatted records to stdout. All
//! registry errors are reported and control returns to the menu; nothing
//! is fatal.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use sm_core::{Registry, UniquenessPolicy};

mod menu;
mod prompt;

#[derive(Parser)]
#[command(name = "sm_cli")]
#[command(about = "Manage sports teams, players and fixtures", long_about = None)]
struct Cli {
    /// Allow duplicate team ids and names instead of rejecting them
    #[arg(long, default_value = "false")]
    lenient: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let policy = if cli.lenient {
        UniquenessPolicy::Lenient
    } else {
        UniquenessPolicy::Strict
    };
    log::debug!("starting with {:?} uniqueness policy", policy);

    let mut registry = Registry::with_policy(policy);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    menu::main_menu(&mut registry, &mut input)?;
    io::stdout().flush()?;
    Ok(())
}

// Re-exported for the menu module; kept here so main.rs stays the single
// place that owns stdin/stdout wiring.
pub(crate) fn flush_stdout() -> io::Result<()> {
    io::stdout().flush()
}

pub(crate) fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        // EOF behaves like the back/exit choice so piped sessions terminate.
        return Ok("0".to_string());
    }
    Ok(line.trim().to_string())
}
