//! seven-pillars CLI
//!
//! A short terminal journey through the seven pillars of self.

use std::process::ExitCode;

use clap::Parser;

/// Guided reflection through seven pillars: Emotional, Purpose, Financial,
/// Physical, Mental, Environmental, Spiritual.
///
/// Everything is compiled in — the binary takes no flags beyond the
/// standard --help and --version.
#[derive(Parser)]
#[command(name = "seven-pillars")]
#[command(about = "Terminal journey through the seven pillars of self")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match seven_pillars::tui::run::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
