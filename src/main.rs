use anyhow::Result;
use clap::Parser;
use drift::areas::scanner::{ScanOptions, Scanner};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "drift",
    version = "0.1.0",
    about = "Report which working copies under a directory need attention",
    long_about = "Scans the immediate subdirectories of a root directory and reports, \
    for each git working copy, uncommitted changes, merge conflicts, and branches \
    that are out of sync with their upstream. Directories that are unversioned or \
    use an unsupported version-control system are flagged as needing attention.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The root directory holding the working copies")]
    root: String,
    #[arg(long, help = "Disable ANSI color in the rendered report")]
    no_color: bool,
    #[arg(long, help = "Render only directories that need attention")]
    only_dirty: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let scanner = Scanner::new(
        &cli.root,
        ScanOptions::new(cli.only_dirty),
        Box::new(std::io::stdout()),
    )?;
    let summary = scanner.scan().await?;

    Ok(if summary.all_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
