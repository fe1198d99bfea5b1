// ABOUTME: CLI entry point for db2sqlite
// ABOUTME: Parses the source path argument and runs the one-shot conversion

use clap::Parser;

#[derive(Parser)]
#[command(name = "db2sqlite")]
#[command(
    about = "Copy every table, column, and row of a file database into a fresh SQLite file",
    long_about = None
)]
struct Cli {
    /// Path to the source database file
    #[arg(default_value = "input/output.db")]
    source: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    db2sqlite::commands::convert(&cli.source)
}
