use clap::{Parser, Subcommand};

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "revlens")]
#[command(about = "Customer review sentiment analysis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full analysis pass over a review CSV
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("REVLENS_LOG_LEVEL")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run_analyze(&args),
    }
}
