use anyhow::Result;
use clap::{Parser, Subcommand};

/// kitcha - shopping lists and grocery budget for your meal plans
#[derive(Parser)]
#[command(name = "kitcha")]
#[command(about = "Shopping lists and weekly grocery budget", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = kitcha::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kitcha::observability::init_observability(
        "kitcha",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => kitcha::cli::serve(config, host, port).await,
        Commands::Migrate => kitcha::cli::migrate(config).await,
        Commands::Reset => kitcha::cli::reset(config).await,
    }
}
