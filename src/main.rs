use anyhow::Result;
use clap::{Parser, Subcommand};

/// larder - household shopping list reconciliation
#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Keeps the shopping list in step with the pantry and the meal plan", long_about = None)]
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
    /// Print the shopping category of each item name
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Parse free text into name, quantity and unit
    Parse { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = larder::config::Config::load(cli.config)?;
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            larder::observability::init_observability(
                "larder",
                env!("CARGO_PKG_VERSION"),
                &config.observability.log_level,
            )?;

            larder::cli::serve(config, host, port).await
        }
        Commands::Categorize { names } => {
            for line in larder::cli::categorize(&names) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Parse { text } => {
            for line in larder::cli::parse(&text) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
