use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use invoice_normalizer::config::Config;
use invoice_normalizer::logging;
use invoice_normalizer::normalize::normalize_invoice_data;
use invoice_normalizer::server::start_server;

#[derive(Parser)]
#[command(name = "invoice_normalizer")]
#[command(about = "Normalizes messy invoice records into a canonical schema")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP normalization server
    Serve {
        /// Port to listen on (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Normalize a JSON file once and print or write the result
    Normalize {
        /// Path to the input JSON file
        input: String,
        /// Write the normalized JSON here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config::load()?;
            let port = port.unwrap_or(config.server.port);
            info!("Serve command selected, port={}", port);
            start_server(port)
                .await
                .map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        Commands::Normalize { input, output } => {
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read '{}'", input))?;
            let invoice_data: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("'{}' is not valid JSON", input))?;

            let normalized = normalize_invoice_data(&invoice_data);
            let rendered = serde_json::to_string_pretty(&normalized)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write '{}'", path))?;
                    println!("✅ Normalized output written to {}", path);
                }
                None => println!("{}", rendered),
            }
        }
    }

    Ok(())
}
