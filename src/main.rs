// src/main.rs
// file-export - MCP server turning workflow outputs into files

use anyhow::Result;
use clap::{Parser, Subcommand};
use file_export::config::EnvConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "file-export")]
#[command(about = "MCP server that turns workflow outputs into downloadable file artifacts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = EnvConfig::from_env();

    // Quiet by default: stdout belongs to the MCP transport, and
    // logging goes to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level_or(Level::WARN))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            file_export::mcp::serve_stdio().await?;
        }
    }

    Ok(())
}
