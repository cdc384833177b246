//! Porter - Entry Point
//!
//! Binary entry point for the porter server. Lives in the `porter`
//! facade crate so the library and binary share one package.

use clap::Parser;
use porter_server::run;

/// Command line interface for porter
#[derive(Parser, Debug)]
#[command(name = "porter")]
#[command(about = "Porter - cache regions and login admission over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

/// Load configuration, wire the providers, and launch the HTTP server
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await?;
    Ok(())
}
