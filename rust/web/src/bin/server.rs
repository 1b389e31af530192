//! Standalone web server binary
//!
//! Usage: cargo run -p convoca_web --bin convoca-web-server -- --data-file convocations.json

use clap::Parser;
use convoca_web::{LogFormat, ServerConfig, WebServer};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "convoca-web-server", about = "Serves team splits for convocations")]
struct Args {
    /// Host to bind to
    #[arg(long, short = 'H', env = "CONVOCA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, short, env = "CONVOCA_PORT", default_value_t = 8080)]
    port: u16,

    /// JSON file with the convocations to serve
    #[arg(long, short = 'd', env = "CONVOCA_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log output format (text or json)
    #[arg(long, env = "CONVOCA_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = ServerConfig::new(args.host, args.port).with_log_format(args.log_format);
    if let Some(path) = args.data_file {
        config = config.with_data_file(path);
    }
    convoca_web::init_logging(config.log_format())?;

    tracing::info!(
        host = config.host(),
        port = config.port(),
        data_file = ?config.data_file(),
        log_format = %config.log_format(),
        "starting convoca web server"
    );

    let server = WebServer::new(config)?;
    let handle = server.start().await?;

    println!("\nServer running at http://{}", handle.address());
    println!("   Press Ctrl+C to stop\n");

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down server");
    handle.shutdown().await?;
    tracing::info!("server stopped cleanly");

    Ok(())
}
