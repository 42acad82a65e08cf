use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use gifport::core::config;
use gifport::tui;

#[derive(Parser)]
#[command(name = "gifport", about = "Terminal client for the on-chain GIF portal")]
struct Args {
    /// RPC cluster URL (overrides config file and env)
    #[arg(long)]
    cluster: Option<String>,

    /// Wallet keypair file (overrides config file and env)
    #[arg(long)]
    keypair: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to gifport.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("gifport.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let loaded = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = match config::resolve(&loaded, args.cluster.as_deref(), args.keypair.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    log::info!(
        "Gifport starting up (cluster: {}, program: {})",
        resolved.cluster_url,
        resolved.program_id
    );

    tui::run(resolved)
}
