use clap::Parser;
use lexfind_core::config::Backend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexfind", about = "Natural-language product search over a static catalog")]
struct Cli {
    /// Tagging backend: local or remote (remote needs remote.api_key).
    #[arg(long)]
    backend: Option<Backend>,

    /// Product catalog JSON file (defaults to the built-in demo catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write debug logs to /tmp/lexfind-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/lexfind-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("lexfind debug log started, tail -f /tmp/lexfind-debug.log");
    }

    lexfind_app::run(lexfind_app::RunOptions { backend: cli.backend, catalog: cli.catalog }).await
}
