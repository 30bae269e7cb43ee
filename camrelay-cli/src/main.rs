use anyhow::Result;
use camrelay_server::{RuntimeKind, ServerConfig};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "camrelay")]
#[command(about = "Signaling relay between camera clients and admin viewers")]
struct Cli {
    /// Default tracing filter
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay, the photo upload endpoints and the uploads file server
    Serve(ServerConfig),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(config) => {
            let runtime = match config.runtime {
                RuntimeKind::Shared => "shared registry",
                RuntimeKind::Actor => "relay actor",
            };

            println!("{}", "📡 Starting camrelay...".green().bold());
            println!("   🔌 Signaling: ws://{}:{}/ws", config.host, config.port);
            println!("   🧵 Runtime:   {}", runtime);
            println!("   📂 Uploads:   {}", config.uploads_dir.display());

            camrelay_server::serve(config).await?;
        }
    }

    Ok(())
}
