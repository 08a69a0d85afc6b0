#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;
mod render;

use command::{ChatInput, ChatStrategy, CommandStrategy, InitStrategy, ServeInput, ServeStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "parla")]
#[command(about = "Italian learning assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat in the terminal
    Chat {
        /// Single message to send instead of the interactive loop
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Run the HTTP API
    Serve {
        /// Port override
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { message } => ChatStrategy.execute(ChatInput { message }).await,
        Commands::Serve { port } => ServeStrategy.execute(ServeInput { port }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
