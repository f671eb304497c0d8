use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voxlaunch::config::Settings;

mod cli;

#[derive(Parser)]
#[command(name = "voxlaunch")]
#[command(about = "Voice-driven application launcher")]
#[command(version)]
struct Cli {
    /// Path to the apps file (defaults to the configured apps_file)
    #[arg(short, long, global = true)]
    apps: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.voxlaunch/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a single utterance and run the resulting action
    Interpret {
        /// The utterance, as the speech engine finalized it
        text: String,

        /// Print the parsed action as JSON instead of executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Read utterances from stdin (one per line) and act on them
    Listen,

    /// List the registered applications
    Apps,

    /// Write a starter apps.json and default config
    Init {
        /// Overwrite an existing apps file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load()?,
    };
    let apps_file = cli.apps.unwrap_or(settings.apps_file);

    match cli.command {
        Some(Commands::Interpret { text, dry_run }) => {
            cli::interpret::interpret_command(&apps_file, &text, dry_run).await?;
        }
        Some(Commands::Listen) | None => {
            cli::listen::listen_command(&apps_file).await?;
        }
        Some(Commands::Apps) => {
            cli::apps::apps_command(&apps_file).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&apps_file, force).await?;
        }
    }

    Ok(())
}
