//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kiro")]
#[command(about = "Kiro scripted chatbot CLI: chat, validate, show-script", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with Kiro in the terminal (script from KIRO_SCRIPT_PATH; --script overrides).
    Chat {
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Check a script: every offered topic must have an entry (closure property).
    Validate {
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Print the script: greeting, then each topic's reply and next offered topics.
    ShowScript {
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}
