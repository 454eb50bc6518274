//! kiro CLI: terminal chat with the scripted site assistant, script validation, and
//! script display. Config from env and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use kiro_cli::{repl, Cli, Commands, KiroConfig};
use kiro_core::init_tracing;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { script } => {
            let config = KiroConfig::load(script)?;
            ensure_log_dir(&config.log_file)?;
            init_tracing(&config.log_file)?;
            let script = config.load_script().context("Load chat script")?;
            repl::run(script)
        }
        Commands::Validate { script } => handle_validate(script),
        Commands::ShowScript { script } => handle_show_script(script),
    }
}

/// The log file lives under a directory that may not exist yet (default logs/).
fn ensure_log_dir(log_file: &str) -> Result<()> {
    if let Some(parent) = Path::new(log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Create log directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Handle the validate command.
///
/// Loads the configured script and runs the closure check; exits non-zero with
/// the defect when it fails. Initializes tracing so loader info logs go to console.
fn handle_validate(script: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        )
        .with_target(false)
        .init();

    let config = KiroConfig::load(script)?;
    let script = config.load_script().context("Load chat script")?;
    script
        .validate()
        .context("Script failed the closure check")?;

    println!(
        "Script OK: {} topics, greeting offers {}.",
        script.topics().count(),
        script.greeting.root_topics.len()
    );
    Ok(())
}

/// Handle the show-script command.
///
/// Prints the bot identity, greeting, and every topic's reply with the topics it
/// offers next.
fn handle_show_script(script: Option<PathBuf>) -> Result<()> {
    let config = KiroConfig::load(script)?;
    let script = config.load_script().context("Load chat script")?;

    println!("{} - {}", script.bot_name, script.tagline);
    println!("\nGreeting: {}", script.greeting.text);
    println!("Root topics: {}", join_labels(&script.greeting.root_topics));

    for topic in script.topics() {
        if let Some(entry) = script.entry(topic) {
            println!("\n[{}]", topic);
            println!("{}", entry.text);
            println!("Next: {}", join_labels(&entry.next_topics));
        }
    }
    Ok(())
}

fn join_labels(topics: &[kiro_core::Topic]) -> String {
    topics
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}
