//! Migaki CLI - Polish drafts from the terminal
//!
//! Thin client for the Migaki API.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use std::fs;

use api::MigakiClient;
use config::Config;

/// Wire names and display labels of the selectable tones, in UI order
const TONES: [(&str, &str); 3] = [
    ("formal", "Formal and Direct"),
    ("empathetic", "Empathetic and Warm"),
    ("persuasive", "Persuasive (Sales)"),
];

#[derive(Parser)]
#[command(name = "migaki")]
#[command(about = "Migaki CLI - turn rough drafts into professional emails", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Polish a draft into a professional email
    Polish {
        /// Draft text (prompts interactively if omitted)
        draft: Option<String>,
        /// Read the draft from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Tone: formal, empathetic, or persuasive
        #[arg(short, long)]
        tone: Option<String>,
    },

    /// Check API connectivity
    Health,

    /// Show current configuration
    Config,

    /// Set the API base URL
    SetUrl {
        /// Base URL of the Migaki API
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Polish { draft, file, tone } => polish(&config, draft, file, tone).await,
        Commands::Health => health(&config).await,
        Commands::Config => show_config(&config),
        Commands::SetUrl { url } => set_url(url),
    }
}

async fn polish(
    config: &Config,
    draft: Option<String>,
    file: Option<String>,
    tone: Option<String>,
) -> Result<()> {
    let draft = match (draft, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft from {}", path))?,
        (None, None) => Input::<String>::new()
            .with_prompt("Draft (loose ideas are fine)")
            .interact_text()?,
    };

    if draft.trim().is_empty() {
        println!("{}", "Please write something in the draft first.".yellow());
        return Ok(());
    }

    let tone = match tone {
        Some(tone) => tone,
        None => {
            let labels: Vec<&str> = TONES.iter().map(|(_, label)| *label).collect();
            let selection = Select::new()
                .with_prompt("Tone")
                .items(&labels)
                .default(0)
                .interact()?;
            TONES[selection].0.to_string()
        }
    };

    let client = MigakiClient::new(&config.base_url);
    println!("{}", "Polishing your draft...".dimmed());

    match client.polish(&draft, &tone).await {
        Ok(polished) => {
            println!();
            println!("{}", "Email ready:".green().bold());
            println!();
            println!("{}", polished.email);
            println!();
            println!(
                "{}",
                format!(
                    "model: {} | tokens: {}",
                    polished.model, polished.usage.total_tokens
                )
                .dimmed()
            );
            println!("{}", "Review the content before sending.".dimmed());
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }

    Ok(())
}

async fn health(config: &Config) -> Result<()> {
    let client = MigakiClient::new(&config.base_url);

    if client.health().await.unwrap_or(false) {
        println!("{} {}", "OK".green().bold(), config.base_url);
    } else {
        println!("{} {}", "Unreachable".red().bold(), config.base_url);
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration".bold());
    println!("  path:     {:?}", Config::config_path()?);
    println!("  base_url: {}", config.base_url);
    Ok(())
}

fn set_url(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(url);
    config.save()?;
    println!("{} base_url = {}", "Saved".green().bold(), config.base_url);
    Ok(())
}
