use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::extractor::{extract_chatgpt_conversation, extract_gemini_conversation};

#[derive(Parser)]
#[command(name = "chat-share-extractor")]
#[command(version = "0.1.0")]
#[command(
    about = "Scrape shared chat-assistant conversations and export them as JSON",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape a shared Gemini conversation
    Gemini {
        /// Share URL (defaults to the bundled demo URL if omitted)
        share_url: Option<String>,
    },
    /// Scrape a shared ChatGPT conversation
    Chatgpt {
        /// Share URL (defaults to the bundled demo URL if omitted)
        share_url: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Gemini { share_url }) => {
            let (json_path, conversation_id) = extract_gemini_conversation(share_url.as_deref())?;
            println!("Saved {} to {}", conversation_id, json_path.display());
        }
        Some(Commands::Chatgpt { share_url }) => {
            let (json_path, conversation_id) = extract_chatgpt_conversation(share_url.as_deref())?;
            println!("Saved {} to {}", conversation_id, json_path.display());
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
