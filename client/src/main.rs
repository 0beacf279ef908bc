//! QuickGPT command-line client.
//!
//! # Usage
//!
//! ```bash
//! quickgpt register --name Alice --email alice@example.com --password 'Password123!'
//! quickgpt login --email alice@example.com --password 'Password123!'
//! quickgpt chats --search rust
//! quickgpt new
//! quickgpt say <chat-id> What is ownership?
//! quickgpt delete <chat-id>
//! quickgpt logout
//! ```
//!
//! The session token is kept in `--token-file` between runs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use client::services::api::DEFAULT_SERVER_URL;
use client::session::{chat_title, NoticeLevel};
use client::{ApiClient, FileTokenStore, SessionManager};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quickgpt")]
#[command(author, version, about = "QuickGPT chat client")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "QUICKGPT_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Where the session token is stored
    #[arg(long, env = "QUICKGPT_TOKEN_FILE", default_value = ".quickgpt-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "QUICKGPT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "QUICKGPT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user and remaining credits
    Whoami,
    /// List chats, most recent first
    Chats {
        /// Only chats whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Start a new chat
    New,
    /// Delete a chat
    Delete { chat_id: String },
    /// Send a message to a chat
    Say {
        chat_id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = Arc::new(ApiClient::new(cli.server));
    let store = Box::new(FileTokenStore::new(cli.token_file));
    let mut manager = SessionManager::new(api, store);

    let result = execute(&mut manager, cli.command).await;
    print_notices(&mut manager);
    result
}

async fn execute(manager: &mut SessionManager, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Register { name, email, password } => {
            manager.register(&name, &email, &password).await?;
        }
        Commands::Login { email, password } => {
            manager.login(&email, &password).await?;
        }
        Commands::Logout => manager.logout()?,
        Commands::Whoami => {
            require_session(manager).await?;
            if let Some(user) = &manager.session().user {
                println!("{} <{}>", user.name, user.email);
                println!("credits: {}", user.credits);
            }
        }
        Commands::Chats { search } => {
            require_session(manager).await?;
            let chats = manager.search(search.as_deref().unwrap_or(""));
            if chats.is_empty() {
                println!("No chats");
            }
            for chat in chats {
                println!(
                    "{}  {}  {}",
                    chat.id,
                    chat.updated_at.format("%Y-%m-%d %H:%M"),
                    chat_title(chat)
                );
            }
        }
        Commands::New => {
            require_session(manager).await?;
            let chat = manager.create_chat().await?;
            println!("{}", chat.id);
        }
        Commands::Delete { chat_id } => {
            require_session(manager).await?;
            manager.delete_chat(&chat_id).await?;
        }
        Commands::Say { chat_id, text } => {
            require_session(manager).await?;
            let chat = manager.send_message(&chat_id, &text.join(" ")).await?;
            for message in &chat.messages {
                println!("[{}] {}", message.role, message.content);
            }
            if let Some(user) = &manager.session().user {
                println!("credits left: {}", user.credits);
            }
        }
    }
    Ok(())
}

/// Resume the stored session or fail with a hint to log in.
async fn require_session(manager: &mut SessionManager) -> anyhow::Result<()> {
    let restored = manager.restore().await.context("Failed to restore session")?;
    if !restored {
        anyhow::bail!("Not logged in, run `quickgpt login` first");
    }
    Ok(())
}

fn print_notices(manager: &mut SessionManager) {
    for notice in manager.session_mut().drain_notices() {
        match notice.level {
            NoticeLevel::Error => eprintln!("✗ {}", notice.text),
            NoticeLevel::Success => eprintln!("✓ {}", notice.text),
            NoticeLevel::Info => eprintln!("{}", notice.text),
        }
    }
}
