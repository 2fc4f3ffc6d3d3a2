pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod models;
pub mod server;
pub mod suggestions;

use std::error::Error;
use std::net::SocketAddr;

use cli::Args;
use config::prompt::load_system_prompt;
use llm::{chat, LlmConfig};
use log::info;
use server::{AppState, Server};

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    args.validate()?;

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Chat Model: {}", args.chat_model);
    info!("Temperature: {}", args.temperature);
    info!("Max Tokens: {}", args.max_tokens);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("History Limit: {}", args.history_limit);
    info!("Max Suggestions: {}", args.max_suggestions);
    info!("Allowed Origins: {}", args.allowed_origins);
    info!(
        "API Key: {}",
        if args.chat_api_key.trim().is_empty() { "missing" } else { "configured" }
    );
    info!("-------------------------");

    let system_prompt = load_system_prompt(args.system_prompt_path.as_deref())?;
    let client = chat::new_client(&LlmConfig::from_args(&args))?;
    let addr: SocketAddr = args.server_addr.parse()?;

    let state = AppState::new(client, system_prompt, args);
    Server::new(addr, state).run().await
}
