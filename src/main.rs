//! Wayfarer chat binary.
//!
//! Reads one user utterance per line from stdin, drives it through the
//! conversation stage machine, and prints the assistant reply. One turn is
//! fully processed before the next line is read.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wayfarer::adapters::ai::{BackendEndpoint, ChatCompletionsRunner};
use wayfarer::adapters::memory::JsonlMemoryStore;
use wayfarer::application::handlers::ProcessTurnHandler;
use wayfarer::config::AppConfig;
use wayfarer::domain::conversation::Session;

const GREETING: &str = "How can I assist you with your travel plans today?";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let runner = ChatCompletionsRunner::new(
        BackendEndpoint::new(
            config.ai.openrouter_key(),
            config.ai.openrouter_base_url.clone(),
        ),
        BackendEndpoint::new(config.ai.groq_key(), config.ai.groq_base_url.clone()),
        config.ai.timeout(),
    );
    let memory = JsonlMemoryStore::new(config.memory.path.clone());
    let handler = ProcessTurnHandler::new(Arc::new(runner), Arc::new(memory));

    let mut session = Session::new();
    info!(session = %session.id(), "session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("{GREETING}");
    print_prompt(&mut stdout).await;

    while let Ok(Some(line)) = lines.next_line().await {
        let utterance = line.trim();
        if utterance.is_empty() {
            print_prompt(&mut stdout).await;
            continue;
        }
        if matches!(utterance.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        let reply = handler.handle(&mut session, utterance).await;
        println!("\n{reply}\n");
        print_prompt(&mut stdout).await;
    }

    info!(session = %session.id(), turns = session.transcript().len(), "session ended");
}

async fn print_prompt(stdout: &mut tokio::io::Stdout) {
    let _ = stdout.write_all(b"> ").await;
    let _ = stdout.flush().await;
}
