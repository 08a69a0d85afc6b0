//! Terminal chat command.

use std::io::Write;

use parla_config::Config;
use parla_core::DialogueEngine;
use tracing::info;

use crate::render;

use super::load_content;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
///
/// Keeps one engine for the whole terminal session, so the conversation
/// history accumulates across turns exactly as it does behind the HTTP API.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = load_content(&config)?;
        let mut engine = DialogueEngine::new(store);

        if let Some(message) = input.message {
            let result = engine.process(&message);
            println!("{}", render::render_result(&result));
            return Ok(());
        }

        println!("Ciao! Sono il tuo assistente per imparare l'italiano. Come posso aiutarti oggi?");
        println!("Scrivi 'exit' per uscire.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if matches!(line, "exit" | "quit" | "q") {
                break;
            }
            if line.is_empty() {
                continue;
            }

            let result = engine.process(line);
            println!("\n{}\n", render::render_result(&result));
        }

        info!(
            "Conversation ended: {} turns",
            engine.context().turn_count()
        );
        Ok(())
    }
}
