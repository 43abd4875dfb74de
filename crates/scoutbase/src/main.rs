// SPDX-FileCopyrightText: 2026 Scoutbase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoutbase - marketplace messaging core, demo binary.
//!
//! Drives the in-memory message store and the session controller from the
//! command line. The `demo` subcommand walks one full conversation round
//! trip, scripted reply included.

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scoutbase_session::{SessionConfig, SessionController, TracingNotifier};
use scoutbase_storage::{Latency, MemoryStore};

/// Scoutbase - marketplace messaging core.
#[derive(Parser, Debug)]
#[command(name = "scoutbase", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scripted conversation round trip against the demo store.
    Demo {
        /// Message to send into the selected conversation.
        #[arg(long, default_value = "Hi! Is the base still available in July?")]
        message: String,
    },
    /// List the seeded conversations.
    Conversations,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("scoutbase: invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = config::validate(&config) {
        eprintln!("scoutbase: {e}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone())),
        )
        .init();

    match cli.command {
        Some(Commands::Demo { message }) => run_demo(&config, &message).await,
        Some(Commands::Conversations) => list_conversations(&config).await,
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("scoutbase: use --help for available commands");
        }
    }
}

fn store_for(config: &config::ScoutbaseConfig) -> Arc<MemoryStore> {
    let latency = if config.messaging.simulate_latency {
        Latency::simulated()
    } else {
        Latency::none()
    };
    Arc::new(MemoryStore::demo(latency))
}

fn session_for(config: &config::ScoutbaseConfig, store: Arc<MemoryStore>) -> SessionController {
    SessionController::new(
        store,
        Arc::new(TracingNotifier::default()),
        SessionConfig {
            reply_delay: Duration::from_millis(config.messaging.reply_delay_ms),
        },
    )
}

async fn run_demo(config: &config::ScoutbaseConfig, message: &str) {
    info!(agent = %config.agent.name, "starting demo session");
    let controller = session_for(config, store_for(config));

    controller.initialize().await;
    let Some(active) = controller.active_conversation().await else {
        eprintln!("scoutbase: no conversation available");
        return;
    };
    let conversations = controller.conversations().await;
    if let Some(thread) = conversations.iter().find(|c| c.id == active) {
        println!(
            "Talking to {} about {}",
            thread.counterpart_name, thread.venue_name
        );
    }

    println!("> {message}");
    if !controller.send_message(message).await {
        eprintln!("scoutbase: send failed, see log for details");
        controller.close().await;
        return;
    }

    // Give the scripted reply time to land, plus slack for store latency.
    tokio::time::sleep(Duration::from_millis(config.messaging.reply_delay_ms + 1500)).await;

    for entry in controller.messages().await {
        let who = entry
            .sender_name
            .clone()
            .unwrap_or_else(|| entry.sender.to_string());
        println!("[{}] {}: {}", entry.timestamp, who, entry.content);
    }

    controller.close().await;
}

async fn list_conversations(config: &config::ScoutbaseConfig) {
    let controller = session_for(config, store_for(config));
    controller.initialize().await;
    for thread in controller.conversations().await {
        let marker = if thread.unread { "*" } else { " " };
        println!(
            "{marker} {} | {} ({}) | {}",
            thread.id, thread.counterpart_name, thread.venue_name, thread.last_message
        );
    }
    controller.close().await;
}

fn print_config(config: &config::ScoutbaseConfig) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("scoutbase: could not render config: {e}"),
    }
}
