//! # Foliobot — portfolio chat assistant
//!
//! Answers visitor questions from a remote completion backend, with a
//! local keyword-matching FAQ corpus as offline fallback.
//!
//! Usage:
//!   foliobot                         # Interactive chat session
//!   foliobot -q "show me projects"   # Answer one question and exit
//!   foliobot --local                 # Skip the network, FAQ only

mod session;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use foliobot_core::config::FoliobotConfig;
use foliobot_faq::FaqCorpus;
use session::{ChatSession, SessionAction};

#[derive(Parser)]
#[command(name = "foliobot", version, about = "Portfolio chat assistant")]
struct Cli {
    /// Path to config file (default: ~/.foliobot/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the FAQ corpus (overrides config)
    #[arg(long)]
    corpus: Option<String>,

    /// Answer a single question and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Answer from the local FAQ corpus only, no remote calls
    #[arg(long)]
    local: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "foliobot=debug,foliobot_responders=debug,foliobot_faq=debug"
    } else {
        "foliobot=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => FoliobotConfig::load_from(Path::new(&expand_path(path)))?,
        None => FoliobotConfig::load()?,
    };

    let corpus_path = expand_path(cli.corpus.as_deref().unwrap_or(&config.corpus.path));
    let corpus = FaqCorpus::load(Path::new(&corpus_path), &config.identity.apology());

    let responder = foliobot_responders::create_responder(&config, corpus.clone(), cli.local);

    // One-shot mode: answer and exit.
    if let Some(question) = cli.query {
        let answer = match responder.respond(&question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Chat error: {e}");
                config.identity.apology()
            }
        };
        println!("{answer}");
        return Ok(());
    }

    let mut session = ChatSession::new(corpus, responder, config.identity.clone());
    run_interactive(&mut session).await
}

/// Interactive loop: stdin lines mapped onto session actions.
async fn run_interactive(session: &mut ChatSession) -> Result<()> {
    println!("Type a question, or /suggest <text>, /close, /open, /quit.");
    session.dispatch(SessionAction::Toggle).await;
    let mut printed = render_new(session, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let action = match line.trim() {
            "/quit" | "/exit" => SessionAction::Quit,
            "/open" | "/close" => SessionAction::Toggle,
            rest if rest.starts_with("/suggest") => {
                SessionAction::InputChanged(rest.trim_start_matches("/suggest").to_string())
            }
            text => SessionAction::Send(text.to_string()),
        };
        session.dispatch(action).await;

        if session.is_quit() {
            break;
        }
        if !session.is_open() {
            println!("(chat closed — /open to resume)");
            continue;
        }
        printed = render_new(session, printed);
    }

    println!("Bye!");
    Ok(())
}

/// Print history entries past `from` plus the current suggestion strip.
/// Only bot messages are echoed; the user's own line is already on
/// screen. Returns the new high-water mark.
fn render_new(session: &ChatSession, from: usize) -> usize {
    for message in &session.history()[from..] {
        if message.sender == foliobot_core::types::Sender::Bot {
            println!("{}: {}", session.bot_name(), message.content);
        }
    }
    if !session.suggestions().is_empty() {
        println!("  [{}]", session.suggestions().join("] ["));
    }
    session.history().len()
}
