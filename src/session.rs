//! Conversation session — the controller behind the chat surface.
//!
//! Owns the widget state explicitly (open/closed flag, append-only
//! message history, suggestion strip) and sequences every exchange:
//! capture input → reject empty → record the user message → typing
//! placeholder → await the responder → record the reply or the apology.
//! Actions arrive through a small dispatch enum so any frontend (the
//! stdin loop here, or something richer) drives the same controller.

use std::io::Write;

use foliobot_core::config::IdentityConfig;
use foliobot_core::traits::Responder;
use foliobot_core::types::ChatMessage;
use foliobot_faq::FaqCorpus;
use foliobot_faq::suggest::{default_replies, suggest};

/// User actions the session reacts to.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Open or close the chat surface.
    Toggle,
    /// Send a message and await the reply.
    Send(String),
    /// The input field changed; refresh the suggestion strip.
    InputChanged(String),
    /// End the session.
    Quit,
}

pub struct ChatSession {
    open: bool,
    welcomed: bool,
    quit: bool,
    history: Vec<ChatMessage>,
    suggestions: Vec<String>,
    corpus: FaqCorpus,
    responder: Box<dyn Responder>,
    identity: IdentityConfig,
}

impl ChatSession {
    pub fn new(corpus: FaqCorpus, responder: Box<dyn Responder>, identity: IdentityConfig) -> Self {
        Self {
            open: false,
            welcomed: false,
            quit: false,
            history: Vec::new(),
            suggestions: Vec::new(),
            corpus,
            responder,
            identity,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn bot_name(&self) -> &str {
        &self.identity.bot_name
    }

    /// Handle one user action. Infallible: every failure path degrades
    /// to a visible reply instead of an error.
    pub async fn dispatch(&mut self, action: SessionAction) {
        match action {
            SessionAction::Toggle => self.toggle(),
            SessionAction::Send(text) => self.send(&text).await,
            SessionAction::InputChanged(text) => self.update_suggestions(&text),
            SessionAction::Quit => self.quit = true,
        }
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        if self.open && !self.welcomed {
            self.welcomed = true;
            self.history.push(ChatMessage::bot(self.identity.welcome.clone()));
            self.suggestions = default_replies(&self.identity.owner);
        }
    }

    async fn send(&mut self, text: &str) {
        let message = text.trim();
        if message.is_empty() {
            return;
        }

        self.history.push(ChatMessage::user(message));
        self.suggestions.clear();

        // Transient typing placeholder, cleared once the reply arrives.
        print!("{} is typing...\r", self.identity.bot_name);
        let _ = std::io::stdout().flush();

        let reply = match self.responder.respond(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Chat error: {e}");
                self.identity.apology()
            }
        };

        print!("\x1b[2K\r");
        let _ = std::io::stdout().flush();

        self.history.push(ChatMessage::bot(reply));
        self.suggestions = default_replies(&self.identity.owner);
    }

    fn update_suggestions(&mut self, input: &str) {
        if input.trim().is_empty() {
            self.suggestions = default_replies(&self.identity.owner);
        } else {
            self.suggestions = suggest(input, &self.corpus);
        }
    }
}
