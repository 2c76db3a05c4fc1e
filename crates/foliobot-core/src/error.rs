//! Foliobot error type.
//!
//! Only startup-time problems (bad config) and remote-call failures are
//! surfaced as errors. Everything user-facing degrades to a fixed reply
//! instead of propagating — the session always has something to say.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, FoliobotError>;

#[derive(Debug, Error)]
pub enum FoliobotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Remote error: {0}")]
    Remote(String),
}
