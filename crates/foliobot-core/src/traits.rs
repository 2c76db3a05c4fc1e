//! The `Responder` trait — anything that can answer a visitor message.
//!
//! Implemented by the remote HTTP backend, the local FAQ matcher, and the
//! failover chain that combines them. The session only sees this trait.

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait Responder: Send + Sync {
    /// Responder name for logging.
    fn name(&self) -> &str;

    /// Answer a single visitor message. One request/response exchange,
    /// no conversation context.
    async fn respond(&self, message: &str) -> Result<String>;
}
