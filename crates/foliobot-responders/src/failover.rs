//! Responder failover — try the remote backend, degrade to local.
//!
//! Lightweight chain: each responder is tried in order and the first
//! success wins. No health slots or cooldowns — with a two-element
//! chain whose tail never fails there is nothing to track.

use async_trait::async_trait;
use foliobot_core::error::{FoliobotError, Result};
use foliobot_core::traits::Responder;

pub struct FailoverResponder {
    chain: Vec<Box<dyn Responder>>,
}

impl FailoverResponder {
    /// Create a failover chain. First responder is primary, rest are
    /// fallbacks.
    pub fn new(chain: Vec<Box<dyn Responder>>) -> Self {
        assert!(!chain.is_empty(), "Need at least one responder");
        Self { chain }
    }

    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }
}

#[async_trait]
impl Responder for FailoverResponder {
    fn name(&self) -> &str {
        self.chain
            .first()
            .map(|r| r.name())
            .unwrap_or("failover")
    }

    async fn respond(&self, message: &str) -> Result<String> {
        let mut last_error = None;

        for (idx, responder) in self.chain.iter().enumerate() {
            match responder.respond(message).await {
                Ok(response) => {
                    if idx > 0 {
                        tracing::info!(
                            "Failover: {} → {} (success)",
                            self.chain[0].name(),
                            responder.name()
                        );
                    }
                    return Ok(response);
                }
                Err(e) => {
                    tracing::warn!("Responder {} failed: {e}", responder.name());
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| FoliobotError::Remote("All responders failed".into())))
    }
}
