//! Local FAQ responder — keyword matching, no network.
//!
//! Wraps a loaded corpus and the configured fallback answer behind the
//! same `Responder` trait as the remote backend. Total: the matcher
//! always produces some answer, so `respond` never fails.

use async_trait::async_trait;
use foliobot_core::error::Result;
use foliobot_core::traits::Responder;
use foliobot_faq::{FaqCorpus, find_answer};

pub struct LocalResponder {
    corpus: FaqCorpus,
    fallback: String,
}

impl LocalResponder {
    pub fn new(corpus: FaqCorpus, fallback: String) -> Self {
        Self { corpus, fallback }
    }
}

#[async_trait]
impl Responder for LocalResponder {
    fn name(&self) -> &str {
        "local-faq"
    }

    async fn respond(&self, message: &str) -> Result<String> {
        Ok(find_answer(message, &self.corpus, &self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_responder_matches() {
        let corpus = FaqCorpus::parse("Q:hello|hi A:Hello there!");
        let responder = LocalResponder::new(corpus, "fallback".into());
        assert_eq!(responder.respond("hi").await.unwrap(), "Hello there!");
    }

    #[tokio::test]
    async fn test_local_responder_never_fails() {
        let responder = LocalResponder::new(FaqCorpus::default(), "fallback".into());
        assert_eq!(responder.respond("anything").await.unwrap(), "fallback");
    }
}
