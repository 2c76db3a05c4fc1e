//! # Foliobot Responders
//!
//! Answer backends behind the `Responder` trait: the remote completion
//! endpoint, the local FAQ matcher, and a failover chain that prefers
//! the remote path and degrades to the local one when it fails.

pub mod failover;
pub mod local;
pub mod remote;

use foliobot_core::Responder;
use foliobot_core::config::FoliobotConfig;
use foliobot_faq::FaqCorpus;

/// Build the default responder chain from configuration: remote primary,
/// local FAQ fallback. `local_only` skips the network entirely.
pub fn create_responder(
    config: &FoliobotConfig,
    corpus: FaqCorpus,
    local_only: bool,
) -> Box<dyn Responder> {
    let local = local::LocalResponder::new(corpus, config.identity.fallback_answer());
    if local_only {
        return Box::new(local);
    }
    let remote = remote::RemoteResponder::new(&config.remote);
    Box::new(failover::FailoverResponder::new(vec![
        Box::new(remote),
        Box::new(local),
    ]))
}
