//! # Foliobot Core
//!
//! Shared foundation for the Foliobot workspace: configuration,
//! the error type, chat message types, and the `Responder` trait
//! that both the remote backend and the local FAQ matcher implement.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::FoliobotConfig;
pub use error::{FoliobotError, Result};
pub use traits::Responder;
