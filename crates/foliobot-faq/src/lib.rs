//! # Foliobot FAQ
//!
//! The local question-answering core: a line-oriented FAQ corpus and a
//! deliberately crude keyword scorer over it.
//!
//! ## Design
//! - **Line format** — one record per line: `Q:<q1>|<q2>|...A:<answer>`
//! - **Scoring** — exact / substring / word-overlap (100/50/10), no
//!   stemming, no corpus-frequency weighting
//! - **Deterministic** — insertion order breaks ties, so answers are
//!   stable and explainable
//! - Zero I/O at match time; the corpus is loaded once and read-only

pub mod corpus;
pub mod matcher;
pub mod suggest;

pub use corpus::{FaqCorpus, FaqRecord};
pub use matcher::find_answer;
