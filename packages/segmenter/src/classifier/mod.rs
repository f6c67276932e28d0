//! Line classification for plain-text statutes.
//!
//! Each line is offered to an ordered list of rules; the first rule that
//! recognizes the line decides its classification. Lines no rule claims
//! are body text, so classification never fails.

mod config;
mod core;
mod rule;
pub mod rules;
mod types;

pub use config::create_statute_classifier;
pub use core::LineClassifier;
pub use rule::LineRule;
pub use types::LineClass;
