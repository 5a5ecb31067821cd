//! # campus-chat
//!
//! Bilingual (Arabic/English) query-understanding and response-dispatch
//! engine for a college information system.
//!
//! Free-form questions are detected for language, translated best-effort,
//! classified against a prioritized keyword registry, and dispatched to
//! domain handlers over an external data-access capability. Queries the
//! classifier cannot place fall back to TF-IDF cosine matching against
//! question templates generated from live course records. Every answer is
//! one of a closed set of display payloads.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod nlp;
pub mod store;
pub mod translate;

pub use config::ChatConfig;
pub use engine::{ChatEngine, SessionContext};
pub use error::{Error, Result};
pub use format::DisplayPayload;
pub use nlp::Language;
pub use store::{DataAccess, MemoryStore};
pub use translate::{NoopTranslator, Translate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::Upstream("database unreachable".to_string());
        assert!(err.to_string().contains("database unreachable"));
    }
}
