//! Natural-language understanding for bilingual campus queries.
//!
//! Language detection, keyword intent classification, best-effort entity
//! extraction and the TF-IDF similarity fallback live here; dispatching
//! the understood query belongs to [`crate::engine`].

pub mod entity;
pub mod intent;
pub mod language;
pub mod similarity;

pub use entity::{EntityBundle, EntityExtractor};
pub use intent::{IntentDef, IntentKind, IntentRegistry};
pub use language::Language;
pub use similarity::{CandidateQuestion, CandidateTarget, SimilarityResult};
