//! Translation capability consumed by the chat engine.
//!
//! Translation is best-effort: the engine falls back to the original text
//! whenever an implementor fails, so downstream classification may operate
//! on untranslated input. That degradation is accepted by design.

use crate::error::Result;
use crate::nlp::language::Language;
use async_trait::async_trait;

/// External text translation.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translates `text` into `target`. Implementors may fail; the engine
    /// never propagates that failure past its own call site.
    async fn translate(&self, text: &str, target: Language) -> Result<String>;
}

/// Identity translator for tests and deployments without a translation
/// backend. Arabic queries then classify against the Arabic keyword
/// patterns directly.
#[derive(Debug, Clone, Default)]
pub struct NoopTranslator;

#[async_trait]
impl Translate for NoopTranslator {
    async fn translate(&self, text: &str, _target: Language) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_translator_returns_input() {
        let t = NoopTranslator;
        let out = t.translate("ما هي موادي؟", Language::English).await.unwrap();
        assert_eq!(out, "ما هي موادي؟");
    }
}
