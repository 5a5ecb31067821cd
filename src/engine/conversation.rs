//! Canned bilingual replies for small-talk intents.
//!
//! Reply selection is randomized through an injected RNG so tests can
//! seed it and assert exact output.

use crate::nlp::{IntentKind, Language};
use rand::Rng;

/// Ordered candidate replies for one (intent, language) pair.
#[derive(Debug, Clone)]
struct ReplySet {
    kind: IntentKind,
    language: Language,
    replies: Vec<&'static str>,
}

/// Mapping from intent and language to candidate reply strings.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    sets: Vec<ReplySet>,
    fallback_en: Vec<&'static str>,
    fallback_ar: Vec<&'static str>,
}

/// Capabilities summary appended to help and didn't-understand replies.
pub const CAPABILITIES_EN: &str = "You can ask about: announcements, complaints, courses, \
     exams, grades, who teaches a course, prerequisites, electives and your class schedule.";

pub const CAPABILITIES_AR: &str = "يمكنك السؤال عن: الإعلانات، الشكاوى، المواد، الامتحانات، \
     الدرجات، من يدرس مادة، المتطلبات، المواد الاختيارية وجدول محاضراتك.";

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResponseCatalog {
    /// The standard catalog used by the engine.
    pub fn standard() -> Self {
        let sets = vec![
            ReplySet {
                kind: IntentKind::Greeting,
                language: Language::English,
                replies: vec![
                    "Hello! How can I help you today?",
                    "Hi there! What would you like to know?",
                    "Welcome back! Ask me anything about your courses.",
                ],
            },
            ReplySet {
                kind: IntentKind::Greeting,
                language: Language::Arabic,
                replies: vec![
                    "أهلاً! كيف أقدر أساعدك اليوم؟",
                    "مرحباً! عن ماذا تريد أن تسأل؟",
                    "أهلاً بعودتك! اسألني عن موادك.",
                ],
            },
            ReplySet {
                kind: IntentKind::Thanks,
                language: Language::English,
                replies: vec![
                    "You're welcome!",
                    "Happy to help!",
                    "Anytime!",
                ],
            },
            ReplySet {
                kind: IntentKind::Thanks,
                language: Language::Arabic,
                replies: vec!["على الرحب والسعة!", "في الخدمة دائماً!", "العفو!"],
            },
            ReplySet {
                kind: IntentKind::Goodbye,
                language: Language::English,
                replies: vec![
                    "Goodbye! Good luck with your studies.",
                    "See you later!",
                ],
            },
            ReplySet {
                kind: IntentKind::Goodbye,
                language: Language::Arabic,
                replies: vec!["مع السلامة! بالتوفيق في دراستك.", "إلى اللقاء!"],
            },
        ];
        Self {
            sets,
            fallback_en: vec![
                "I didn't understand your request.",
                "Sorry, I couldn't figure out what you meant.",
                "I'm not sure what you're asking for.",
            ],
            fallback_ar: vec![
                "لم أفهم طلبك.",
                "عذراً، لم أستطع فهم ما تقصده.",
                "لست متأكداً مما تسأل عنه.",
            ],
        }
    }

    /// Picks a randomized reply for a small-talk intent. Help is answered
    /// deterministically with the capabilities summary.
    pub fn pick<R: Rng>(&self, kind: IntentKind, language: Language, rng: &mut R) -> String {
        if kind == IntentKind::Help {
            return match language {
                Language::English => CAPABILITIES_EN.to_string(),
                Language::Arabic => CAPABILITIES_AR.to_string(),
            };
        }
        let set = self
            .sets
            .iter()
            .find(|s| s.kind == kind && s.language == language)
            .or_else(|| self.sets.iter().find(|s| s.kind == kind));
        match set {
            Some(set) => set.replies[rng.gen_range(0..set.replies.len())].to_string(),
            None => self.fallback(language, rng),
        }
    }

    /// A randomized "didn't understand" reply carrying the capabilities
    /// summary in the detected language.
    pub fn fallback<R: Rng>(&self, language: Language, rng: &mut R) -> String {
        let (pool, capabilities) = match language {
            Language::English => (&self.fallback_en, CAPABILITIES_EN),
            Language::Arabic => (&self.fallback_ar, CAPABILITIES_AR),
        };
        format!("{} {}", pool[rng.gen_range(0..pool.len())], capabilities)
    }
}
