//! Intent classification over a fixed, prioritized keyword registry.
//!
//! Scoring counts the distinct keyword patterns of each intent that occur
//! as substrings of the lowercased query. The winner is the intent with the
//! strictly highest score; ties break by ascending registration priority,
//! never by map iteration order, so classification is deterministic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The classified purpose of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    // Domain intents
    Announcements,
    Complaints,
    MyCourses,
    CourseInfo,
    Schedule,
    Exams,
    Grades,
    Prerequisites,
    Electives,
    Instructor,
    AllCourses,
    // Link-producing intents
    StudyHelp,
    VideoSearch,
    // Small talk
    Greeting,
    Thanks,
    Goodbye,
    Help,
}

impl IntentKind {
    /// Small-talk intents answered with canned replies.
    pub fn is_conversational(&self) -> bool {
        matches!(
            self,
            IntentKind::Greeting | IntentKind::Thanks | IntentKind::Goodbye | IntentKind::Help
        )
    }

    /// Intents dispatched against the data-access capability.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            IntentKind::Announcements
                | IntentKind::Complaints
                | IntentKind::MyCourses
                | IntentKind::CourseInfo
                | IntentKind::Schedule
                | IntentKind::Exams
                | IntentKind::Grades
                | IntentKind::Prerequisites
                | IntentKind::Electives
                | IntentKind::Instructor
                | IntentKind::AllCourses
        )
    }

    /// Intents answered with external study/video links.
    pub fn is_link_producing(&self) -> bool {
        matches!(self, IntentKind::StudyHelp | IntentKind::VideoSearch)
    }
}

/// One registered intent: bilingual keyword patterns plus an explicit
/// tie-break priority (lower wins).
#[derive(Debug, Clone)]
pub struct IntentDef {
    pub kind: IntentKind,
    pub priority: u32,
    pub patterns: Vec<&'static str>,
}

/// The closed intent registry.
#[derive(Debug, Clone, Default)]
pub struct IntentRegistry {
    intents: Vec<IntentDef>,
}

impl IntentRegistry {
    /// An empty registry. Most callers want [`IntentRegistry::standard`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an intent. Every intent must carry at least one pattern.
    pub fn register(&mut self, def: IntentDef) -> Result<()> {
        if def.patterns.is_empty() {
            return Err(Error::Config(format!(
                "intent {:?} registered without patterns",
                def.kind
            )));
        }
        self.intents.push(def);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Classifies lowercase-normalized text. Returns `None` when no pattern
    /// of any intent matches, or when the text is blank.
    pub fn classify(&self, text: &str) -> Option<IntentKind> {
        let text = text.to_lowercase();
        if text.trim().is_empty() {
            return None;
        }

        let mut best: Option<(usize, u32, IntentKind)> = None;
        for def in &self.intents {
            let score = def
                .patterns
                .iter()
                .filter(|p| text.contains(&p.to_lowercase()))
                .count();
            if score == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((s, p, _)) => score > s || (score == s && def.priority < p),
            };
            if better {
                best = Some((score, def.priority, def.kind));
            }
        }
        best.map(|(_, _, kind)| kind)
    }

    /// The standard bilingual registry. Domain intents carry lower
    /// priorities than small talk so that a query mentioning both (e.g.
    /// "hello, show my grades") dispatches to the domain handler.
    pub fn standard() -> Self {
        let defs = vec![
            IntentDef {
                kind: IntentKind::Announcements,
                priority: 10,
                patterns: vec!["announce", "news", "اعلان", "إعلان", "أخبار", "اخبار"],
            },
            IntentDef {
                kind: IntentKind::Complaints,
                priority: 20,
                patterns: vec!["complaint", "complain", "شكوى", "شكاوى", "مشكلة"],
            },
            IntentDef {
                kind: IntentKind::MyCourses,
                priority: 30,
                patterns: vec![
                    "my courses",
                    "registered courses",
                    "courses am i taking",
                    "courses am i enrolled",
                    "classes am i taking",
                    "my enrolled courses",
                    "list my courses",
                    "my classes",
                    "موادي",
                    "المواد المسجلة",
                ],
            },
            IntentDef {
                kind: IntentKind::CourseInfo,
                priority: 35,
                patterns: vec![
                    "info",
                    "detail",
                    "info for",
                    "details for",
                    "when is my",
                    "what time is my",
                    "schedule for",
                    "timetable for",
                    "معلومات",
                    "تفاصيل",
                ],
            },
            IntentDef {
                kind: IntentKind::Schedule,
                priority: 40,
                patterns: vec![
                    "schedule",
                    "timetable",
                    "when are my classes",
                    "when are my lectures",
                    "class times",
                    "جدول",
                    "جدولي",
                    "مواعيد",
                    "محاضراتي",
                ],
            },
            IntentDef {
                kind: IntentKind::Exams,
                priority: 50,
                patterns: vec![
                    "exam", "test", "midterm", "final", "امتحان", "امتحانات", "اختبار",
                ],
            },
            IntentDef {
                kind: IntentKind::Grades,
                priority: 60,
                patterns: vec![
                    "grade", "score", "result", "marks", "درجات", "درجة", "نتيجة", "نتائج",
                ],
            },
            IntentDef {
                kind: IntentKind::Prerequisites,
                priority: 70,
                patterns: vec![
                    "prerequisite",
                    "prereq",
                    "can i take",
                    "requirements for",
                    "متطلب",
                    "متطلبات",
                ],
            },
            IntentDef {
                kind: IntentKind::Electives,
                priority: 80,
                patterns: vec!["elective", "optional course", "اختياري", "اختيارية"],
            },
            IntentDef {
                kind: IntentKind::Instructor,
                priority: 90,
                patterns: vec![
                    "who teaches",
                    "teaches",
                    "doctor",
                    "professor",
                    "instructor",
                    "teacher",
                    "يدرس",
                    "دكتور",
                    "استاذ",
                    "أستاذ",
                ],
            },
            IntentDef {
                kind: IntentKind::AllCourses,
                priority: 100,
                patterns: vec![
                    "available courses",
                    "all courses",
                    "list courses",
                    "show courses",
                    "courses",
                    "المواد المتاحة",
                    "كل المواد",
                ],
            },
            IntentDef {
                kind: IntentKind::StudyHelp,
                priority: 120,
                patterns: vec![
                    "study help",
                    "help me study",
                    "how to study",
                    "study for",
                    "learn",
                    "مذاكرة",
                    "أذاكر",
                    "اذاكر",
                    "اتعلم",
                ],
            },
            IntentDef {
                kind: IntentKind::VideoSearch,
                priority: 130,
                patterns: vec![
                    "video", "watch", "youtube", "فيديو", "فيديوهات", "يوتيوب", "شرح",
                ],
            },
            IntentDef {
                kind: IntentKind::Greeting,
                priority: 200,
                patterns: vec![
                    "hello",
                    "hi",
                    "hey",
                    "good morning",
                    "good evening",
                    "السلام عليكم",
                    "مرحبا",
                    "اهلا",
                    "أهلا",
                    "صباح الخير",
                    "مساء الخير",
                ],
            },
            IntentDef {
                kind: IntentKind::Thanks,
                priority: 210,
                patterns: vec!["thank", "thanks", "thx", "شكرا", "شكراً", "تسلم"],
            },
            IntentDef {
                kind: IntentKind::Goodbye,
                priority: 220,
                patterns: vec![
                    "bye",
                    "goodbye",
                    "see you",
                    "مع السلامة",
                    "وداعا",
                    "باي",
                ],
            },
            IntentDef {
                kind: IntentKind::Help,
                priority: 230,
                patterns: vec![
                    "help",
                    "what can you do",
                    "مساعدة",
                    "ساعدني",
                ],
            },
        ];
        Self { intents: defs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_rejects_empty_patterns() {
        let mut registry = IntentRegistry::new();
        let err = registry.register(IntentDef {
            kind: IntentKind::Grades,
            priority: 1,
            patterns: vec![],
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_text_is_no_intent() {
        let registry = IntentRegistry::standard();
        assert_eq!(registry.classify(""), None);
        assert_eq!(registry.classify("   \t "), None);
    }

    #[test]
    fn test_no_keyword_hits_is_no_intent_deterministically() {
        let registry = IntentRegistry::standard();
        for _ in 0..10 {
            assert_eq!(registry.classify("zzz qqq xyzzy"), None);
        }
    }

    #[test]
    fn test_query_built_from_intent_keywords_classifies_as_that_intent() {
        let registry = IntentRegistry::standard();
        assert_eq!(
            registry.classify("grade score result"),
            Some(IntentKind::Grades)
        );
        assert_eq!(
            registry.classify("prerequisite prereq"),
            Some(IntentKind::Prerequisites)
        );
        assert_eq!(
            registry.classify("announce news"),
            Some(IntentKind::Announcements)
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let registry = IntentRegistry::standard();
        assert_eq!(registry.classify("MY GRADES"), Some(IntentKind::Grades));
    }

    #[test]
    fn test_arabic_patterns_classify() {
        let registry = IntentRegistry::standard();
        assert_eq!(registry.classify("ما هي درجاتي"), Some(IntentKind::Grades));
        assert_eq!(registry.classify("اعرض جدولي"), Some(IntentKind::Schedule));
    }

    #[test]
    fn test_tie_breaks_by_ascending_priority() {
        // "hello" (Greeting, 200) and "grade" (Grades, 60) both score 1;
        // the lower priority must win.
        let registry = IntentRegistry::standard();
        assert_eq!(
            registry.classify("hello, my grade please"),
            Some(IntentKind::Grades)
        );
    }

    #[test]
    fn test_my_courses_beats_all_courses() {
        let registry = IntentRegistry::standard();
        assert_eq!(
            registry.classify("which courses am i enrolled in"),
            Some(IntentKind::MyCourses)
        );
        assert_eq!(
            registry.classify("show courses"),
            Some(IntentKind::AllCourses)
        );
    }

    #[test]
    fn test_study_help_beats_plain_help_on_score() {
        let registry = IntentRegistry::standard();
        assert_eq!(
            registry.classify("help me study for calculus"),
            Some(IntentKind::StudyHelp)
        );
        assert_eq!(registry.classify("help"), Some(IntentKind::Help));
    }

    #[test]
    fn test_conversational_classification() {
        let registry = IntentRegistry::standard();
        assert_eq!(registry.classify("hello"), Some(IntentKind::Greeting));
        assert_eq!(registry.classify("شكرا"), Some(IntentKind::Thanks));
        assert_eq!(registry.classify("goodbye"), Some(IntentKind::Goodbye));
    }
}
