//! Best-effort entity extraction from query text.
//!
//! Extraction never validates against live records; the dispatcher owns
//! validation and disambiguation.

use regex::Regex;

/// Entities pulled out of a single query. All fields are best-effort and
/// unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityBundle {
    /// Course code of the form `DD-DD-DDDDD`.
    pub course_code: Option<String>,
    /// 1–2 token name fragment following a course keyword.
    pub course_name: Option<String>,
    /// `YYYY-MM-DD` date mentioned in the text.
    pub date: Option<String>,
    /// Name fragment following a doctor/professor keyword.
    pub professor: Option<String>,
}

/// Keyword tokens that introduce a course-name fragment.
const COURSE_KEYWORDS: [&str; 6] = ["course", "class", "subject", "مادة", "ماده", "كورس"];

/// Keyword tokens that introduce a professor name.
const PROFESSOR_KEYWORDS: [&str; 6] = ["dr", "dr.", "doctor", "professor", "دكتور", "استاذ"];

/// Filler tokens never taken as part of a name fragment.
const STOPWORDS: [&str; 12] = [
    "the", "my", "a", "an", "for", "of", "is", "in", "about", "this", "that", "please",
];

/// Regex-based extractor for course codes, name fragments, dates and
/// professor names.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    code_re: Regex,
    date_re: Regex,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            code_re: Regex::new(r"\b\d{2}-\d{2}-\d{5}\b").unwrap(),
            date_re: Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        }
    }

    /// Extracts every supported entity from `text`.
    pub fn extract(&self, text: &str) -> EntityBundle {
        EntityBundle {
            course_code: self.code_re.find(text).map(|m| m.as_str().to_string()),
            course_name: self.name_fragment(text, &COURSE_KEYWORDS),
            date: self.date_re.find(text).map(|m| m.as_str().to_string()),
            professor: self.name_fragment(text, &PROFESSOR_KEYWORDS),
        }
    }

    /// Takes the 1–2 tokens immediately following the first keyword hit,
    /// skipping filler words and trailing punctuation.
    fn name_fragment(&self, text: &str, keywords: &[&str]) -> Option<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let keyword_at = tokens.iter().position(|t| {
            let clean = t.trim_matches(|c: char| c.is_ascii_punctuation());
            keywords.iter().any(|k| clean.eq_ignore_ascii_case(k))
        })?;

        let fragment: Vec<String> = tokens[keyword_at + 1..]
            .iter()
            .map(|t| {
                t.trim_matches(|c: char| c.is_ascii_punctuation() || c == '؟')
                    .to_string()
            })
            .filter(|t| !t.is_empty())
            .filter(|t| !STOPWORDS.contains(&t.to_lowercase().as_str()))
            .take(2)
            .collect();

        if fragment.is_empty() {
            None
        } else {
            Some(fragment.join(" "))
        }
    }
}
