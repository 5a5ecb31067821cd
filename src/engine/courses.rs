//! Course-name normalization and lookup.
//!
//! A static alias table maps common abbreviations to canonical names
//! before lookup; the lookup itself is the data store's case-insensitive,
//! any-word-order partial match over name and code. Multiple hits are
//! never silently reduced to one.

use crate::error::Result;
use crate::store::{Course, DataAccess};

/// Common abbreviations and shorthand mapped to canonical course names.
const COURSE_ALIASES: [(&str, &str); 12] = [
    ("programming 1", "Programming I"),
    ("programming one", "Programming I"),
    ("programming 2", "Programming II"),
    ("programming two", "Programming II"),
    ("prog 1", "Programming I"),
    ("prog 2", "Programming II"),
    ("prob stat", "Probability and Statistics"),
    ("prob and stat", "Probability and Statistics"),
    ("data struct", "Data Structures"),
    ("calc", "Calculus"),
    ("stochastic", "Stochastic Processes"),
    ("linear alg", "Linear Algebra"),
];

/// Filler words stripped from a raw name query before alias lookup.
const FILLER_WORDS: [&str; 8] = [
    "course", "info", "for", "about", "details", "the", "my", "class",
];

/// Outcome of a course lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseMatch {
    /// Nothing matched.
    None,
    /// Exactly one course matched.
    One(Course),
    /// Multiple equally valid matches; the caller must disambiguate,
    /// never pick one.
    Many(Vec<Course>),
}

/// Strips filler words and applies the alias table.
pub fn normalize_query(raw: &str) -> String {
    let cleaned: Vec<&str> = raw
        .split_whitespace()
        .filter(|w| {
            let lower = w.to_lowercase();
            !FILLER_WORDS.contains(&lower.as_str())
        })
        .collect();
    let cleaned = cleaned.join(" ");
    let lower = cleaned.to_lowercase();
    for (alias, canonical) in COURSE_ALIASES {
        if lower == alias {
            return canonical.to_string();
        }
    }
    cleaned
}

/// Resolves a free-form course reference against the store.
pub async fn resolve(store: &dyn DataAccess, raw: &str) -> Result<CourseMatch> {
    let pattern = normalize_query(raw);
    if pattern.trim().is_empty() {
        return Ok(CourseMatch::None);
    }
    let mut matches = store.find_course_by_name_or_code(&pattern).await?;

    // An exact name hit among several partial hits wins outright.
    if matches.len() > 1 {
        let exact: Vec<Course> = matches
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(&pattern))
            .cloned()
            .collect();
        if exact.len() == 1 {
            matches = exact;
        }
    }

    Ok(match matches.len() {
        0 => CourseMatch::None,
        1 => CourseMatch::One(matches.remove(0)),
        _ => CourseMatch::Many(matches),
    })
}
