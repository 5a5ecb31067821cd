//! Script-based language detection.

use serde::{Deserialize, Serialize};

/// Supported query languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}

/// Arabic script ranges: Arabic, Arabic Supplement, Arabic Extended-A.
const ARABIC_RANGES: [(char, char); 3] = [
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08FF}'),
];

/// Classifies text as Arabic or English.
///
/// Any character in an Arabic script range classifies the whole text as
/// Arabic; everything else is English. Mixed-script input is therefore
/// treated as Arabic.
pub fn detect(text: &str) -> Language {
    let is_arabic = text.chars().any(|c| {
        ARABIC_RANGES
            .iter()
            .any(|(lo, hi)| (*lo..=*hi).contains(&c))
    });
    if is_arabic {
        Language::Arabic
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_arabic() {
        assert_eq!(detect("ما هي درجاتي؟"), Language::Arabic);
        // Arabic Supplement range
        assert_eq!(detect("\u{0750}"), Language::Arabic);
        // Arabic Extended-A range
        assert_eq!(detect("\u{08A0}"), Language::Arabic);
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(detect("what are my grades"), Language::English);
        assert_eq!(detect(""), Language::English);
        assert_eq!(detect("1234 !?"), Language::English);
    }

    #[test]
    fn test_mixed_script_is_arabic() {
        assert_eq!(detect("grades درجات"), Language::Arabic);
    }
}
