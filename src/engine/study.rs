//! Study-help and video-search link responses.
//!
//! These checks also run as a last resort after classification fails and
//! before the similarity fallback, so phrasings like "I want material on
//! pointers" still get link responses when they carry a study pattern.

use crate::format::{DisplayPayload, LinkItem};
use crate::nlp::{IntentKind, Language};
use url::Url;

/// Phrases that signal a study-material request.
const STUDY_PATTERNS: [&str; 8] = [
    "study",
    "learn",
    "tutorial",
    "material",
    "revise",
    "مذاكرة",
    "اذاكر",
    "اتعلم",
];

/// Phrases that signal a video request.
const VIDEO_PATTERNS: [&str; 6] = ["video", "watch", "youtube", "فيديو", "يوتيوب", "شرح"];

/// Detects a study/video pattern in text the classifier could not place.
pub fn detect(text: &str) -> Option<IntentKind> {
    let lower = text.to_lowercase();
    if VIDEO_PATTERNS.iter().any(|p| lower.contains(p)) {
        return Some(IntentKind::VideoSearch);
    }
    if STUDY_PATTERNS.iter().any(|p| lower.contains(p)) {
        return Some(IntentKind::StudyHelp);
    }
    None
}

fn search_url(base: &str, param: &str, topic: &str) -> String {
    match Url::parse_with_params(base, &[(param, topic)]) {
        Ok(url) => url.to_string(),
        // Base URLs are fixed literals; parsing cannot realistically fail,
        // but degrade to the bare base rather than panic.
        Err(_) => base.to_string(),
    }
}

/// Builds the links payload for a study or video request about `topic`.
pub fn links_payload(kind: IntentKind, topic: &str, language: Language) -> DisplayPayload {
    let topic = topic.trim();
    let topic = if topic.is_empty() { "university courses" } else { topic };

    let mut links = vec![LinkItem {
        label: "YouTube".to_string(),
        url: search_url(
            "https://www.youtube.com/results",
            "search_query",
            topic,
        ),
    }];
    if kind == IntentKind::StudyHelp {
        links.push(LinkItem {
            label: "Khan Academy".to_string(),
            url: search_url("https://www.khanacademy.org/search", "page_search_query", topic),
        });
        links.push(LinkItem {
            label: "MIT OpenCourseWare".to_string(),
            url: search_url("https://ocw.mit.edu/search/", "q", topic),
        });
    }

    let message = match language {
        Language::English => format!("Here are some resources for \"{topic}\":"),
        Language::Arabic => format!("إليك بعض المصادر عن \"{topic}\":"),
    };
    DisplayPayload::Links { message, links }
}
