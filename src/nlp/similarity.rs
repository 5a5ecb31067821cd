//! TF-IDF / cosine-similarity fallback matching.
//!
//! Candidate questions are templated from live course records on every
//! call and the vectorizer is refit over (corpus ∪ query) each time. That
//! trades CPU for freshness: the corpus tracks active courses with no
//! cache to invalidate.

use crate::store::Course;
use std::collections::HashMap;

/// Where a candidate question resolves when it wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateTarget {
    /// "What is X?": course detail for the given code.
    CourseInfo(String),
    /// "Who teaches X?": instructor lookup for the given code.
    Instructor(String),
    /// "When is X scheduled?": course detail (sessions) for the code.
    CourseSchedule(String),
    /// "What are the prerequisites for X?": prerequisite check.
    Prerequisites(String),
    /// Fixed schedule questions.
    MySchedule,
    /// Fixed grade questions.
    MyGrades,
}

/// A templated question derived from a live record. Regenerated per call,
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuestion {
    pub text: String,
    pub target: CandidateTarget,
}

/// A (candidate, cosine score) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    pub candidate: CandidateQuestion,
    pub score: f64,
}

/// Builds the ephemeral candidate corpus for the current set of active
/// courses, plus a small fixed set of schedule/grade questions.
pub fn build_candidates(courses: &[Course]) -> Vec<CandidateQuestion> {
    let mut candidates = Vec::with_capacity(courses.len() * 4 + 4);
    for course in courses {
        let code = course.code.clone();
        candidates.push(CandidateQuestion {
            text: format!("What is {}?", course.name),
            target: CandidateTarget::CourseInfo(code.clone()),
        });
        candidates.push(CandidateQuestion {
            text: format!("Who teaches {}?", course.name),
            target: CandidateTarget::Instructor(code.clone()),
        });
        candidates.push(CandidateQuestion {
            text: format!("When is {} scheduled?", course.name),
            target: CandidateTarget::CourseSchedule(code.clone()),
        });
        candidates.push(CandidateQuestion {
            text: format!("What are the prerequisites for {}?", course.name),
            target: CandidateTarget::Prerequisites(code),
        });
    }
    candidates.push(CandidateQuestion {
        text: "What is my schedule?".to_string(),
        target: CandidateTarget::MySchedule,
    });
    candidates.push(CandidateQuestion {
        text: "When are my classes?".to_string(),
        target: CandidateTarget::MySchedule,
    });
    candidates.push(CandidateQuestion {
        text: "What are my grades?".to_string(),
        target: CandidateTarget::MyGrades,
    });
    candidates.push(CandidateQuestion {
        text: "Show my grades".to_string(),
        target: CandidateTarget::MyGrades,
    });
    candidates
}

/// Lowercase word tokens, punctuation stripped.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Term-frequency vectors weighted by smoothed inverse document frequency,
/// fit freshly over the given documents.
struct TfidfModel {
    /// term -> (vocabulary index, idf weight)
    vocabulary: HashMap<String, (usize, f64)>,
}

impl TfidfModel {
    fn fit(documents: &[Vec<String>]) -> Self {
        let n = documents.len() as f64;
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let mut seen: Vec<&str> = Vec::new();
            for term in doc {
                if !seen.contains(&term.as_str()) {
                    seen.push(term);
                    *document_frequency.entry(term).or_insert(0) += 1;
                }
            }
        }

        let mut terms: Vec<&str> = document_frequency.keys().copied().collect();
        terms.sort_unstable();
        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| {
                let df = document_frequency[term] as f64;
                let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                (term.to_string(), (index, idf))
            })
            .collect();
        Self { vocabulary }
    }

    fn vectorize(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&(index, idf)) = self.vocabulary.get(token) {
                vector[index] += idf;
            }
        }
        vector
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Scores `query` against every candidate and returns the best match.
/// Returns `None` only for an empty corpus or a query with no usable
/// tokens; the caller applies the resolution threshold.
pub fn best_match(query: &str, candidates: &[CandidateQuestion]) -> Option<SimilarityResult> {
    if candidates.is_empty() {
        return None;
    }
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return None;
    }

    let mut documents: Vec<Vec<String>> =
        candidates.iter().map(|c| tokenize(&c.text)).collect();
    documents.push(query_tokens.clone());

    let model = TfidfModel::fit(&documents);
    let query_vector = model.vectorize(&query_tokens);

    let mut best: Option<SimilarityResult> = None;
    for (candidate, tokens) in candidates.iter().zip(&documents) {
        let score = cosine(&query_vector, &model.vectorize(tokens));
        let better = best.as_ref().map_or(true, |b| score > b.score);
        if better {
            best = Some(SimilarityResult {
                candidate: candidate.clone(),
                score,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str) -> Course {
        Course {
            code: code.into(),
            name: name.into(),
            department: "CS".into(),
            doctor_id: "D1".into(),
            credit_hours: None,
            semester: None,
            is_active: true,
            is_elective: false,
            registered_students: vec![],
            prerequisites: vec![],
            lecture_sessions: vec![],
            sections: vec![],
        }
    }

    #[test]
    fn test_empty_corpus_yields_none() {
        assert_eq!(best_match("anything at all", &[]), None);
    }

    #[test]
    fn test_identical_query_scores_one() {
        let candidates = build_candidates(&[course("CS101", "Calculus")]);
        let result = best_match("Who teaches Calculus?", &candidates).unwrap();
        assert!((result.score - 1.0).abs() < 1e-9);
        assert_eq!(
            result.candidate.target,
            CandidateTarget::Instructor("CS101".into())
        );
    }

    #[test]
    fn test_near_match_resolves_to_right_template() {
        let candidates = build_candidates(&[
            course("CS101", "Calculus"),
            course("CS102", "Data Structures"),
        ]);
        let result = best_match("who is teaches data structures", &candidates).unwrap();
        assert_eq!(
            result.candidate.target,
            CandidateTarget::Instructor("CS102".into())
        );
        assert!(result.score > 0.3);
    }

    #[test]
    fn test_unrelated_query_scores_low() {
        let candidates = build_candidates(&[course("CS101", "Calculus")]);
        let result = best_match("bananas weather forecast", &candidates).unwrap();
        assert!(result.score < 0.3);
    }

    #[test]
    fn test_fixed_questions_present_without_courses() {
        let candidates = build_candidates(&[]);
        assert_eq!(candidates.len(), 4);
        let result = best_match("What are my grades?", &candidates).unwrap();
        assert!((result.score - 1.0).abs() < 1e-9);
        assert_eq!(result.candidate.target, CandidateTarget::MyGrades);
    }
}
