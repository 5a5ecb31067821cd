//! Prerequisite satisfaction checking.

use crate::error::Result;
use crate::store::{CourseFilter, DataAccess, GradeFilter};
use tracing::warn;

/// Result of a prerequisite check for one student and target course.
#[derive(Debug, Clone, PartialEq)]
pub struct PrereqReport {
    pub all_satisfied: bool,
    /// Human-readable labels for missing prerequisites, in the course's
    /// prerequisite-list order.
    pub missing: Vec<String>,
    pub summary: String,
}

/// Checks whether `student_id` has passed every prerequisite of the course
/// identified by `course_code`.
///
/// A recorded grade counts as passed only when its score parses as a
/// number and is at least `passing_score`. Non-numeric scores are skipped
/// outright, neither passed nor failed, and logged as a data-quality
/// signal.
pub async fn check(
    store: &dyn DataAccess,
    student_id: &str,
    course_code: &str,
    passing_score: f64,
) -> Result<PrereqReport> {
    let courses = store
        .find_courses(&CourseFilter {
            codes: Some(vec![course_code.to_string()]),
            ..Default::default()
        })
        .await?;
    let required: Vec<String> = courses
        .first()
        .map(|c| c.prerequisites.clone())
        .unwrap_or_default();

    // Empty prerequisite list is trivially satisfied.
    if required.is_empty() {
        return Ok(PrereqReport {
            all_satisfied: true,
            missing: vec![],
            summary: format!("{course_code} has no prerequisites."),
        });
    }

    let grades = store
        .find_grades(&GradeFilter {
            student_id: Some(student_id.to_string()),
            course_code: None,
        })
        .await?;

    let mut passed: Vec<&str> = Vec::new();
    for grade in &grades {
        match grade.numeric_score() {
            Some(score) if score >= passing_score => passed.push(&grade.course_code),
            Some(_) => {}
            None => {
                warn!(
                    student = student_id,
                    course = %grade.course_code,
                    score = %grade.score,
                    "skipping non-numeric grade score during prerequisite check"
                );
            }
        }
    }

    let mut missing = Vec::new();
    for code in &required {
        if !passed.contains(&code.as_str()) {
            missing.push(resolve_label(store, code).await?);
        }
    }

    let summary = if missing.is_empty() {
        format!("All prerequisites for {course_code} are satisfied.")
    } else {
        format!(
            "Missing {} prerequisite(s) for {}: {}",
            missing.len(),
            course_code,
            missing.join(", ")
        )
    };

    Ok(PrereqReport {
        all_satisfied: missing.is_empty(),
        missing,
        summary,
    })
}

/// Resolves a course code to `Name (CODE)`, falling back to the bare code
/// when the course is unknown.
async fn resolve_label(store: &dyn DataAccess, code: &str) -> Result<String> {
    let courses = store
        .find_courses(&CourseFilter {
            codes: Some(vec![code.to_string()]),
            ..Default::default()
        })
        .await?;
    Ok(courses
        .first()
        .map(|c| c.label())
        .unwrap_or_else(|| code.to_string()))
}
