//! Domain record types returned by the data-access capability.
//!
//! Field names follow the backing collections (camelCase documents), so
//! records deserialize directly from stored JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date that arrives either as a structured timestamp or as a
/// pre-formatted string, depending on how the record was written.
/// Both render uniformly as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl DateValue {
    /// Renders the date as `YYYY-MM-DD`.
    pub fn render(&self) -> String {
        match self {
            DateValue::Timestamp(dt) => dt.format("%Y-%m-%d").to_string(),
            DateValue::Text(s) => match DateTime::parse_from_rfc3339(s.trim()) {
                Ok(dt) => dt.format("%Y-%m-%d").to_string(),
                Err(_) => s.trim().to_string(),
            },
        }
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

/// A single lecture or section meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

/// A course section with its own TA and meeting times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub section_id: String,
    #[serde(default)]
    pub ta_id: Option<String>,
    #[serde(default)]
    pub registered_students: Vec<String>,
    #[serde(default)]
    pub sessions: Vec<ClassSession>,
}

/// A course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub code: String,
    pub name: String,
    pub department: String,
    pub doctor_id: String,
    #[serde(default)]
    pub credit_hours: Option<u32>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_elective: bool,
    #[serde(default)]
    pub registered_students: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub lecture_sessions: Vec<ClassSession>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

fn default_true() -> bool {
    true
}

impl Course {
    /// `Name (CODE)` display label.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// An announcement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub course_code: Option<String>,
    pub sender: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub created_at: DateValue,
    #[serde(default)]
    pub is_deleted: bool,
}

/// A complaint record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub user_id: String,
    pub role: String,
    pub complaint: String,
    pub status: String,
    pub created_at: DateValue,
}

/// An exam record. `exam_date` is stored pre-formatted (`YYYY-MM-DD`) so
/// lexicographic comparison orders chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub course_code: String,
    pub course_name: String,
    pub exam_type: String,
    pub exam_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room_numbers: Vec<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// A grade record. `score` is free-form text as recorded by instructors;
/// it may not parse as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub student_id: String,
    pub course_code: String,
    pub course_name: String,
    pub score: String,
    pub grade: String,
    pub term: String,
    pub date_graded: DateValue,
}

impl Grade {
    /// Parses the recorded score as a number, if possible.
    pub fn numeric_score(&self) -> Option<f64> {
        self.score.trim().parse::<f64>().ok()
    }
}

/// User roles in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Doctor,
    Ta,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Doctor => "doctor",
            Role::Ta => "ta",
        }
    }
}

/// A user record (student, doctor or TA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub registered_courses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_value_renders_timestamp() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 9, 14, 30, 0).unwrap();
        assert_eq!(DateValue::Timestamp(dt).render(), "2025-03-09");
    }

    #[test]
    fn test_date_value_renders_preformatted_string() {
        assert_eq!(DateValue::Text("2025-03-09".into()).render(), "2025-03-09");
        // RFC 3339 strings are reduced to the date part
        assert_eq!(
            DateValue::Text("2025-03-09T14:30:00Z".into()).render(),
            "2025-03-09"
        );
    }

    #[test]
    fn test_date_value_untagged_deserialization() {
        let v: DateValue = serde_json::from_str("\"2024-11-02\"").unwrap();
        assert_eq!(v, DateValue::Text("2024-11-02".into()));

        let v: DateValue = serde_json::from_str("\"2024-11-02T08:00:00Z\"").unwrap();
        assert_eq!(v.render(), "2024-11-02");
    }

    #[test]
    fn test_grade_numeric_score() {
        let grade = Grade {
            student_id: "S1".into(),
            course_code: "CS101".into(),
            course_name: "Programming I".into(),
            score: "75".into(),
            grade: "B".into(),
            term: "Fall".into(),
            date_graded: "2024-12-20".into(),
        };
        assert_eq!(grade.numeric_score(), Some(75.0));

        let absent = Grade {
            score: "absent".into(),
            ..grade
        };
        assert_eq!(absent.numeric_score(), None);
    }

    #[test]
    fn test_course_deserializes_camel_case() {
        let json = r#"{
            "code": "02-24-00101",
            "name": "Programming I",
            "department": "CS",
            "doctorId": "D1",
            "creditHours": 3,
            "isActive": true,
            "registeredStudents": ["S1"],
            "lectureSessions": [
                {"day": "Sunday", "startTime": "09:00", "endTime": "11:00", "room": "B204"}
            ]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.doctor_id, "D1");
        assert_eq!(course.lecture_sessions[0].room, "B204");
        assert_eq!(course.label(), "Programming I (02-24-00101)");
    }
}
