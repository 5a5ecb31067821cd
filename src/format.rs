//! Normalizes raw records into the closed set of display payloads.
//!
//! Every formatter checks for an empty result set first and returns a
//! typed text payload with a domain-specific explanation; that path is
//! deterministic, so formatting the same empty input twice yields
//! byte-identical payloads. Dates render uniformly as `YYYY-MM-DD`.

use crate::store::types::{Announcement, Complaint, Course, Exam, Grade, User};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One row of a table payload, keyed exactly by the table's headers.
pub type TableRow = BTreeMap<String, String>;

/// An external link offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
}

/// A lecture or section meeting inside a course-detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub kind: String,
    pub day: String,
    pub time: String,
    pub room: String,
    /// Section identifier and TA, for section meetings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

/// The closed set of display payload shapes. The formatter never emits an
/// ad hoc shape outside this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayPayload {
    Text {
        message: String,
    },
    Table {
        title: String,
        headers: Vec<String>,
        rows: Vec<TableRow>,
    },
    Announcement {
        items: Vec<TableRow>,
    },
    CourseDetail {
        code: String,
        name: String,
        instructor: String,
        department: String,
        credit_hours: String,
        semester: String,
        sessions: Vec<SessionView>,
    },
    DoctorInfo {
        name: String,
        email: String,
        courses_teaching: Vec<String>,
    },
    Links {
        message: String,
        links: Vec<LinkItem>,
    },
}

impl DisplayPayload {
    /// Plain text payload.
    pub fn text(message: impl Into<String>) -> Self {
        DisplayPayload::Text {
            message: message.into(),
        }
    }
}

fn row(pairs: &[(&str, String)]) -> TableRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Converts raw record sets into display payloads.
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn announcements(&self, records: &[Announcement]) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text("No announcements found.");
        }
        let items = records
            .iter()
            .map(|a| {
                row(&[
                    ("Title", a.title.clone()),
                    ("Content", a.content.clone()),
                    (
                        "Course",
                        a.course_code.clone().unwrap_or_else(|| "N/A".to_string()),
                    ),
                    (
                        "From",
                        a.sender_name.clone().unwrap_or_else(|| a.sender.clone()),
                    ),
                    ("Date", a.created_at.render()),
                ])
            })
            .collect();
        DisplayPayload::Announcement { items }
    }

    pub fn complaints(&self, records: &[Complaint]) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text("No complaints found.");
        }
        let header_list = headers(&["User ID", "Role", "Complaint", "Status", "Date"]);
        let rows = records
            .iter()
            .map(|c| {
                row(&[
                    ("User ID", c.user_id.clone()),
                    ("Role", c.role.clone()),
                    ("Complaint", c.complaint.clone()),
                    ("Status", c.status.clone()),
                    ("Date", c.created_at.render()),
                ])
            })
            .collect();
        DisplayPayload::Table {
            title: "Complaints".to_string(),
            headers: header_list,
            rows,
        }
    }

    /// Course table. `doctor_names` maps doctor ids to display names;
    /// unresolved ids fall back to `Doctor <id>`.
    pub fn courses(
        &self,
        records: &[Course],
        doctor_names: &HashMap<String, String>,
        title: &str,
    ) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text(
                "No courses found. There are currently no courses matching your criteria.",
            );
        }
        let header_list = headers(&[
            "Code",
            "Name",
            "Doctor",
            "Department",
            "Credit Hours",
            "Semester",
        ]);
        let rows = records
            .iter()
            .map(|c| {
                let doctor = doctor_names
                    .get(&c.doctor_id)
                    .cloned()
                    .unwrap_or_else(|| format!("Doctor {}", c.doctor_id));
                row(&[
                    ("Code", c.code.clone()),
                    ("Name", c.name.clone()),
                    ("Doctor", doctor),
                    ("Department", c.department.clone()),
                    (
                        "Credit Hours",
                        c.credit_hours
                            .map(|h| h.to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                    ),
                    (
                        "Semester",
                        c.semester.clone().unwrap_or_else(|| "N/A".to_string()),
                    ),
                ])
            })
            .collect();
        DisplayPayload::Table {
            title: title.to_string(),
            headers: header_list,
            rows,
        }
    }

    pub fn exams(&self, records: &[Exam], title: &str) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text(
                "No exams found. There are currently no exams matching your criteria.",
            );
        }
        let header_list = headers(&["Course", "Type", "Date", "Time", "Rooms"]);
        let rows = records
            .iter()
            .map(|e| {
                let rooms = if e.room_numbers.is_empty() {
                    "Not assigned".to_string()
                } else {
                    e.room_numbers.join(", ")
                };
                row(&[
                    ("Course", format!("{} ({})", e.course_name, e.course_code)),
                    ("Type", e.exam_type.clone()),
                    ("Date", e.exam_date.clone()),
                    ("Time", format!("{} - {}", e.start_time, e.end_time)),
                    ("Rooms", rooms),
                ])
            })
            .collect();
        DisplayPayload::Table {
            title: title.to_string(),
            headers: header_list,
            rows,
        }
    }

    pub fn grades(&self, records: &[Grade], student_name: &str) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text(format!(
                "No grades found for {student_name}. No courses may have been graded yet; \
                 please contact your instructor for more information."
            ));
        }
        let header_list = headers(&["Course", "Code", "Score", "Grade", "Term", "Date"]);
        let rows = records
            .iter()
            .map(|g| {
                row(&[
                    ("Course", g.course_name.clone()),
                    ("Code", g.course_code.clone()),
                    ("Score", g.score.clone()),
                    ("Grade", g.grade.clone()),
                    ("Term", g.term.clone()),
                    ("Date", g.date_graded.render()),
                ])
            })
            .collect();
        DisplayPayload::Table {
            title: "Grades".to_string(),
            headers: header_list,
            rows,
        }
    }

    /// Weekly schedule table; rows arrive already ordered by day.
    pub fn schedule(&self, rows: Vec<TableRow>) -> DisplayPayload {
        if rows.is_empty() {
            return DisplayPayload::text(
                "No schedule found. You don't appear to be registered in any courses this \
                 semester; please contact your academic advisor if this is incorrect.",
            );
        }
        DisplayPayload::Table {
            title: "Your Class Schedule".to_string(),
            headers: headers(&["Type", "Course", "Day", "Time", "Room", "Instructor"]),
            rows,
        }
    }

    /// Course card. `ta_names` maps TA ids to display names; unresolved
    /// ids fall back to "TA Not Assigned".
    pub fn course_detail(
        &self,
        course: &Course,
        instructor: &str,
        ta_names: &HashMap<String, String>,
    ) -> DisplayPayload {
        let mut sessions = Vec::new();
        for lecture in &course.lecture_sessions {
            sessions.push(SessionView {
                kind: "Lecture".to_string(),
                day: lecture.day.clone(),
                time: format!("{} - {}", lecture.start_time, lecture.end_time),
                room: lecture.room.clone(),
                section: None,
                instructor: None,
            });
        }
        for section in &course.sections {
            for meeting in &section.sessions {
                sessions.push(SessionView {
                    kind: "Section".to_string(),
                    day: meeting.day.clone(),
                    time: format!("{} - {}", meeting.start_time, meeting.end_time),
                    room: meeting.room.clone(),
                    section: Some(section.section_id.clone()),
                    instructor: Some(
                        section
                            .ta_id
                            .as_ref()
                            .and_then(|id| ta_names.get(id).cloned())
                            .unwrap_or_else(|| "TA Not Assigned".to_string()),
                    ),
                });
            }
        }
        DisplayPayload::CourseDetail {
            code: course.code.clone(),
            name: course.name.clone(),
            instructor: instructor.to_string(),
            department: course.department.clone(),
            credit_hours: course
                .credit_hours
                .map(|h| h.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            semester: course.semester.clone().unwrap_or_else(|| "N/A".to_string()),
            sessions,
        }
    }

    /// Doctor card with the other courses they teach (`CODE: Name` lines).
    pub fn doctor_info(&self, doctor: &User, teaching: &[Course]) -> DisplayPayload {
        DisplayPayload::DoctorInfo {
            name: doctor.name.clone(),
            email: doctor.email.clone().unwrap_or_else(|| "N/A".to_string()),
            courses_teaching: teaching
                .iter()
                .map(|c| format!("{}: {}", c.code, c.name))
                .collect(),
        }
    }

    pub fn doctors(&self, records: &[User]) -> DisplayPayload {
        if records.is_empty() {
            return DisplayPayload::text("No doctors found in the system.");
        }
        let header_list = headers(&["ID", "Name", "Email", "Department"]);
        let rows = records
            .iter()
            .map(|d| {
                row(&[
                    ("ID", d.id.clone()),
                    ("Name", d.name.clone()),
                    (
                        "Email",
                        d.email.clone().unwrap_or_else(|| "N/A".to_string()),
                    ),
                    (
                        "Department",
                        d.department.clone().unwrap_or_else(|| "N/A".to_string()),
                    ),
                ])
            })
            .collect();
        DisplayPayload::Table {
            title: "Doctors".to_string(),
            headers: header_list,
            rows,
        }
    }
}
