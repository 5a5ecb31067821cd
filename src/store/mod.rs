//! Data-access capability consumed by the chat engine.
//!
//! Record storage and retrieval live behind the [`DataAccess`] trait;
//! production deployments bind it to a real database while tests and demos
//! use the in-memory [`MemoryStore`].

pub mod memory;
pub mod types;

pub use memory::MemoryStore;
pub use types::{
    Announcement, ClassSession, Complaint, Course, DateValue, Exam, Grade, Role, Section, User,
};

use crate::error::Result;
use async_trait::async_trait;

/// Filter for announcement queries.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementFilter {
    /// Restrict to one course.
    pub course_code: Option<String>,
}

/// Filter for complaint queries.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub user_id: Option<String>,
    pub status: Option<String>,
}

/// Filter for course queries.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Only active courses.
    pub active_only: bool,
    /// Only electives.
    pub electives_only: bool,
    /// Courses a given student is registered in.
    pub registered_student: Option<String>,
    /// Courses taught by a given doctor.
    pub doctor_id: Option<String>,
    /// Restrict to an explicit code list.
    pub codes: Option<Vec<String>>,
}

/// Filter for exam queries. Date bounds compare against the pre-formatted
/// `exam_date` field (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default)]
pub struct ExamFilter {
    pub course_code: Option<String>,
    /// Inclusive lower bound on the exam date.
    pub on_or_after: Option<String>,
    /// Exclusive upper bound on the exam date.
    pub before: Option<String>,
}

/// Filter for grade queries.
#[derive(Debug, Clone, Default)]
pub struct GradeFilter {
    pub student_id: Option<String>,
    pub course_code: Option<String>,
}

/// User lookup: by identifier (optionally constrained to a role) or by role.
#[derive(Debug, Clone)]
pub enum UserQuery {
    Id { id: String, role: Option<Role> },
    ByRole(Role),
}

impl UserQuery {
    /// A student lookup by identifier.
    pub fn student(id: &str) -> Self {
        UserQuery::Id {
            id: id.to_string(),
            role: Some(Role::Student),
        }
    }

    /// A doctor lookup by identifier.
    pub fn doctor(id: &str) -> Self {
        UserQuery::Id {
            id: id.to_string(),
            role: Some(Role::Doctor),
        }
    }

    /// A lookup by identifier with no role constraint.
    pub fn by_id(id: &str) -> Self {
        UserQuery::Id {
            id: id.to_string(),
            role: None,
        }
    }
}

/// External record storage and retrieval.
///
/// All operations are treated as blocking upstream calls; timeouts and
/// retries are the implementor's concern. Failures surface as
/// [`crate::Error::Upstream`] and are mapped to user-facing payloads by
/// the engine, never propagated as panics.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Non-deleted announcements, newest first when `sort_desc`.
    async fn find_announcements(
        &self,
        filter: &AnnouncementFilter,
        sort_desc: bool,
        limit: usize,
    ) -> Result<Vec<Announcement>>;

    /// Complaints, newest first, at most `limit`.
    async fn find_complaints(&self, filter: &ComplaintFilter, limit: usize)
        -> Result<Vec<Complaint>>;

    /// Courses matching the filter.
    async fn find_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    /// Active courses whose name or code contains every word of `pattern`,
    /// case-insensitively and in any order.
    async fn find_course_by_name_or_code(&self, pattern: &str) -> Result<Vec<Course>>;

    /// Exams ordered by date ascending. When only an upper date bound is
    /// set (a past-exams query) the order is descending instead, so the
    /// most recent past exams come first.
    async fn find_exams(&self, filter: &ExamFilter, limit: usize) -> Result<Vec<Exam>>;

    /// Grades ordered by grading date descending.
    async fn find_grades(&self, filter: &GradeFilter) -> Result<Vec<Grade>>;

    /// Users matching an identifier or role.
    async fn find_user(&self, query: &UserQuery) -> Result<Vec<User>>;
}
