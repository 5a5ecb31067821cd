//! In-memory reference backend for the [`DataAccess`] trait.
//!
//! Used by tests and demos; query semantics mirror the production
//! collections (deleted announcements hidden, date-descending sorts,
//! any-word-order course matching).

use super::types::*;
use super::{
    AnnouncementFilter, ComplaintFilter, CourseFilter, DataAccess, ExamFilter, GradeFilter,
    UserQuery,
};
use crate::error::Result;
use async_trait::async_trait;

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub announcements: Vec<Announcement>,
    pub complaints: Vec<Complaint>,
    pub courses: Vec<Course>,
    pub exams: Vec<Exam>,
    pub grades: Vec<Grade>,
    pub users: Vec<User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn course_matches(course: &Course, pattern: &str) -> bool {
        let name = course.name.to_lowercase();
        let code = course.code.to_lowercase();
        let words: Vec<String> = pattern
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        if words.is_empty() {
            return false;
        }
        words.iter().all(|w| name.contains(w)) || words.iter().all(|w| code.contains(w))
    }
}

#[async_trait]
impl DataAccess for MemoryStore {
    async fn find_announcements(
        &self,
        filter: &AnnouncementFilter,
        sort_desc: bool,
        limit: usize,
    ) -> Result<Vec<Announcement>> {
        let mut found: Vec<Announcement> = self
            .announcements
            .iter()
            .filter(|a| !a.is_deleted)
            .filter(|a| match &filter.course_code {
                Some(code) => a.course_code.as_deref() == Some(code.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            let ord = a.created_at.render().cmp(&b.created_at.render());
            if sort_desc {
                ord.reverse()
            } else {
                ord
            }
        });
        found.truncate(limit);
        Ok(found)
    }

    async fn find_complaints(
        &self,
        filter: &ComplaintFilter,
        limit: usize,
    ) -> Result<Vec<Complaint>> {
        let mut found: Vec<Complaint> = self
            .complaints
            .iter()
            .filter(|c| match &filter.user_id {
                Some(id) => &c.user_id == id,
                None => true,
            })
            .filter(|c| match &filter.status {
                Some(status) => c.status.eq_ignore_ascii_case(status),
                None => true,
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.render().cmp(&a.created_at.render()));
        found.truncate(limit);
        Ok(found)
    }

    async fn find_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .iter()
            .filter(|c| !filter.active_only || c.is_active)
            .filter(|c| !filter.electives_only || c.is_elective)
            .filter(|c| match &filter.registered_student {
                Some(id) => c.registered_students.contains(id),
                None => true,
            })
            .filter(|c| match &filter.doctor_id {
                Some(id) => &c.doctor_id == id,
                None => true,
            })
            .filter(|c| match &filter.codes {
                Some(codes) => codes.contains(&c.code),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_course_by_name_or_code(&self, pattern: &str) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.is_active && Self::course_matches(c, pattern))
            .cloned()
            .collect())
    }

    async fn find_exams(&self, filter: &ExamFilter, limit: usize) -> Result<Vec<Exam>> {
        let mut found: Vec<Exam> = self
            .exams
            .iter()
            .filter(|e| match &filter.course_code {
                Some(code) => &e.course_code == code,
                None => true,
            })
            .filter(|e| match &filter.on_or_after {
                Some(date) => e.exam_date.as_str() >= date.as_str(),
                None => true,
            })
            .filter(|e| match &filter.before {
                Some(date) => e.exam_date.as_str() < date.as_str(),
                None => true,
            })
            .cloned()
            .collect();
        // Past-only queries show the most recent exams first.
        if filter.before.is_some() && filter.on_or_after.is_none() {
            found.sort_by(|a, b| b.exam_date.cmp(&a.exam_date));
        } else {
            found.sort_by(|a, b| a.exam_date.cmp(&b.exam_date));
        }
        found.truncate(limit);
        Ok(found)
    }

    async fn find_grades(&self, filter: &GradeFilter) -> Result<Vec<Grade>> {
        let mut found: Vec<Grade> = self
            .grades
            .iter()
            .filter(|g| match &filter.student_id {
                Some(id) => &g.student_id == id,
                None => true,
            })
            .filter(|g| match &filter.course_code {
                Some(code) => &g.course_code == code,
                None => true,
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| b.date_graded.render().cmp(&a.date_graded.render()));
        Ok(found)
    }

    async fn find_user(&self, query: &UserQuery) -> Result<Vec<User>> {
        Ok(match query {
            UserQuery::Id { id, role } => self
                .users
                .iter()
                .filter(|u| &u.id == id)
                .filter(|u| role.map_or(true, |r| u.role == r))
                .cloned()
                .collect(),
            UserQuery::ByRole(role) => self
                .users
                .iter()
                .filter(|u| u.role == *role)
                .cloned()
                .collect(),
        })
    }
}
