//! End-to-end tests over the public API with the in-memory backend.

use campus_chat::error::{Error, Result};
use campus_chat::store::{
    AnnouncementFilter, ClassSession, ComplaintFilter, Course, CourseFilter, DataAccess, Exam,
    ExamFilter, Grade, GradeFilter, MemoryStore, Role, User, UserQuery,
};
use campus_chat::{ChatEngine, DisplayPayload, NoopTranslator};
use async_trait::async_trait;
use std::sync::Arc;

fn course(code: &str, name: &str, doctor: &str) -> Course {
    Course {
        code: code.into(),
        name: name.into(),
        department: "CS".into(),
        doctor_id: doctor.into(),
        credit_hours: Some(3),
        semester: Some("Fall 2025".into()),
        is_active: true,
        is_elective: false,
        registered_students: vec!["S1".into()],
        prerequisites: vec![],
        lecture_sessions: vec![ClassSession {
            day: "Monday".into(),
            start_time: "09:00".into(),
            end_time: "11:00".into(),
            room: "B204".into(),
        }],
        sections: vec![],
    }
}

fn grade(student: &str, code: &str, name: &str, score: &str, date: &str) -> Grade {
    Grade {
        student_id: student.into(),
        course_code: code.into(),
        course_name: name.into(),
        score: score.into(),
        grade: "-".into(),
        term: "Fall".into(),
        date_graded: date.into(),
    }
}

fn exam(code: &str, name: &str, date: &str) -> Exam {
    Exam {
        course_code: code.into(),
        course_name: name.into(),
        exam_type: "Final".into(),
        exam_date: date.into(),
        start_time: "09:00".into(),
        end_time: "11:00".into(),
        room_numbers: vec!["A1".into()],
        semester: None,
        department: None,
    }
}

fn fixture_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.users.push(User {
        id: "S1".into(),
        name: "Sara".into(),
        role: Role::Student,
        email: None,
        department: None,
        registered_courses: vec!["CS101".into()],
    });
    store.users.push(User {
        id: "D1".into(),
        name: "Dr. Ahmed Hassan".into(),
        role: Role::Doctor,
        email: Some("ahmed@uni.edu".into()),
        department: Some("CS".into()),
        registered_courses: vec![],
    });
    store.courses.push(course("CS101", "Calculus", "D1"));
    store.grades.push(grade("S1", "CS101", "Calculus", "75", "2025-01-10"));
    store.grades.push(grade("S1", "CS102", "Programming II", "88", "2025-06-10"));
    store.grades.push(grade("S2", "CS999", "Other Course", "50", "2025-03-01"));
    store.exams.push(exam("CS101", "Calculus", "2020-05-01"));
    store.exams.push(exam("CS101", "Calculus", "2023-05-01"));
    store.exams.push(exam("CS101", "Calculus", "2099-05-01"));
    store
}

fn engine(store: MemoryStore) -> ChatEngine {
    ChatEngine::new(Arc::new(store), Arc::new(NoopTranslator)).with_seed(42)
}

async fn open_s1(engine: &ChatEngine) -> campus_chat::SessionContext {
    engine.open_session("S1").await.unwrap()
}

#[tokio::test]
async fn test_unknown_student_is_fatal_before_any_query() {
    let engine = engine(fixture_store());
    let err = engine.open_session("NOBODY").await.unwrap_err();
    assert!(matches!(err, Error::UnknownStudent(ref id) if id == "NOBODY"));
}

#[tokio::test]
async fn test_grades_query_returns_only_this_students_rows_sorted_desc() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "what are my grades").await;
    match payload {
        DisplayPayload::Table { headers, rows, .. } => {
            assert_eq!(rows.len(), 2);
            // Only S1's grades: the S2 record never appears.
            assert!(rows.iter().all(|r| r["Code"] != "CS999"));
            // Ordered by grading date descending.
            assert_eq!(rows[0]["Date"], "2025-06-10");
            assert_eq!(rows[1]["Date"], "2025-01-10");
            // Rows are keyed exactly by the advertised headers.
            for row in &rows {
                let mut sorted: Vec<&String> = headers.iter().collect();
                sorted.sort();
                assert_eq!(row.keys().collect::<Vec<_>>(), sorted);
            }
        }
        other => panic!("expected grades table, got {other:?}"),
    }
}

#[tokio::test]
async fn test_arabic_query_classifies_without_translation() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "ما هي درجاتي؟").await;
    assert!(matches!(payload, DisplayPayload::Table { .. }));
}

#[tokio::test]
async fn test_disambiguation_lists_exactly_the_matches() {
    let mut store = fixture_store();
    store.courses.push(course("CS102", "Programming I", "D1"));
    store.courses.push(course("CS103", "Programming II", "D1"));
    let engine = engine(store);
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "info for programming").await;
    match payload {
        DisplayPayload::Table { title, rows, .. } => {
            assert!(title.contains("Multiple"));
            assert_eq!(rows.len(), 2);
            let codes: Vec<&str> = rows.iter().map(|r| r["Code"].as_str()).collect();
            assert!(codes.contains(&"CS102"));
            assert!(codes.contains(&"CS103"));
        }
        other => panic!("expected disambiguation table, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_match_returns_course_detail() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "info for calc").await;
    match payload {
        DisplayPayload::CourseDetail {
            code, instructor, ..
        } => {
            assert_eq!(code, "CS101");
            assert_eq!(instructor, "Dr. Ahmed Hassan");
        }
        other => panic!("expected course detail, got {other:?}"),
    }
}

#[tokio::test]
async fn test_instructor_lookup_by_course_name() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "who teaches Calculus?").await;
    match payload {
        DisplayPayload::DoctorInfo { name, email, .. } => {
            assert_eq!(name, "Dr. Ahmed Hassan");
            assert_eq!(email, "ahmed@uni.edu");
        }
        other => panic!("expected doctor info, got {other:?}"),
    }
}

#[tokio::test]
async fn test_similarity_fallback_resolves_exact_template() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    // No intent keyword matches, but the text equals a generated
    // candidate template, so it must resolve to that template's handler.
    let payload = engine.process_query(&session, "What is Calculus?").await;
    assert!(
        matches!(payload, DisplayPayload::CourseDetail { ref code, .. } if code == "CS101"),
        "expected course detail, got {payload:?}"
    );
}

#[tokio::test]
async fn test_unresolvable_query_gets_fallback_reply() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine
        .process_query(&session, "zebra umbrella paperclip")
        .await;
    match payload {
        DisplayPayload::Text { message } => {
            assert!(message.contains("announcements"), "got: {message}");
        }
        other => panic!("expected fallback text, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fallback_reply_is_reproducible_with_same_seed() {
    let run = |seed: u64| async move {
        let engine = ChatEngine::new(Arc::new(fixture_store()), Arc::new(NoopTranslator))
            .with_seed(seed);
        let session = engine.open_session("S1").await.unwrap();
        engine.process_query(&session, "zebra umbrella").await
    };
    assert_eq!(run(9).await, run(9).await);
}

#[tokio::test]
async fn test_empty_course_corpus_short_circuits_fallback() {
    let mut store = fixture_store();
    store.courses.clear();
    let engine = engine(store);
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "zebra umbrella").await;
    assert!(matches!(payload, DisplayPayload::Text { .. }));
}

#[tokio::test]
async fn test_schedule_query_returns_meetings() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "show my schedule").await;
    match payload {
        DisplayPayload::Table { rows, .. } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["Course"], "Calculus (CS101)");
            assert_eq!(rows[0]["Instructor"], "Dr. Ahmed Hassan");
        }
        other => panic!("expected schedule table, got {other:?}"),
    }
}

#[tokio::test]
async fn test_prerequisite_check_reports_missing() {
    let mut store = fixture_store();
    let mut algorithms = course("CS201", "Algorithms", "D1");
    algorithms.prerequisites = vec!["CS101".into(), "CS104".into()];
    store.courses.push(algorithms);
    store.courses.push(course("CS104", "Discrete Math", "D1"));
    let engine = engine(store);
    let session = open_s1(&engine).await;

    // S1 passed CS101 with 75 but has no grade for CS104.
    let payload = engine
        .process_query(&session, "can i take algorithms")
        .await;
    match payload {
        DisplayPayload::Text { message } => {
            assert!(message.contains("1 prerequisite(s)"), "got: {message}");
            assert!(message.contains("Discrete Math (CS104)"));
        }
        other => panic!("expected text payload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exam_date_in_query_scopes_results() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine
        .process_query(&session, "any exams after 2030-01-01?")
        .await;
    match payload {
        DisplayPayload::Table { title, rows, .. } => {
            assert!(title.contains("2030-01-01"), "got: {title}");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["Date"], "2099-05-01");
        }
        other => panic!("expected exams table, got {other:?}"),
    }
}

#[tokio::test]
async fn test_past_exams_show_most_recent_first() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "show my past exams").await;
    match payload {
        DisplayPayload::Table { rows, .. } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0]["Date"], "2023-05-01");
            assert_eq!(rows[1]["Date"], "2020-05-01");
        }
        other => panic!("expected exams table, got {other:?}"),
    }
}

#[tokio::test]
async fn test_instructor_lookup_by_professor_name() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "doctor Ahmed Hassan").await;
    match payload {
        DisplayPayload::DoctorInfo {
            name,
            courses_teaching,
            ..
        } => {
            assert_eq!(name, "Dr. Ahmed Hassan");
            assert_eq!(courses_teaching, vec!["CS101: Calculus".to_string()]);
        }
        other => panic!("expected doctor info, got {other:?}"),
    }
}

#[tokio::test]
async fn test_study_query_returns_links() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine
        .process_query(&session, "help me study for calculus")
        .await;
    match payload {
        DisplayPayload::Links { links, .. } => assert!(!links.is_empty()),
        other => panic!("expected links payload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_greeting_gets_conversational_reply() {
    let engine = engine(fixture_store());
    let session = open_s1(&engine).await;

    let payload = engine.process_query(&session, "hello").await;
    assert!(matches!(payload, DisplayPayload::Text { .. }));
}

/// A data-access backend that fails every call.
struct FailingStore;

#[async_trait]
impl DataAccess for FailingStore {
    async fn find_announcements(
        &self,
        _: &AnnouncementFilter,
        _: bool,
        _: usize,
    ) -> Result<Vec<campus_chat::store::Announcement>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_complaints(
        &self,
        _: &ComplaintFilter,
        _: usize,
    ) -> Result<Vec<campus_chat::store::Complaint>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_courses(&self, _: &CourseFilter) -> Result<Vec<Course>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_course_by_name_or_code(&self, _: &str) -> Result<Vec<Course>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_exams(&self, _: &ExamFilter, _: usize) -> Result<Vec<Exam>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_grades(&self, _: &GradeFilter) -> Result<Vec<Grade>> {
        Err(Error::Upstream("db down".into()))
    }
    async fn find_user(&self, query: &UserQuery) -> Result<Vec<User>> {
        // Let the session open so queries can be exercised.
        if let UserQuery::Id { id, .. } = query {
            if id == "S1" {
                return Ok(vec![User {
                    id: "S1".into(),
                    name: "Sara".into(),
                    role: Role::Student,
                    email: None,
                    department: None,
                    registered_courses: vec![],
                }]);
            }
        }
        Err(Error::Upstream("db down".into()))
    }
}

#[tokio::test]
async fn test_data_access_failure_becomes_try_again_text() {
    let engine = ChatEngine::new(Arc::new(FailingStore), Arc::new(NoopTranslator)).with_seed(1);
    let session = engine.open_session("S1").await.unwrap();

    let payload = engine.process_query(&session, "show announcements").await;
    match payload {
        DisplayPayload::Text { message } => {
            assert!(message.contains("try again"), "got: {message}");
        }
        other => panic!("expected try-again text, got {other:?}"),
    }
}
