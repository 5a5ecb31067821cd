//! Query-understanding and response-dispatch engine.
//!
//! One query runs straight through: language detection, best-effort
//! translation, entity extraction, keyword intent classification, then
//! domain dispatch, a canned conversational reply, or the TF-IDF
//! similarity fallback. Every path ends in a [`DisplayPayload`]; upstream
//! failures become user-facing "try again" text, never a crash.

pub mod conversation;
pub mod courses;
pub mod prereq;
pub mod study;

pub use conversation::ResponseCatalog;
pub use courses::CourseMatch;
pub use prereq::PrereqReport;

use crate::config::ChatConfig;
use crate::error::{Error, Result};
use crate::format::{DisplayPayload, ResponseFormatter, TableRow};
use crate::nlp::similarity::{self, CandidateTarget};
use crate::nlp::{language, EntityBundle, EntityExtractor, IntentKind, IntentRegistry, Language};
use crate::store::{
    AnnouncementFilter, ComplaintFilter, Course, CourseFilter, DataAccess, ExamFilter,
    GradeFilter, Role, User, UserQuery,
};
use crate::translate::Translate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Per-request session state. Each invocation receives its own context;
/// nothing is shared process-wide, so concurrent requests from different
/// users never interleave state.
#[derive(Debug)]
pub struct SessionContext {
    pub student_id: String,
    pub student_name: String,
    /// Forces the reply language regardless of the detected script.
    pub language_override: Option<Language>,
    /// Doctor/user display-name cache, unbounded for the lifetime of this
    /// context and discarded with it.
    name_cache: Mutex<HashMap<String, String>>,
}

impl SessionContext {
    pub fn new(student_id: impl Into<String>, student_name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            language_override: None,
            name_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language_override = Some(language);
        self
    }

    fn cached_name(&self, id: &str) -> Option<String> {
        self.name_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn cache_name(&self, id: &str, name: &str) {
        self.name_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), name.to_string());
    }
}

/// The chat engine. Owns the NLP components and the external capability
/// handles; holds no per-user state.
pub struct ChatEngine {
    store: Arc<dyn DataAccess>,
    translator: Arc<dyn Translate>,
    registry: IntentRegistry,
    extractor: EntityExtractor,
    formatter: ResponseFormatter,
    catalog: ResponseCatalog,
    config: ChatConfig,
    rng: Mutex<StdRng>,
}

impl ChatEngine {
    pub fn new(store: Arc<dyn DataAccess>, translator: Arc<dyn Translate>) -> Self {
        Self {
            store,
            translator,
            registry: IntentRegistry::standard(),
            extractor: EntityExtractor::new(),
            formatter: ResponseFormatter::new(),
            catalog: ResponseCatalog::standard(),
            config: ChatConfig::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds the reply RNG; tests use this to assert exact canned output.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Resolves a student identifier into a session. The only fatal
    /// failure in the engine: an unknown student must be reported before
    /// any query is processed.
    pub async fn open_session(&self, student_id: &str) -> Result<SessionContext> {
        let users = self.store.find_user(&UserQuery::student(student_id)).await?;
        match users.into_iter().next() {
            Some(student) => {
                debug!(student = student_id, "session opened");
                Ok(SessionContext::new(student.id, student.name))
            }
            None => Err(Error::UnknownStudent(student_id.to_string())),
        }
    }

    /// Processes one raw query into a display payload. Never panics and
    /// never surfaces a transport error: every failure maps to a typed
    /// payload in the reply language.
    pub async fn process_query(&self, session: &SessionContext, raw: &str) -> DisplayPayload {
        let detected = language::detect(raw);
        let reply_language = session.language_override.unwrap_or(detected);

        let text = if detected == Language::Arabic {
            self.translate_best_effort(raw).await
        } else {
            raw.to_string()
        };

        let mut entities = self.extractor.extract(&text);
        if entities.course_code.is_none() || entities.course_name.is_none() {
            let from_raw = self.extractor.extract(raw);
            entities.course_code = entities.course_code.or(from_raw.course_code);
            entities.course_name = entities.course_name.or(from_raw.course_name);
        }

        let intent = self.registry.classify(&text);
        debug!(?intent, language = reply_language.code(), "query classified");

        match intent {
            Some(kind) if kind.is_conversational() => {
                DisplayPayload::text(self.catalog.pick(kind, reply_language, &mut *self.rng_lock()))
            }
            Some(kind) if kind.is_link_producing() => {
                study::links_payload(kind, &self.study_topic(&text, &entities), reply_language)
            }
            Some(kind) => self
                .dispatch(session, kind, &entities, &text)
                .await
                .unwrap_or_else(|err| self.error_payload(err, reply_language)),
            None => match study::detect(&text) {
                Some(kind) => {
                    study::links_payload(kind, &self.study_topic(&text, &entities), reply_language)
                }
                None => self.similarity_fallback(session, &text, reply_language).await,
            },
        }
    }

    fn rng_lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Translation never fails the pipeline: any error degrades to the
    /// original text, so classification runs on possibly-untranslated
    /// input.
    async fn translate_best_effort(&self, text: &str) -> String {
        match self.translator.translate(text, Language::English).await {
            Ok(translated) => translated,
            Err(err) => {
                warn!(%err, "translation failed, using original text");
                text.to_string()
            }
        }
    }

    fn study_topic(&self, text: &str, entities: &EntityBundle) -> String {
        if let Some(name) = &entities.course_name {
            return name.clone();
        }
        strip_phrases(
            text,
            &[
                "help me study",
                "how to study",
                "study help",
                "study for",
                "study",
                "learn about",
                "learn",
                "tutorial",
                "material",
                "videos",
                "video",
                "watch",
                "youtube",
                "i want",
                "about",
                "for",
                "شرح",
                "فيديو",
                "مذاكرة",
            ],
        )
    }

    async fn dispatch(
        &self,
        session: &SessionContext,
        kind: IntentKind,
        entities: &EntityBundle,
        text: &str,
    ) -> Result<DisplayPayload> {
        match kind {
            IntentKind::Announcements => self.announcements(entities).await,
            IntentKind::Complaints => self.complaints(session, text).await,
            IntentKind::MyCourses => self.my_courses(session).await,
            IntentKind::AllCourses => self.all_courses(session).await,
            IntentKind::CourseInfo => self.course_info(session, entities, text).await,
            IntentKind::Schedule => self.schedule(session).await,
            IntentKind::Exams => self.exams(entities, text).await,
            IntentKind::Grades => self.grades(session).await,
            IntentKind::Prerequisites => self.prerequisites(session, entities, text).await,
            IntentKind::Electives => self.electives(session).await,
            IntentKind::Instructor => self.instructor(session, entities, text).await,
            // Conversational and link intents are answered before dispatch.
            _ => Err(Error::NotFound(format!("no handler for {kind:?}"))),
        }
    }

    async fn announcements(&self, entities: &EntityBundle) -> Result<DisplayPayload> {
        let filter = AnnouncementFilter {
            course_code: entities.course_code.clone(),
        };
        let records = self
            .store
            .find_announcements(&filter, true, self.config.announcement_limit)
            .await?;
        Ok(self.formatter.announcements(&records))
    }

    async fn complaints(&self, session: &SessionContext, text: &str) -> Result<DisplayPayload> {
        let lower = text.to_lowercase();
        let status = if lower.contains("pending") {
            Some("Pending".to_string())
        } else if lower.contains("resolved") {
            Some("Resolved".to_string())
        } else {
            None
        };
        let records = self
            .store
            .find_complaints(
                &ComplaintFilter {
                    user_id: Some(session.student_id.clone()),
                    status,
                },
                self.config.complaint_limit,
            )
            .await?;
        Ok(self.formatter.complaints(&records))
    }

    async fn my_courses(&self, session: &SessionContext) -> Result<DisplayPayload> {
        let users = self
            .store
            .find_user(&UserQuery::student(&session.student_id))
            .await?;
        let codes = users
            .into_iter()
            .next()
            .map(|u| u.registered_courses)
            .unwrap_or_default();
        let records = if codes.is_empty() {
            vec![]
        } else {
            self.store
                .find_courses(&CourseFilter {
                    active_only: true,
                    codes: Some(codes),
                    ..Default::default()
                })
                .await?
        };
        let names = self.doctor_names(session, &records).await;
        Ok(self
            .formatter
            .courses(&records, &names, "My Registered Courses"))
    }

    async fn all_courses(&self, session: &SessionContext) -> Result<DisplayPayload> {
        let records = self
            .store
            .find_courses(&CourseFilter {
                active_only: true,
                ..Default::default()
            })
            .await?;
        let names = self.doctor_names(session, &records).await;
        Ok(self.formatter.courses(&records, &names, "Available Courses"))
    }

    async fn electives(&self, session: &SessionContext) -> Result<DisplayPayload> {
        let records = self
            .store
            .find_courses(&CourseFilter {
                active_only: true,
                electives_only: true,
                ..Default::default()
            })
            .await?;
        let records: Vec<Course> = records
            .into_iter()
            .filter(|c| !c.registered_students.contains(&session.student_id))
            .collect();
        let names = self.doctor_names(session, &records).await;
        Ok(self.formatter.courses(&records, &names, "Elective Courses"))
    }

    async fn course_info(
        &self,
        session: &SessionContext,
        entities: &EntityBundle,
        text: &str,
    ) -> Result<DisplayPayload> {
        let reference = self.course_reference(entities, text, &COURSE_INFO_PHRASES);
        let Some(reference) = reference else {
            return Ok(DisplayPayload::text("Please specify a course name."));
        };
        match courses::resolve(self.store.as_ref(), &reference).await? {
            CourseMatch::None => Ok(DisplayPayload::text(format!(
                "No courses found matching '{reference}'."
            ))),
            CourseMatch::Many(found) => Ok(self.disambiguation(session, &reference, &found).await),
            CourseMatch::One(course) => self.course_detail(session, &course).await,
        }
    }

    async fn course_detail(
        &self,
        session: &SessionContext,
        course: &Course,
    ) -> Result<DisplayPayload> {
        let instructor = self.doctor_name(session, &course.doctor_id).await;
        let mut ta_names = HashMap::new();
        for section in &course.sections {
            if let Some(ta_id) = &section.ta_id {
                if let Some(name) = self.ta_name(session, ta_id).await {
                    ta_names.insert(ta_id.clone(), name);
                }
            }
        }
        Ok(self.formatter.course_detail(course, &instructor, &ta_names))
    }

    async fn schedule(&self, session: &SessionContext) -> Result<DisplayPayload> {
        let users = self
            .store
            .find_user(&UserQuery::student(&session.student_id))
            .await?;
        let codes = users
            .into_iter()
            .next()
            .map(|u| u.registered_courses)
            .unwrap_or_default();
        if codes.is_empty() {
            return Ok(self.formatter.schedule(vec![]));
        }
        let records = self
            .store
            .find_courses(&CourseFilter {
                active_only: true,
                codes: Some(codes),
                ..Default::default()
            })
            .await?;

        let mut rows: Vec<(usize, TableRow)> = Vec::new();
        for course in &records {
            let instructor = self.doctor_name(session, &course.doctor_id).await;
            for lecture in &course.lecture_sessions {
                rows.push((
                    day_index(&lecture.day),
                    schedule_row("Lecture", course, lecture, &instructor),
                ));
            }
            for section in &course.sections {
                if !section.registered_students.contains(&session.student_id) {
                    continue;
                }
                let ta = match &section.ta_id {
                    Some(id) => self
                        .ta_name(session, id)
                        .await
                        .unwrap_or_else(|| "TA Not Assigned".to_string()),
                    None => "TA Not Assigned".to_string(),
                };
                for meeting in &section.sessions {
                    rows.push((day_index(&meeting.day), schedule_row("Section", course, meeting, &ta)));
                }
            }
        }
        rows.sort_by_key(|(day, _)| *day);
        Ok(self
            .formatter
            .schedule(rows.into_iter().map(|(_, row)| row).collect()))
    }

    async fn exams(&self, entities: &EntityBundle, text: &str) -> Result<DisplayPayload> {
        let lower = text.to_lowercase();
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let mut filter = ExamFilter {
            course_code: entities.course_code.clone(),
            ..Default::default()
        };
        let title = if let Some(date) = &entities.date {
            // An explicit date in the query scopes exams from that day on.
            filter.on_or_after = Some(date.clone());
            format!("Exams from {date}")
        } else if lower.contains("upcoming") {
            filter.on_or_after = Some(today);
            "Upcoming Exams".to_string()
        } else if lower.contains("past") {
            filter.before = Some(today);
            "Past Exams".to_string()
        } else if let Some(code) = &filter.course_code {
            format!("Exams for Course {code}")
        } else {
            "All Exams".to_string()
        };
        let records = self.store.find_exams(&filter, self.config.exam_limit).await?;
        Ok(self.formatter.exams(&records, &title))
    }

    async fn grades(&self, session: &SessionContext) -> Result<DisplayPayload> {
        let records = self
            .store
            .find_grades(&GradeFilter {
                student_id: Some(session.student_id.clone()),
                course_code: None,
            })
            .await?;
        Ok(self.formatter.grades(&records, &session.student_name))
    }

    async fn prerequisites(
        &self,
        session: &SessionContext,
        entities: &EntityBundle,
        text: &str,
    ) -> Result<DisplayPayload> {
        let reference = self.course_reference(entities, text, &PREREQ_PHRASES);
        let Some(reference) = reference else {
            return Ok(DisplayPayload::text(
                "Please specify which course to check prerequisites for.",
            ));
        };
        match courses::resolve(self.store.as_ref(), &reference).await? {
            CourseMatch::None => Ok(DisplayPayload::text(format!(
                "No courses found matching '{reference}'."
            ))),
            CourseMatch::Many(found) => Ok(self.disambiguation(session, &reference, &found).await),
            CourseMatch::One(course) => {
                let report = prereq::check(
                    self.store.as_ref(),
                    &session.student_id,
                    &course.code,
                    self.config.passing_score,
                )
                .await?;
                Ok(DisplayPayload::text(report.summary))
            }
        }
    }

    async fn instructor(
        &self,
        session: &SessionContext,
        entities: &EntityBundle,
        text: &str,
    ) -> Result<DisplayPayload> {
        // A professor name in the query answers directly, before any course
        // resolution is attempted.
        if let Some(fragment) = &entities.professor {
            if let Some(payload) = self.doctor_by_name(fragment).await? {
                return Ok(payload);
            }
        }
        let reference = self.course_reference(entities, text, &INSTRUCTOR_PHRASES);
        let Some(reference) = reference else {
            // No course named: list every doctor instead.
            let doctors = self.store.find_user(&UserQuery::ByRole(Role::Doctor)).await?;
            return Ok(self.formatter.doctors(&doctors));
        };
        match courses::resolve(self.store.as_ref(), &reference).await? {
            CourseMatch::None => Ok(DisplayPayload::text(format!(
                "No courses found matching '{reference}'."
            ))),
            CourseMatch::Many(found) => Ok(self.disambiguation(session, &reference, &found).await),
            CourseMatch::One(course) => {
                let doctors = self.store.find_user(&UserQuery::doctor(&course.doctor_id)).await?;
                let Some(doctor) = doctors.into_iter().next() else {
                    return Ok(DisplayPayload::text(format!(
                        "Could not find the instructor for {}.",
                        course.label()
                    )));
                };
                let teaching: Vec<Course> = self
                    .store
                    .find_courses(&CourseFilter {
                        doctor_id: Some(doctor.id.clone()),
                        ..Default::default()
                    })
                    .await?
                    .into_iter()
                    .filter(|c| c.code != course.code)
                    .collect();
                Ok(self.formatter.doctor_info(&doctor, &teaching))
            }
        }
    }

    /// Similarity fallback for queries the classifier could not place.
    /// The candidate corpus is regenerated from live courses on every call
    /// and the vectorizer refit; freshness is preferred over cost.
    async fn similarity_fallback(
        &self,
        session: &SessionContext,
        text: &str,
        reply_language: Language,
    ) -> DisplayPayload {
        let active = match self
            .store
            .find_courses(&CourseFilter {
                active_only: true,
                ..Default::default()
            })
            .await
        {
            Ok(active) => active,
            Err(err) => return self.error_payload(err, reply_language),
        };
        // No active courses means no corpus worth scoring against.
        if active.is_empty() {
            return DisplayPayload::text(
                self.catalog.fallback(reply_language, &mut *self.rng_lock()),
            );
        }

        let candidates = similarity::build_candidates(&active);
        let best = similarity::best_match(text, &candidates);
        debug!(
            score = best.as_ref().map(|b| b.score).unwrap_or(0.0),
            "similarity fallback scored"
        );

        match best {
            Some(result) if result.score > self.config.similarity_threshold => {
                let outcome = match &result.candidate.target {
                    CandidateTarget::CourseInfo(code)
                    | CandidateTarget::CourseSchedule(code) => match self.find_course(code).await {
                        Ok(Some(course)) => self.course_detail(session, &course).await,
                        Ok(None) => Ok(DisplayPayload::text(format!(
                            "No courses found matching '{code}'."
                        ))),
                        Err(err) => Err(err),
                    },
                    CandidateTarget::Instructor(code) => {
                        let entities = EntityBundle {
                            course_code: Some(code.clone()),
                            ..Default::default()
                        };
                        self.instructor(session, &entities, "").await
                    }
                    CandidateTarget::Prerequisites(code) => {
                        let entities = EntityBundle {
                            course_code: Some(code.clone()),
                            ..Default::default()
                        };
                        self.prerequisites(session, &entities, "").await
                    }
                    CandidateTarget::MySchedule => self.schedule(session).await,
                    CandidateTarget::MyGrades => self.grades(session).await,
                };
                outcome.unwrap_or_else(|err| self.error_payload(err, reply_language))
            }
            _ => DisplayPayload::text(self.catalog.fallback(reply_language, &mut *self.rng_lock())),
        }
    }

    async fn find_course(&self, code: &str) -> Result<Option<Course>> {
        Ok(self
            .store
            .find_courses(&CourseFilter {
                codes: Some(vec![code.to_string()]),
                ..Default::default()
            })
            .await?
            .into_iter()
            .next())
    }

    /// A disambiguation payload enumerating every match; the engine never
    /// silently picks one.
    async fn disambiguation(
        &self,
        session: &SessionContext,
        reference: &str,
        found: &[Course],
    ) -> DisplayPayload {
        let names = self.doctor_names(session, found).await;
        self.formatter.courses(
            found,
            &names,
            &format!("Multiple courses match '{reference}', please be more specific"),
        )
    }

    /// Best course reference in priority order: extracted code, extracted
    /// name fragment, then the query text with intent phrases stripped.
    fn course_reference(
        &self,
        entities: &EntityBundle,
        text: &str,
        phrases: &[&str],
    ) -> Option<String> {
        if let Some(code) = &entities.course_code {
            return Some(code.clone());
        }
        if let Some(name) = &entities.course_name {
            return Some(name.clone());
        }
        let residual = strip_phrases(text, phrases);
        if residual.is_empty() {
            None
        } else {
            Some(residual)
        }
    }

    /// Looks a doctor up by name fragment. One hit yields the doctor card
    /// with everything they teach; several hits yield a doctors table;
    /// no hit yields `None` so the caller can fall back to course
    /// resolution.
    async fn doctor_by_name(&self, fragment: &str) -> Result<Option<DisplayPayload>> {
        let lower = fragment.to_lowercase();
        let mut named: Vec<User> = self
            .store
            .find_user(&UserQuery::ByRole(Role::Doctor))
            .await?
            .into_iter()
            .filter(|d| d.name.to_lowercase().contains(&lower))
            .collect();
        match named.len() {
            0 => Ok(None),
            1 => {
                let doctor = named.remove(0);
                let teaching = self
                    .store
                    .find_courses(&CourseFilter {
                        doctor_id: Some(doctor.id.clone()),
                        ..Default::default()
                    })
                    .await?;
                Ok(Some(self.formatter.doctor_info(&doctor, &teaching)))
            }
            _ => Ok(Some(self.formatter.doctors(&named))),
        }
    }

    /// Resolves a doctor/TA id to a display name through the session
    /// cache, falling back to `Doctor <id>` when the user is unknown.
    async fn doctor_name(&self, session: &SessionContext, id: &str) -> String {
        if let Some(name) = session.cached_name(id) {
            return name;
        }
        let name = match self.store.find_user(&UserQuery::doctor(id)).await {
            Ok(users) => users
                .into_iter()
                .next()
                .map(|u| u.name)
                .unwrap_or_else(|| format!("Doctor {id}")),
            Err(err) => {
                warn!(%err, doctor = id, "doctor lookup failed");
                format!("Doctor {id}")
            }
        };
        session.cache_name(id, &name);
        name
    }

    /// Resolves a TA id to a name. TAs are looked up without a role
    /// constraint; an unknown id stays unresolved so the formatter falls
    /// back to "TA Not Assigned".
    async fn ta_name(&self, session: &SessionContext, id: &str) -> Option<String> {
        if let Some(name) = session.cached_name(id) {
            return Some(name);
        }
        match self.store.find_user(&UserQuery::by_id(id)).await {
            Ok(users) => users.into_iter().next().map(|u| {
                session.cache_name(id, &u.name);
                u.name
            }),
            Err(err) => {
                warn!(%err, ta = id, "ta lookup failed");
                None
            }
        }
    }

    async fn doctor_names(
        &self,
        session: &SessionContext,
        records: &[Course],
    ) -> HashMap<String, String> {
        let mut names = HashMap::new();
        for course in records {
            if !names.contains_key(&course.doctor_id) {
                let name = self.doctor_name(session, &course.doctor_id).await;
                names.insert(course.doctor_id.clone(), name);
            }
        }
        names
    }

    fn error_payload(&self, err: Error, reply_language: Language) -> DisplayPayload {
        match err {
            Error::NotFound(message) => DisplayPayload::text(message),
            err => {
                warn!(%err, "query handling failed upstream");
                DisplayPayload::text(match reply_language {
                    Language::English => {
                        "Something went wrong while looking that up. Please try again."
                    }
                    Language::Arabic => "حدث خطأ أثناء البحث. حاول مرة أخرى من فضلك.",
                })
            }
        }
    }
}

/// Phrases stripped when extracting a course reference for course info.
const COURSE_INFO_PHRASES: [&str; 16] = [
    "when is my",
    "what time is my",
    "schedule for",
    "timetable for",
    "details for",
    "info for",
    "more info",
    "details",
    "detail",
    "info",
    "about",
    "course",
    "class",
    "lecture",
    "my",
    "the",
];

/// Phrases stripped when extracting a course reference for prerequisites.
const PREREQ_PHRASES: [&str; 12] = [
    "what are the prerequisites for",
    "prerequisites for",
    "prerequisites of",
    "prerequisite",
    "prereqs",
    "prereq",
    "can i take",
    "requirements for",
    "course",
    "the",
    "my",
    "for",
];

/// Phrases stripped when extracting a course reference for instructor
/// lookup.
const INSTRUCTOR_PHRASES: [&str; 14] = [
    "who is teaching",
    "who teaches",
    "who is the",
    "teaches",
    "teacher",
    "instructor",
    "professor",
    "doctor",
    "for",
    "of",
    "the",
    "my",
    "course",
    "class",
];

/// Removes multiword phrases as substrings and single-word fillers token
/// by token, so short fillers like "the" never damage the inside of a
/// course name.
fn strip_phrases(text: &str, phrases: &[&str]) -> String {
    let mut out = text.to_lowercase();
    for phrase in phrases.iter().filter(|p| p.contains(' ')) {
        out = out.replace(phrase, " ");
    }
    out.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation() || c == '؟'))
        .filter(|t| !t.is_empty())
        .filter(|t| !phrases.iter().any(|p| p == t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn day_index(day: &str) -> usize {
    const DAYS: [&str; 7] = [
        "sunday",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
    ];
    let lower = day.to_lowercase();
    DAYS.iter().position(|d| *d == lower).unwrap_or(DAYS.len())
}

fn schedule_row(
    kind: &str,
    course: &Course,
    meeting: &crate::store::ClassSession,
    instructor: &str,
) -> TableRow {
    [
        ("Type", kind.to_string()),
        ("Course", course.label()),
        ("Day", meeting.day.clone()),
        ("Time", format!("{} - {}", meeting.start_time, meeting.end_time)),
        ("Room", meeting.room.clone()),
        ("Instructor", instructor.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
