//! Shared fixtures for the HTTP integration tests.
//!
//! Deterministic in-memory implementations of the persistence ports stand
//! in for PostgreSQL, preserving the store semantics the handlers rely on:
//! full-tuple find-or-create, ownership-scoped mutations reporting the
//! affected-row count, and the unscoped existence probe.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use courses_backend::domain::auth::{password_digest, CredentialAuthenticator};
use courses_backend::domain::ports::{
    CourseRepository, CourseRepositoryError, FindOrCreateOutcome, UserRepository,
    UserRepositoryError,
};
use courses_backend::domain::{
    Course, CourseDraft, CourseId, CourseOwner, CourseWithOwner, NewUser, User, UserId,
};
use courses_backend::inbound::http::courses::{
    create_course, delete_course, get_course, list_courses, update_course,
};
use courses_backend::inbound::http::error::json_error_handler;
use courses_backend::inbound::http::index::{greeting, route_fallback};
use courses_backend::inbound::http::state::HttpState;
use courses_backend::inbound::http::users::{current_user, register_user};
use courses_backend::Trace;

/// In-memory user store with a unique email constraint.
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Seed a user directly, bypassing the HTTP registration flow.
    pub fn seed(&self, first_name: &str, last_name: &str, email: &str, password: &str) -> User {
        let user = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email_address: email.to_owned(),
            password_digest: password_digest(password),
        };
        self.rows.lock().expect("user store lock").push(user.clone());
        user
    }

    fn owner_projection(&self, owner_id: UserId) -> Option<CourseOwner> {
        self.rows
            .lock()
            .expect("user store lock")
            .iter()
            .find(|user| user.id == owner_id)
            .map(|user| CourseOwner {
                id: user.id,
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .rows
            .lock()
            .expect("user store lock")
            .iter()
            .find(|user| user.email_address == email)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        let mut rows = self.rows.lock().expect("user store lock");
        if rows
            .iter()
            .any(|user| user.email_address == new_user.email_address)
        {
            return Err(UserRepositoryError::duplicate_email(new_user.email_address));
        }

        let user = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email_address: new_user.email_address,
            password_digest: new_user.password_digest,
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// In-memory course store mirroring the SQL adapter's semantics.
pub struct InMemoryCourseRepository {
    users: Arc<InMemoryUserRepository>,
    rows: Mutex<Vec<Course>>,
    next_id: AtomicI32,
}

impl InMemoryCourseRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored rows, for idempotency assertions.
    pub fn len(&self) -> usize {
        self.rows.lock().expect("course store lock").len()
    }

    /// Direct row snapshot, for unchanged-row assertions.
    pub fn snapshot(&self, course_id: CourseId) -> Option<Course> {
        self.rows
            .lock()
            .expect("course store lock")
            .iter()
            .find(|course| course.id == course_id)
            .cloned()
    }

    fn with_owner(&self, course: Course) -> Result<CourseWithOwner, CourseRepositoryError> {
        let owner = self
            .users
            .owner_projection(course.owner_id)
            .ok_or_else(|| CourseRepositoryError::query("owner row missing"))?;
        Ok(CourseWithOwner { course, owner })
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list_all(&self) -> Result<Vec<CourseWithOwner>, CourseRepositoryError> {
        let rows: Vec<Course> = self.rows.lock().expect("course store lock").clone();
        rows.into_iter()
            .map(|course| self.with_owner(course))
            .collect()
    }

    async fn find_by_id(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseWithOwner>, CourseRepositoryError> {
        match self.snapshot(course_id) {
            Some(course) => Ok(Some(self.with_owner(course)?)),
            None => Ok(None),
        }
    }

    async fn find_or_create(
        &self,
        draft: CourseDraft,
        owner_id: UserId,
    ) -> Result<FindOrCreateOutcome, CourseRepositoryError> {
        let mut rows = self.rows.lock().expect("course store lock");

        let existing = rows.iter().find(|course| {
            course.title == draft.title
                && course.description == draft.description
                && course.estimated_time == draft.estimated_time
                && course.materials_needed == draft.materials_needed
                && course.owner_id == owner_id
        });
        if let Some(course) = existing {
            return Ok(FindOrCreateOutcome {
                course: course.clone(),
                created: false,
            });
        }

        let course = Course {
            id: CourseId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: draft.title,
            description: draft.description,
            estimated_time: draft.estimated_time,
            materials_needed: draft.materials_needed,
            owner_id,
        };
        rows.push(course.clone());
        Ok(FindOrCreateOutcome {
            course,
            created: true,
        })
    }

    async fn update_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
        draft: CourseDraft,
    ) -> Result<bool, CourseRepositoryError> {
        let mut rows = self.rows.lock().expect("course store lock");
        let Some(course) = rows
            .iter_mut()
            .find(|course| course.id == course_id && course.owner_id == owner_id)
        else {
            return Ok(false);
        };

        course.title = draft.title;
        course.description = draft.description;
        if let Some(estimated_time) = draft.estimated_time {
            course.estimated_time = Some(estimated_time);
        }
        if let Some(materials_needed) = draft.materials_needed {
            course.materials_needed = Some(materials_needed);
        }
        Ok(true)
    }

    async fn delete_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
    ) -> Result<bool, CourseRepositoryError> {
        let mut rows = self.rows.lock().expect("course store lock");
        let before = rows.len();
        rows.retain(|course| !(course.id == course_id && course.owner_id == owner_id));
        Ok(rows.len() < before)
    }

    async fn exists(&self, course_id: CourseId) -> Result<bool, CourseRepositoryError> {
        Ok(self
            .rows
            .lock()
            .expect("course store lock")
            .iter()
            .any(|course| course.id == course_id))
    }
}

/// Fixture bundle handed to each test.
pub struct TestBackend {
    pub users: Arc<InMemoryUserRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
    pub state: web::Data<HttpState>,
}

/// Build the in-memory backend with an empty store.
pub fn test_backend() -> TestBackend {
    let users = Arc::new(InMemoryUserRepository::new());
    let courses = Arc::new(InMemoryCourseRepository::new(users.clone()));
    let state = web::Data::new(HttpState::new(
        courses.clone(),
        users.clone(),
        Arc::new(CredentialAuthenticator::new(users.clone())),
    ));
    TestBackend {
        users,
        courses,
        state,
    }
}

/// Assemble the application exactly as the server wires it.
pub fn build_test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(greeting)
        .service(
            web::scope("/api/courses")
                .service(list_courses)
                .service(get_course)
                .service(create_course)
                .service(update_course)
                .service(delete_course),
        )
        .service(
            web::scope("/api/users")
                .service(current_user)
                .service(register_user),
        )
        .default_service(web::route().to(route_fallback))
}

/// Encode a Basic authorization header value.
pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}
