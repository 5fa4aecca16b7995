#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use placement_iq::{
    entities::{
        certification::Certification,
        mock_test::MockTest,
        project::Project,
        skill::Skill,
        user::{LoginUser, NewUser, User, UserInsert, UserResponse},
    },
    errors::AppError,
    middlewares::auth::AuthMiddleware,
    repositories::{
        certification::CertificationRepository,
        mock_test::MockTestRepository,
        project::ProjectRepository,
        skill::SkillRepository,
        user::UserRepository,
    },
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    shared_repos::SharedRepositories,
    AppState,
};
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::{net::TcpListener, sync::{Arc, Mutex}, time::Duration};
use uuid::Uuid;

/// Repository double backed by plain vectors.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    skills: Mutex<Vec<Skill>>,
    projects: Mutex<Vec<Project>>,
    mock_tests: Mutex<Vec<MockTest>>,
    certifications: Mutex<Vec<Certification>>,
}

impl InMemoryStore {
    pub fn repositories(self: &Arc<Self>) -> SharedRepositories {
        SharedRepositories {
            user_repo: self.clone(),
            skill_repo: self.clone(),
            project_repo: self.clone(),
            mock_test_repo: self.clone(),
            certification_repo: self.clone(),
        }
    }

    pub fn insert_mock_test(&self, test: MockTest) {
        self.mock_tests.lock().unwrap().push(test);
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn delete_owned<T>(
    records: &Mutex<Vec<T>>,
    matches: impl Fn(&T) -> bool,
    what: &str,
) -> Result<(), AppError> {
    let mut records = records.lock().unwrap();
    let before = records.len();
    records.retain(|r| !matches(r));
    if records.len() == before {
        return Err(AppError::NotFound(format!("{what} not found")));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.trim().to_lowercase();
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == *id).cloned())
    }

    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let created = User {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at,
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.lock().unwrap().iter().filter(|s| s.user_id == *user_id).cloned().collect())
    }

    async fn create_skill(&self, skill: &Skill) -> Result<Skill, AppError> {
        self.skills.lock().unwrap().push(skill.clone());
        Ok(skill.clone())
    }

    async fn delete_skill(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        delete_owned(&self.skills, |s| s.id == *id && s.user_id == *user_id, "Skill")
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_projects(&self, user_id: &Uuid) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.lock().unwrap().iter().filter(|p| p.user_id == *user_id).cloned().collect())
    }

    async fn create_project(&self, project: &Project) -> Result<Project, AppError> {
        self.projects.lock().unwrap().push(project.clone());
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        delete_owned(&self.projects, |p| p.id == *id && p.user_id == *user_id, "Project")
    }
}

#[async_trait]
impl MockTestRepository for InMemoryStore {
    async fn list_mock_tests(&self, user_id: &Uuid) -> Result<Vec<MockTest>, AppError> {
        let mut tests: Vec<MockTest> = self.mock_tests.lock().unwrap()
            .iter()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect();
        tests.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(tests)
    }

    async fn create_mock_test(&self, test: &MockTest) -> Result<MockTest, AppError> {
        self.mock_tests.lock().unwrap().push(test.clone());
        Ok(test.clone())
    }

    async fn delete_mock_test(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        delete_owned(&self.mock_tests, |t| t.id == *id && t.user_id == *user_id, "Mock test")
    }
}

#[async_trait]
impl CertificationRepository for InMemoryStore {
    async fn list_certifications(&self, user_id: &Uuid) -> Result<Vec<Certification>, AppError> {
        Ok(self.certifications.lock().unwrap().iter().filter(|c| c.user_id == *user_id).cloned().collect())
    }

    async fn create_certification(&self, cert: &Certification) -> Result<Certification, AppError> {
        self.certifications.lock().unwrap().push(cert.clone());
        Ok(cert.clone())
    }

    async fn delete_certification(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        delete_owned(&self.certifications, |c| c.id == *id && c.user_id == *user_id, "Certification")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "PlacementIQ Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        log_level: "warn".to_string(),
        database_url: "postgres://unused@127.0.0.1/unused".into(),
        run_migrations: false,
        cors_allowed_origins: "*".to_string(),
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".into(),
        jwt_expiration_minutes: 60,
        cookie_secure: false,
    }
}

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub store: Arc<InMemoryStore>,
    pub config: AppConfig,
}

/// A logged in user and the raw session token from the `token` cookie.
pub struct TestSession {
    pub user: UserResponse,
    pub token: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();
        let store = Arc::new(InMemoryStore::default());

        let state = web::Data::new(AppState::new(&config, store.repositories()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(AuthMiddleware)
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .disable_signals()
        .run();

        actix_rt::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            actix_rt::time::sleep(Duration::from_millis(10)).await;
        }

        TestApp { address, client, store, config }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T, token: Option<&str>) -> Response {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.header(header::COOKIE, format!("token={}", token));
        }
        request.send().await.expect("Failed to send POST")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.header(header::COOKIE, format!("token={}", token));
        }
        request.send().await.expect("Failed to send GET")
    }

    pub async fn delete(&self, path: &str, token: &str) -> Response {
        self.client
            .delete(self.url(path))
            .header(header::COOKIE, format!("token={}", token))
            .send()
            .await
            .expect("Failed to send DELETE")
    }

    pub async fn register_user(&self, user: &NewUser) -> Response {
        self.post_json("/api/auth/register", user, None).await
    }

    pub async fn login_user(&self, credentials: &LoginUser) -> Response {
        self.post_json("/api/auth/login", credentials, None).await
    }

    /// Registers a fresh user and returns its session.
    pub async fn signed_up_user(&self) -> TestSession {
        let user = new_user(&format!("student-{}@example.com", Uuid::new_v4()));
        let response = self.register_user(&user).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let token = session_token(&response).expect("register sets the session cookie");
        let user = response.json().await.expect("Failed to parse register response");
        TestSession { user, token }
    }
}

pub const TEST_PASSWORD: &str = "Placement#Ready2024";

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Ada Student".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Value of the `token` cookie set by the response, if any.
pub fn session_token(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?.trim();
            pair.strip_prefix("token=").map(str::to_string)
        })
}

pub fn set_cookie_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|cookie| cookie.starts_with("token="))
        .map(str::to_string)
}
