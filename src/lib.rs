mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases, readiness, password};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, utils};

use auth::{cookie::SessionCookie, jwt::JwtService};
use repositories::{
    certification::CertificationRepository,
    mock_test::MockTestRepository,
    project::ProjectRepository,
    skill::SkillRepository,
    user::UserRepository,
};
use shared_repos::SharedRepositories;
use use_cases::{
    auth::AuthHandler,
    certifications::CertificationHandler,
    mock_tests::MockTestHandler,
    projects::ProjectHandler,
    readiness::ReadinessHandler,
    skills::SkillHandler,
};

pub type AppAuthHandler = AuthHandler<dyn UserRepository, JwtService>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub skill_handler: SkillHandler<dyn SkillRepository>,
    pub project_handler: ProjectHandler<dyn ProjectRepository>,
    pub mock_test_handler: MockTestHandler<dyn MockTestRepository>,
    pub certification_handler: CertificationHandler<dyn CertificationRepository>,
    pub readiness_handler: ReadinessHandler,
    pub session_cookie: SessionCookie,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, repos: SharedRepositories) -> Self {
        let auth_handler = AuthHandler::new(repos.user_repo, JwtService::new(config));
        let session_cookie = SessionCookie::new(config.cookie_secure, auth_handler.session_lifetime_secs());

        AppState {
            auth_handler,
            skill_handler: SkillHandler::new(repos.skill_repo.clone()),
            project_handler: ProjectHandler::new(repos.project_repo.clone()),
            mock_test_handler: MockTestHandler::new(repos.mock_test_repo.clone()),
            certification_handler: CertificationHandler::new(repos.certification_repo.clone()),
            readiness_handler: ReadinessHandler::new(
                repos.skill_repo,
                repos.project_repo,
                repos.mock_test_repo,
                repos.certification_repo,
            ),
            session_cookie,
        }
    }
}
