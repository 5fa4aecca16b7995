use std::sync::Arc;

use crate::repositories::{
    certification::CertificationRepository,
    mock_test::MockTestRepository,
    project::ProjectRepository,
    skill::SkillRepository,
    sqlx_repo::{SqlxCertificationRepo, SqlxMockTestRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxUserRepo},
    user::UserRepository,
};


/// Persistence handles injected into the application state.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: Arc<dyn UserRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub mock_test_repo: Arc<dyn MockTestRepository>,
    pub certification_repo: Arc<dyn CertificationRepository>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            user_repo: Arc::new(SqlxUserRepo::new(pool.clone())),
            skill_repo: Arc::new(SqlxSkillRepo::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            mock_test_repo: Arc::new(SqlxMockTestRepo::new(pool.clone())),
            certification_repo: Arc::new(SqlxCertificationRepo::new(pool)),
        }
    }
}
