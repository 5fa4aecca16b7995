use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::project::Project, errors::AppError, repositories::sqlx_repo::SqlxProjectRepo};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, user_id: &Uuid) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, project: &Project) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, user_id: &Uuid) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT id, user_id, title, technologies, status, created_at
            FROM projects WHERE user_id = $1 ORDER BY created_at"#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(&self, project: &Project) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (id, user_id, title, technologies, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, technologies, status, created_at
            "#
        )
        .bind(project.id)
        .bind(project.user_id)
        .bind(&project.title)
        .bind(&project.technologies)
        .bind(project.status)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_project(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }
        Ok(())
    }
}
