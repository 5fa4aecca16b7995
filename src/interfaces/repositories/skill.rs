use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::skill::Skill, errors::AppError, repositories::sqlx_repo::SqlxSkillRepo};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, skill: &Skill) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, user_id, name, level, created_at
            FROM skills WHERE user_id = $1 ORDER BY created_at"#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: &Skill) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (id, user_id, name, level, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, level, created_at
            "#
        )
        .bind(skill.id)
        .bind(skill.user_id)
        .bind(&skill.name)
        .bind(skill.level)
        .bind(skill.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_skill(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".into()));
        }
        Ok(())
    }
}
