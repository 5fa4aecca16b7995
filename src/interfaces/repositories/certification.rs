use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::certification::Certification, errors::AppError, repositories::sqlx_repo::SqlxCertificationRepo};

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list_certifications(&self, user_id: &Uuid) -> Result<Vec<Certification>, AppError>;
    async fn create_certification(&self, cert: &Certification) -> Result<Certification, AppError>;
    async fn delete_certification(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn list_certifications(&self, user_id: &Uuid) -> Result<Vec<Certification>, AppError> {
        let certs = sqlx::query_as::<_, Certification>(
            r#"SELECT id, user_id, name, platform, date, created_at
            FROM certifications WHERE user_id = $1 ORDER BY created_at"#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(certs)
    }

    async fn create_certification(&self, cert: &Certification) -> Result<Certification, AppError> {
        let created = sqlx::query_as::<_, Certification>(
            r#"
            INSERT INTO certifications (id, user_id, name, platform, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, platform, date, created_at
            "#
        )
        .bind(cert.id)
        .bind(cert.user_id)
        .bind(&cert.name)
        .bind(&cert.platform)
        .bind(cert.date)
        .bind(cert.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_certification(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certification not found".into()));
        }
        Ok(())
    }
}
