use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status")]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// Free text, usually a comma separated stack ("Rust, Postgres").
    pub technologies: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 500, message = "Technologies must be between 1 and 500 characters"))]
    pub technologies: String,

    pub status: ProjectStatus,
}

impl NewProject {
    pub fn into_project(self, user_id: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            user_id,
            title: self.title.trim().to_string(),
            technologies: self.technologies.trim().to_string(),
            status: self.status,
            created_at: Utc::now(),
        }
    }
}
