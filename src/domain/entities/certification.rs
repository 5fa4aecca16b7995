use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub platform: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewCertification {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Platform must be between 1 and 200 characters"))]
    pub platform: String,

    pub date: NaiveDate,
}

impl NewCertification {
    pub fn into_certification(self, user_id: Uuid) -> Certification {
        Certification {
            id: Uuid::new_v4(),
            user_id,
            name: self.name.trim().to_string(),
            platform: self.platform.trim().to_string(),
            date: self.date,
            created_at: Utc::now(),
        }
    }
}
