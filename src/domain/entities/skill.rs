use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, max = 100, message = "Skill name must be between 1 and 100 characters"))]
    pub name: String,

    pub level: SkillLevel,
}

impl NewSkill {
    pub fn into_skill(self, user_id: Uuid) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            user_id,
            name: self.name.trim().to_string(),
            level: self.level,
            created_at: Utc::now(),
        }
    }
}
