use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::skill::{NewSkill, Skill},
    errors::AppError,
    repositories::skill::SkillRepository,
};


pub struct SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub skill_repo: Arc<R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills(user_id).await
    }

    /// Validates and stores a skill for the given user
    pub async fn add_skill(&self, user_id: Uuid, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;

        let skill = request.into_skill(user_id);
        self.skill_repo.create_skill(&skill).await
    }

    pub async fn delete_skill(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id, user_id).await
    }
}
