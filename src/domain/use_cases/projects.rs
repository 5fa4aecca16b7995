use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
};


pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn list_projects(&self, user_id: &Uuid) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(user_id).await
    }

    pub async fn add_project(&self, user_id: Uuid, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        let project = request.into_project(user_id);
        self.project_repo.create_project(&project).await
    }

    pub async fn delete_project(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        self.project_repo.delete_project(id, user_id).await
    }
}
