use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::certification::{Certification, NewCertification},
    errors::AppError,
    repositories::certification::CertificationRepository,
};


pub struct CertificationHandler<R>
where
    R: CertificationRepository + ?Sized,
{
    pub certification_repo: Arc<R>,
}

impl<R> CertificationHandler<R>
where
    R: CertificationRepository + ?Sized,
{
    pub fn new(certification_repo: Arc<R>) -> Self {
        CertificationHandler { certification_repo }
    }

    pub async fn list_certifications(&self, user_id: &Uuid) -> Result<Vec<Certification>, AppError> {
        self.certification_repo.list_certifications(user_id).await
    }

    pub async fn add_certification(
        &self,
        user_id: Uuid,
        request: NewCertification
    ) -> Result<Certification, AppError> {
        request.validate()?;

        let cert = request.into_certification(user_id);
        self.certification_repo.create_certification(&cert).await
    }

    pub async fn delete_certification(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        self.certification_repo.delete_certification(id, user_id).await
    }
}
