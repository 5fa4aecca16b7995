use std::sync::Arc;

use uuid::Uuid;

use crate::{
    entities::{
        certification::Certification,
        mock_test::MockTest,
        project::Project,
        readiness::{ReadinessReport, ReadinessSummary},
        skill::Skill,
    },
    errors::AppError,
    readiness::compute_readiness,
    repositories::{
        certification::CertificationRepository,
        mock_test::MockTestRepository,
        project::ProjectRepository,
        skill::SkillRepository,
    },
};

/// Everything one user has recorded, as loaded for scoring.
#[derive(Debug, Clone, Default)]
pub struct UserRecords {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub mock_tests: Vec<MockTest>,
    pub certifications: Vec<Certification>,
}

impl UserRecords {
    pub fn readiness(&self) -> ReadinessReport {
        compute_readiness(&self.skills, &self.projects, &self.mock_tests, &self.certifications)
    }
}

/// Loads a user's records and scores them.
pub struct ReadinessHandler {
    pub skill_repo: Arc<dyn SkillRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub mock_test_repo: Arc<dyn MockTestRepository>,
    pub certification_repo: Arc<dyn CertificationRepository>,
}

impl ReadinessHandler {
    pub fn new(
        skill_repo: Arc<dyn SkillRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        mock_test_repo: Arc<dyn MockTestRepository>,
        certification_repo: Arc<dyn CertificationRepository>,
    ) -> Self {
        ReadinessHandler {
            skill_repo,
            project_repo,
            mock_test_repo,
            certification_repo,
        }
    }

    pub async fn load_records(&self, user_id: &Uuid) -> Result<UserRecords, AppError> {
        let (skills, projects, mock_tests, certifications) = futures::try_join!(
            self.skill_repo.list_skills(user_id),
            self.project_repo.list_projects(user_id),
            self.mock_test_repo.list_mock_tests(user_id),
            self.certification_repo.list_certifications(user_id),
        )?;

        Ok(UserRecords { skills, projects, mock_tests, certifications })
    }

    pub async fn report(&self, user_id: &Uuid) -> Result<ReadinessReport, AppError> {
        let records = self.load_records(user_id).await?;
        let report = records.readiness();

        tracing::debug!(
            user_id = %user_id,
            total_score = report.total_score,
            "Computed readiness score"
        );
        Ok(report)
    }

    pub async fn summary(&self, user_id: &Uuid) -> Result<ReadinessSummary, AppError> {
        let summary = ReadinessSummary::from(self.report(user_id).await?);
        tracing::debug!(user_id = %user_id, status = summary.status.label(), "Readiness status");
        Ok(summary)
    }
}
