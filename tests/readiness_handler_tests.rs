
use std::sync::Arc;

use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use placement_iq::{
    entities::{
        certification::Certification,
        mock_test::MockTest,
        project::Project,
        readiness::ReadinessStatus,
        skill::Skill,
    },
    errors::AppError,
    readiness::ON_TRACK_MESSAGE,
    repositories::{
        certification::CertificationRepository,
        mock_test::MockTestRepository,
        project::ProjectRepository,
        skill::SkillRepository,
    },
    use_cases::readiness::ReadinessHandler,
};
use test_records::*;
use uuid::Uuid;

mock! {
    pub SkillRepo {}

    #[async_trait]
    impl SkillRepository for SkillRepo {
        async fn list_skills(&self, user_id: &Uuid) -> Result<Vec<Skill>, AppError>;
        async fn create_skill(&self, skill: &Skill) -> Result<Skill, AppError>;
        async fn delete_skill(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(&self, user_id: &Uuid) -> Result<Vec<Project>, AppError>;
        async fn create_project(&self, project: &Project) -> Result<Project, AppError>;
        async fn delete_project(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub MockTestRepo {}

    #[async_trait]
    impl MockTestRepository for MockTestRepo {
        async fn list_mock_tests(&self, user_id: &Uuid) -> Result<Vec<MockTest>, AppError>;
        async fn create_mock_test(&self, test: &MockTest) -> Result<MockTest, AppError>;
        async fn delete_mock_test(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub CertificationRepo {}

    #[async_trait]
    impl CertificationRepository for CertificationRepo {
        async fn list_certifications(&self, user_id: &Uuid) -> Result<Vec<Certification>, AppError>;
        async fn create_certification(&self, cert: &Certification) -> Result<Certification, AppError>;
        async fn delete_certification(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
    }
}

struct Repos {
    skills: MockSkillRepo,
    projects: MockProjectRepo,
    mock_tests: MockMockTestRepo,
    certifications: MockCertificationRepo,
}

impl Repos {
    fn new() -> Self {
        Repos {
            skills: MockSkillRepo::new(),
            projects: MockProjectRepo::new(),
            mock_tests: MockMockTestRepo::new(),
            certifications: MockCertificationRepo::new(),
        }
    }

    fn returning(
        user: Uuid,
        skills: Vec<Skill>,
        projects: Vec<Project>,
        mock_tests: Vec<MockTest>,
        certifications: Vec<Certification>,
    ) -> Self {
        let mut repos = Repos::new();
        repos.skills.expect_list_skills()
            .with(eq(user))
            .times(1)
            .return_once(move |_| Ok(skills));
        repos.projects.expect_list_projects()
            .with(eq(user))
            .times(1)
            .return_once(move |_| Ok(projects));
        repos.mock_tests.expect_list_mock_tests()
            .with(eq(user))
            .times(1)
            .return_once(move |_| Ok(mock_tests));
        repos.certifications.expect_list_certifications()
            .with(eq(user))
            .times(1)
            .return_once(move |_| Ok(certifications));
        repos
    }

    fn into_handler(self) -> ReadinessHandler {
        ReadinessHandler::new(
            Arc::new(self.skills),
            Arc::new(self.projects),
            Arc::new(self.mock_tests),
            Arc::new(self.certifications),
        )
    }
}

#[actix_rt::test]
async fn report_scores_records_from_every_repository() {
    let user = Uuid::new_v4();
    let handler = Repos::returning(
        user,
        skills(user, 5),
        projects(user, 2),
        vec![mock_test(user, 8, 10), mock_test(user, 6, 10)],
        certifications(user, 1),
    )
    .into_handler();

    let report = handler.report(&user).await.unwrap();

    assert_eq!(report.total_score, 48);
    assert_eq!(report.breakdown.skills, 15);
    assert_eq!(report.breakdown.projects, 10);
    assert_eq!(report.breakdown.mock_tests, 18);
    assert_eq!(report.breakdown.certifications, 5);
    assert_eq!(report.counts.mock_tests, 2);
}

#[actix_rt::test]
async fn summary_derives_status_and_suggestions() {
    let user = Uuid::new_v4();
    let handler = Repos::returning(
        user,
        skills(user, 10),
        projects(user, 5),
        vec![mock_test(user, 10, 10), mock_test(user, 9, 10)],
        certifications(user, 4),
    )
    .into_handler();

    let summary = handler.summary(&user).await.unwrap();

    assert_eq!(summary.report.total_score, 99);
    assert_eq!(summary.status, ReadinessStatus::High);
    assert_eq!(summary.suggestions, vec![ON_TRACK_MESSAGE.to_string()]);
}

#[actix_rt::test]
async fn repository_failure_is_propagated() {
    let user = Uuid::new_v4();
    let mut repos = Repos::new();
    repos.skills.expect_list_skills().returning(|_| Ok(Vec::new()));
    repos.projects.expect_list_projects().returning(|_| Ok(Vec::new()));
    repos.mock_tests.expect_list_mock_tests()
        .return_once(|_| Err(AppError::Internal("connection reset".to_string())));
    repos.certifications.expect_list_certifications().returning(|_| Ok(Vec::new()));

    let result = repos.into_handler().report(&user).await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "connection reset"));
}
