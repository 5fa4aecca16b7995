use actix_web::web;

use crate::handlers::{certifications, mock_tests, projects, skills, stats};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(skills::list_skills)
            .service(skills::add_skill)
            .service(skills::delete_skill)
    )
    .service(
        web::scope("/projects")
            .service(projects::list_projects)
            .service(projects::add_project)
            .service(projects::delete_project)
    )
    .service(
        web::scope("/mock-tests")
            .service(mock_tests::list_mock_tests)
            .service(mock_tests::add_mock_test)
            .service(mock_tests::delete_mock_test)
    )
    .service(
        web::scope("/certifications")
            .service(certifications::list_certifications)
            .service(certifications::add_certification)
            .service(certifications::delete_certification)
    )
    .service(stats::stats)
    .service(stats::readiness);
}
