pub mod auth;
pub mod skills;
pub mod projects;
pub mod mock_tests;
pub mod certifications;
pub mod readiness;
pub mod extractors;
