pub mod user;
pub mod token;
pub mod skill;
pub mod project;
pub mod mock_test;
pub mod certification;
pub mod readiness;
