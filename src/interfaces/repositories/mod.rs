pub mod sqlx_repo;
pub mod user;
pub mod token;
pub mod skill;
pub mod project;
pub mod certification;
