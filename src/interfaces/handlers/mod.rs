pub mod auth;
pub mod skills;
pub mod projects;
pub mod certifications;
pub mod stats;
pub mod home;
pub mod system;
