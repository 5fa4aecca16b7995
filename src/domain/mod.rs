pub mod entities;
pub mod use_cases;
pub mod password;
pub mod readiness;
