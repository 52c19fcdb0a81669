pub mod chat;
pub mod files;
pub mod health_checks;
pub mod status;

pub use health_checks::*;
