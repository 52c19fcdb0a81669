pub mod context;
pub mod extractor;
pub mod orchestrator;

pub use orchestrator::{ChatOrchestrator, ChatOutcome};
