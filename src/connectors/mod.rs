//! External service connectors.
//!
//! Adapters for the downstream collaborators (model backend, file service).
//! All outbound HTTP goes through a connector trait so routes and the
//! orchestrator never depend on transport details, and tests can stand up
//! doubles behind the same interface.

pub mod config;
pub mod errors;
pub mod file_service;
pub mod model_service;

pub use config::{ConnectorConfig, FileServiceConfig, ModelServiceConfig};
pub use errors::ConnectorError;
pub use file_service::{FileServiceClient, FileServiceConnector, SessionFile};
pub use model_service::{ModelReply, ModelServiceClient, ModelServiceConnector};
