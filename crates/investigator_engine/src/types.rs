use investigator_core::{InvestigationError, InvestigationResult};
use serde::Deserialize;

/// Body of the service's `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    InvestigationCompleted(Result<InvestigationResult, InvestigationError>),
    HealthChecked(Result<HealthStatus, InvestigationError>),
}
