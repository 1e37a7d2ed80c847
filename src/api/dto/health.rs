//! DTOs for service status endpoints.

use serde::Serialize;

/// Static status returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
