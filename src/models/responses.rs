use serde::{Deserialize, Serialize};

/// Rendered dashboard as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub sections: Vec<SectionResponse>,
}

/// One rendered container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResponse {
    pub id: String,
    pub status: String,
    pub items: usize,
    pub generated_at: Option<String>,
    pub html: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
