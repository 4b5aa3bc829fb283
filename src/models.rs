use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for page endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageResponse {
    pub page: String,
}
