use crate::domain::types::{DataEnvelope, HealthResponse};
use axum::Json;

/// `GET /api/v0/health`
pub async fn health() -> Json<DataEnvelope<HealthResponse>> {
    Json(DataEnvelope::new(HealthResponse::pass()))
}
