use crate::dtos::HealthDTO;
use axum::Json;

/// Liveness: non tocca il database
pub async fn health_check() -> Json<HealthDTO> {
    Json(HealthDTO::now())
}
