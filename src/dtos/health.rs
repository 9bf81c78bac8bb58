//! Health DTO - Risposta dell'endpoint di liveness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthDTO {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthDTO {
    pub fn now() -> Self {
        Self {
            message: "API is running successfully".to_string(),
            timestamp: Utc::now(),
        }
    }
}
