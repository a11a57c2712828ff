use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub time: DateTime<Utc>,
}
