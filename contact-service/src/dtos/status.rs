use crate::models::StatusCheck;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusCheck {
    pub client_name: String,
}

#[derive(Debug, Serialize)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(record: StatusCheck) -> Self {
        Self {
            id: record.id,
            client_name: record.client_name,
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}
