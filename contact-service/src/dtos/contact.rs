use crate::models::{ContactForm, SubmissionStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Presence-only validation: required fields must be present with the
/// right type, but empty strings and negative amounts are accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactForm {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub amount: f64,
    pub message: Option<String>,
}

/// Optional fields serialize as `null` when absent, never omitted.
#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub amount: f64,
    pub message: Option<String>,
    pub timestamp: String,
    pub status: SubmissionStatus,
}

impl From<ContactForm> for ContactFormResponse {
    fn from(record: ContactForm) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            amount: record.amount,
            message: record.message,
            timestamp: record.timestamp.to_rfc3339(),
            status: record.status,
        }
    }
}
