use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle marker on a submission. No endpoint transitions it, so a
/// stored record stays `pending`; the enum pins the wire value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
}

/// A contact-form submission. Append-only, like [`StatusCheck`].
///
/// `amount` is accepted as-is: zero and negative values are valid input.
///
/// [`StatusCheck`]: crate::models::StatusCheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub amount: f64,
    pub message: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn new(
        name: String,
        email: Option<String>,
        phone: String,
        amount: f64,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            amount,
            message,
            timestamp: Utc::now(),
            status: SubmissionStatus::Pending,
        }
    }
}
