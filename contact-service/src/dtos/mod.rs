pub mod contact;
pub mod status;

pub use contact::{ContactFormResponse, CreateContactForm};
pub use status::{CreateStatusCheck, StatusCheckResponse};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
