pub mod contact_form;
pub mod status_check;

pub use contact_form::{ContactForm, SubmissionStatus};
pub use status_check::StatusCheck;
