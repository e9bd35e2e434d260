pub mod contact;
pub mod health;
pub mod status;

/// Hard cap on unbounded list reads.
pub(crate) const LIST_LIMIT: i64 = 1000;

pub use contact::{create_contact_form, get_contact_form, list_contact_forms};
pub use health::{health_check, root};
pub use status::{create_status_check, list_status_checks};
