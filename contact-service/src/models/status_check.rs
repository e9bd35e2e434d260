use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A liveness ping recorded by a client. Append-only: nothing in the
/// service updates or deletes one after the insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Single construction site: `id` and `timestamp` are generated here,
    /// once per create operation, and are immutable afterwards.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCheck;
    use uuid::Uuid;

    #[test]
    fn new_generates_unique_ids() {
        let a = StatusCheck::new("client-a".to_string());
        let b = StatusCheck::new("client-a".to_string());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
