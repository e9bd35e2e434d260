use crate::models::{ContactForm, StatusCheck};
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// Connection handle to the document store. Acquired once at startup and
/// cloned into every request; the driver manages the underlying pool.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    pub fn contact_forms(&self) -> Collection<ContactForm> {
        self.db.collection("contact_forms")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
