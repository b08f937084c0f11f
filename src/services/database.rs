use crate::config::MongoSettings;
use crate::error::AppError;
use mongodb::{
    bson::doc,
    options::{Acknowledgment, ClientOptions, WriteConcern},
    Client as MongoClient,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
}

impl MongoDb {
    /// Connects and verifies reachability with a `ping` round-trip.
    ///
    /// The driver constructs clients lazily, so a successful return here is
    /// the readiness gate: the server must have answered before the HTTP
    /// listener is allowed to bind.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, AppError> {
        tracing::info!(uri = %settings.uri, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&settings.uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string {}: {}", settings.uri, e);
            AppError::from(e)
        })?;
        options.write_concern = Some(
            WriteConcern::builder()
                .w(acknowledgment_from(&settings.write_concern))
                .build(),
        );
        options.retry_writes = Some(settings.retry_writes);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;

        let db = Self { client };
        db.health_check().await?;
        tracing::info!("Connected to MongoDB");
        Ok(db)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

fn acknowledgment_from(write_concern: &str) -> Acknowledgment {
    match write_concern {
        "majority" => Acknowledgment::Majority,
        other => Acknowledgment::Custom(other.to_string()),
    }
}
