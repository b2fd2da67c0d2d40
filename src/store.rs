use futures::TryStreamExt;
use mongodb::{bson::Document, error::Error, Client, Collection};
use tracing::debug;

use crate::config::AppConfig;

pub const PRODUCTS_COLLECTION: &str = "products";

/// Access to the product collection.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    async fn count(&self) -> Result<u64, Error>;

    async fn insert_many(&self, documents: Vec<Document>) -> Result<(), Error>;

    /// Every document, in whatever order the database returns them.
    async fn find_all(&self) -> Result<Vec<Document>, Error>;
}

pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(config: &AppConfig) -> Result<Self, Error> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let database = client.database(&config.database_name);

        debug!(
            "Using database {} collection {}",
            config.database_name, PRODUCTS_COLLECTION
        );

        Ok(MongoStore {
            collection: database.collection(PRODUCTS_COLLECTION),
        })
    }
}

impl ProductStore for MongoStore {
    async fn count(&self) -> Result<u64, Error> {
        self.collection.count_documents(None, None).await
    }

    async fn insert_many(&self, documents: Vec<Document>) -> Result<(), Error> {
        self.collection.insert_many(documents, None).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, Error> {
        let cursor = self.collection.find(None, None).await?;
        cursor.try_collect().await
    }
}
