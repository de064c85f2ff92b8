use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use ott_query::ReportQuery;
use tracing::{error, info};

use crate::error::SourceError;
use crate::source::DocumentSource;

enum Connection {
    Ready(Database),
    Failed(String),
}

/// MongoDB-backed source holding the process-wide database handle.
pub struct MongoSource {
    connection: Connection,
}

impl MongoSource {
    /// Open the database once and report the outcome.
    ///
    /// Returns as soon as the client exists; the startup ping runs in the
    /// background and only logs. If no client can be built, every later
    /// operation returns `SourceError::Unavailable`. Otherwise operations
    /// surface the driver's error until the server answers.
    pub async fn connect(uri: &str, database: &str) -> Self {
        let client = match Client::with_uri_str(uri).await {
            Ok(client) => client,
            Err(e) => {
                error!(database, error = %e, "failed to connect to document database");
                return Self {
                    connection: Connection::Failed(e.to_string()),
                };
            }
        };

        let db = client.database(database);
        tokio::spawn(ping(db.clone()));

        Self {
            connection: Connection::Ready(db),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.connection, Connection::Ready(_))
    }

    fn database(&self) -> Result<&Database, SourceError> {
        match &self.connection {
            Connection::Ready(db) => Ok(db),
            Connection::Failed(msg) => Err(SourceError::Unavailable(msg.clone())),
        }
    }
}

async fn ping(db: Database) {
    let database = db.name();
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!(database, "connected to document database"),
        Err(e) => error!(database, error = %e, "failed to connect to document database"),
    }
}

impl DocumentSource for MongoSource {
    async fn find_one(&self, collection: &str) -> Result<Option<Document>, SourceError> {
        let coll = self.database()?.collection::<Document>(collection);
        Ok(coll.find_one(doc! {}).await?)
    }

    async fn find(
        &self,
        collection: &str,
        query: &ReportQuery,
    ) -> Result<Vec<Document>, SourceError> {
        let coll = self.database()?.collection::<Document>(collection);

        let mut find = coll.find(query.filter.clone());
        if let Some(projection) = &query.projection {
            find = find.projection(projection.clone());
        }

        let cursor = find.await?;
        Ok(cursor.try_collect().await?)
    }
}
