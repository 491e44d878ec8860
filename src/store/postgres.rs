//! Postgres backend: documents as JSONB rows.
//!
//! DESIGN
//! ======
//! One `documents` table keyed by `(collection, id)`. A trigger publishes the
//! touched collection on the `folio_documents` channel after every write, and
//! [`spawn_listener`] forwards those notifications to the change broadcast,
//! so writes from any process reach every reader.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::PgListener;
use sqlx::types::Json;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{CHANGE_CHANNEL_CAPACITY, Collection, Document, DocumentStore, StoreError, sort_newest_first};

/// Notification channel written by the `documents_notify` trigger.
pub const NOTIFY_CHANNEL: &str = "folio_documents";
const LISTENER_ERROR_BACKOFF: Duration = Duration::from_secs(1);

pub struct PostgresStore {
    pool: PgPool,
    changes: broadcast::Sender<Collection>,
}

impl PostgresStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { pool, changes }
    }
}

/// Forward `NOTIFY folio_documents` payloads to the change broadcast.
pub fn spawn_listener(store: Arc<PostgresStore>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut listener = match PgListener::connect_with(&store.pool).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(error = %e, "document listener connect failed; change notification disabled");
                return;
            }
        };
        if let Err(e) = listener.listen(NOTIFY_CHANNEL).await {
            error!(error = %e, "document listener LISTEN failed; change notification disabled");
            return;
        }
        info!(channel = NOTIFY_CHANNEL, "document listener started");

        loop {
            match listener.recv().await {
                Ok(notification) => match Collection::parse(notification.payload()) {
                    Some(collection) => {
                        let _ = store.changes.send(collection);
                    }
                    None => warn!(payload = notification.payload(), "notification for unknown collection"),
                },
                Err(e) => {
                    // PgListener reconnects on the next recv.
                    warn!(error = %e, "document listener interrupted");
                    tokio::time::sleep(LISTENER_ERROR_BACKOFF).await;
                }
            }
        }
    })
}

#[async_trait::async_trait]
impl DocumentStore for PostgresStore {
    async fn query(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query_as::<_, (String, Json<Map<String, Value>>)>(
            "SELECT id, fields FROM documents WHERE collection = $1 ORDER BY fields->>'createdAt' DESC",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        let mut docs: Vec<Document> = rows
            .into_iter()
            .map(|(id, Json(fields))| Document { id, fields })
            .collect();
        // Text order is only an approximation when offsets or precision differ.
        sort_newest_first(&mut docs);
        Ok(docs)
    }

    async fn create(&self, collection: Collection, fields: Map<String, Value>) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        sqlx::query("INSERT INTO documents (collection, id, fields) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(&id)
            .bind(Json(fields))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, collection: Collection, id: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE documents SET fields = fields || $3 WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .bind(Json(fields))
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { collection, id: id.to_owned() });
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn changes(&self) -> broadcast::Receiver<Collection> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
