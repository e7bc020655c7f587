use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// A record type managed by an [`EntityStore`](crate::EntityStore).
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Entity-type label for log lines and not-found errors.
    fn kind() -> &'static str;
}

/// One remote CRUD collection, REST-style.
///
/// Payloads and responses cross this boundary as raw JSON so a single
/// object-safe trait covers every entity type; the store owns decoding
/// and treats malformed responses defensively.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch the full role-scoped collection.
    async fn list(&self) -> Result<Value>;

    /// Create a record; the response is the server-assigned snapshot.
    async fn create(&self, payload: Value) -> Result<Value>;

    /// Patch a record; the response may be a partial document.
    async fn update(&self, id: Uuid, patch: Value) -> Result<Value>;

    /// Delete a record. Success is the only signal the store acts on.
    async fn remove(&self, id: Uuid) -> Result<()>;
}
