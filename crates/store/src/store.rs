use crate::error::{Result, StoreError};
use crate::remote::{Entity, RemoteCollection};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// In-memory collection for one entity type, kept consistent with a remote
/// store under confirm-then-apply mutation.
///
/// The snapshot is the single shared mutable resource of the console; it is
/// mutated only by the operations below, each of which replaces it in one
/// step. Callers hold no copies across mutations and re-read after every
/// operation. Every remote call is attempted exactly once; re-trying is the
/// caller's decision.
pub struct EntityStore<E: Entity> {
    remote: Box<dyn RemoteCollection>,
    snapshot: Vec<E>,
}

impl<E: Entity> EntityStore<E> {
    pub fn new(remote: Box<dyn RemoteCollection>) -> Self {
        Self {
            remote,
            snapshot: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &[E] {
        &self.snapshot
    }

    pub fn get(&self, id: Uuid) -> Option<&E> {
        self.snapshot.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Replace the snapshot with the full remote collection.
    ///
    /// On failure the snapshot is cleared, not kept: stale data must never
    /// mask a permission or connectivity problem.
    pub async fn load(&mut self) -> Result<()> {
        match self.remote.list().await {
            Ok(value) => {
                self.snapshot = decode_collection(value);
                tracing::info!(kind = E::kind(), count = self.snapshot.len(), "loaded");
                Ok(())
            }
            Err(err) => {
                self.snapshot.clear();
                tracing::error!(kind = E::kind(), error = %err, "load failed");
                Err(err)
            }
        }
    }

    /// Create a record remotely and prepend it to the snapshot (newest
    /// first). The snapshot is untouched on failure.
    pub async fn create<P: Serialize>(&mut self, payload: &P) -> Result<E> {
        let body = to_value(payload)?;
        let response = self.remote.create(body).await?;
        let entity: E = serde_json::from_value(response)
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        self.snapshot.insert(0, entity.clone());
        tracing::info!(kind = E::kind(), id = %entity.id(), "created");
        Ok(entity)
    }

    /// Patch a record remotely and merge the response over the local copy.
    ///
    /// Fields absent from the response keep their prior local values. The
    /// snapshot is untouched on failure.
    pub async fn update<P: Serialize>(&mut self, id: Uuid, patch: &P) -> Result<E> {
        let body = to_value(patch)?;
        let response = self.remote.update(id, body).await?;
        self.absorb_by_id(id, response)
    }

    /// Delete a record remotely, then evict it locally.
    ///
    /// Never optimistic: the record leaves the snapshot only after the
    /// remote call confirmed, so the UI cannot show a deletion that did
    /// not commit.
    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        self.remote.remove(id).await?;
        self.snapshot.retain(|e| e.id() != id);
        tracing::info!(kind = E::kind(), %id, "removed");
        Ok(())
    }

    /// Merge a server-returned record into the snapshot by identity.
    ///
    /// Used for confirmed side-channel mutations (e.g. the add-member
    /// endpoint returns the updated team). Same merge semantics as
    /// [`update`](Self::update).
    pub fn absorb(&mut self, record: Value) -> Result<E> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| StoreError::Decode("record without an id".to_string()))?;
        self.absorb_by_id(id, record)
    }

    fn absorb_by_id(&mut self, id: Uuid, record: Value) -> Result<E> {
        let position = self
            .snapshot
            .iter()
            .position(|e| e.id() == id)
            .ok_or(StoreError::NotFound {
                kind: E::kind(),
                id,
            })?;

        let merged = merge_record(&self.snapshot[position], &record)?;
        self.snapshot[position] = merged.clone();
        tracing::info!(kind = E::kind(), %id, "updated");
        Ok(merged)
    }
}

/// Decode a list response, tolerating junk: a non-array response is an
/// empty collection, and undecodable elements are dropped.
fn decode_collection<E: Entity>(value: Value) -> Vec<E> {
    let Value::Array(items) = value else {
        if !value.is_null() {
            tracing::warn!(kind = E::kind(), "non-array list response, treating as empty");
        }
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<E>(item) {
            Ok(entity) => Some(entity),
            Err(err) => {
                tracing::warn!(kind = E::kind(), error = %err, "dropping undecodable record");
                None
            }
        })
        .collect()
}

/// Overlay the keys of a partial response onto the prior record.
fn merge_record<E: Entity>(prior: &E, patch: &Value) -> Result<E> {
    let mut base =
        serde_json::to_value(prior).map_err(|e| StoreError::Decode(e.to_string()))?;

    match patch {
        Value::Object(fields) => {
            if let Value::Object(map) = &mut base {
                for (key, value) in fields {
                    map.insert(key.clone(), value.clone());
                }
            }
        }
        // Empty response body: the remote confirmed but returned nothing.
        Value::Null => {}
        other => {
            return Err(StoreError::Decode(format!(
                "expected object or null, got {other}"
            )))
        }
    }

    serde_json::from_value(base).map_err(|e| StoreError::Decode(e.to_string()))
}

fn to_value<P: Serialize>(payload: &P) -> Result<Value> {
    serde_json::to_value(payload).map_err(|e| StoreError::Decode(e.to_string()))
}
