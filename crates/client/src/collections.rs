use crate::client::ApiClient;
use crate::error::Result;
use admin_models::{AddTeamMember, UserRef};
use admin_store::{RemoteCollection, Result as StoreResult, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// One REST collection (`/organizations`, `/teams`, `/users`) wired into
/// the store's [`RemoteCollection`] seam.
#[derive(Clone)]
pub struct Collection {
    client: ApiClient,
    base: &'static str,
}

impl ApiClient {
    pub fn organizations(&self) -> Collection {
        Collection {
            client: self.clone(),
            base: "/organizations",
        }
    }

    pub fn teams(&self) -> Collection {
        Collection {
            client: self.clone(),
            base: "/teams",
        }
    }

    /// Role-scoped server-side: all users for super admins, the caller's
    /// organization otherwise.
    pub fn users(&self) -> Collection {
        Collection {
            client: self.clone(),
            base: "/users",
        }
    }

    /// Member roster for one organization. Same defensive posture as the
    /// list endpoints: a non-array response is an empty roster.
    pub async fn organization_members(&self, organization_id: Uuid) -> Result<Vec<UserRef>> {
        let value = self
            .get(&format!("/organizations/{organization_id}/members"))
            .await?;

        let Value::Array(items) = value else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }

    /// Add a user to a team; the response is the updated team record.
    pub async fn add_team_member(&self, team_id: Uuid, payload: &AddTeamMember) -> Result<Value> {
        let body = serde_json::to_value(payload)
            .map_err(|e| crate::error::ApiError::Decode(e.to_string()))?;
        self.post(&format!("/teams/{team_id}/members"), &body).await
    }
}

#[async_trait]
impl RemoteCollection for Collection {
    async fn list(&self) -> StoreResult<Value> {
        self.client.get(self.base).await.map_err(StoreError::from)
    }

    async fn create(&self, payload: Value) -> StoreResult<Value> {
        self.client
            .post(self.base, &payload)
            .await
            .map_err(StoreError::from)
    }

    async fn update(&self, id: Uuid, patch: Value) -> StoreResult<Value> {
        self.client
            .patch(&format!("{}/{id}", self.base), &patch)
            .await
            .map_err(StoreError::from)
    }

    async fn remove(&self, id: Uuid) -> StoreResult<()> {
        self.client
            .delete(&format!("{}/{id}", self.base))
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }
}
