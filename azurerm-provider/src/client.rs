//! Management API client boundary
//!
//! The provider only talks to Resource Manager through [`ManagementClient`].
//! Requests are addressed by parsed identifiers; the client renders them to
//! canonical strings and owns transport, retries and paging.

use std::collections::BTreeMap;

use async_trait::async_trait;
use azurerm_core::resource_id::{Identifier, MalformedIdentifierError, try_format};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors returned by a management client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API has no resource with this ID
    #[error("{0} was not found")]
    NotFound(String),

    /// The API rejected the request
    #[error("request to {id} failed with status {status}: {message}")]
    Request {
        id: String,
        status: u16,
        message: String,
    },

    /// The identifier could not be rendered to its canonical string
    #[error(transparent)]
    Identifier(#[from] MalformedIdentifierError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Resource Manager operations used by the provider
#[async_trait]
pub trait ManagementClient: Send + Sync {
    /// Fetch a resource body
    ///
    /// Returns `None` when the resource does not exist.
    async fn get(&self, id: &Identifier, api_version: &str) -> ClientResult<Option<JsonValue>>;

    /// PUT a resource body, returning the body the API stored
    async fn create_or_update(
        &self,
        id: &Identifier,
        api_version: &str,
        body: JsonValue,
    ) -> ClientResult<JsonValue>;

    /// Delete a resource. Fails with [`ClientError::NotFound`] when it does not exist.
    async fn delete(&self, id: &Identifier, api_version: &str) -> ClientResult<()>;

    /// List every child in `{parent}/{collection}`, following next links
    async fn list(
        &self,
        parent: &Identifier,
        collection: &str,
        api_version: &str,
    ) -> ClientResult<Vec<JsonValue>>;
}

/// Full request URL for an identifier, e.g.
/// `https://management.azure.com/subscriptions/.../endpoints/e1?api-version=2020-09-01`
pub fn request_url(endpoint: &str, id: &Identifier, api_version: &str) -> ClientResult<String> {
    Ok(format!(
        "{}{}?api-version={}",
        endpoint.trim_end_matches('/'),
        try_format(id)?,
        api_version
    ))
}

/// Client keeping resources in memory, keyed by canonical ID
///
/// Stored bodies get `id` and `name` filled in the way Resource Manager
/// returns them.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    resources: RwLock<BTreeMap<String, JsonValue>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a body directly, bypassing the API
    pub async fn insert(&self, id: &Identifier, body: JsonValue) -> ClientResult<()> {
        let key = try_format(id)?;
        let body = stamp(body, &key, id);
        self.resources.write().await.insert(key, body);
        Ok(())
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.resources.read().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

/// Last value segment of an identifier, which is the resource name
fn resource_name(id: &Identifier) -> Option<String> {
    id.values().last().map(|(_, value)| value.to_string())
}

fn stamp(mut body: JsonValue, key: &str, id: &Identifier) -> JsonValue {
    if let Some(object) = body.as_object_mut() {
        object.insert("id".to_string(), JsonValue::String(key.to_string()));
        if let Some(name) = resource_name(id) {
            object.insert("name".to_string(), JsonValue::String(name));
        }
    }
    body
}

#[async_trait]
impl ManagementClient for InMemoryClient {
    async fn get(&self, id: &Identifier, _api_version: &str) -> ClientResult<Option<JsonValue>> {
        let key = try_format(id)?;
        Ok(self.resources.read().await.get(&key).cloned())
    }

    async fn create_or_update(
        &self,
        id: &Identifier,
        _api_version: &str,
        body: JsonValue,
    ) -> ClientResult<JsonValue> {
        if !body.is_object() {
            return Err(ClientError::Request {
                id: id.to_string(),
                status: 400,
                message: "request body must be a JSON object".to_string(),
            });
        }
        let key = try_format(id)?;
        let body = stamp(body, &key, id);
        self.resources.write().await.insert(key, body.clone());
        Ok(body)
    }

    async fn delete(&self, id: &Identifier, _api_version: &str) -> ClientResult<()> {
        let key = try_format(id)?;
        match self.resources.write().await.remove(&key) {
            Some(_) => Ok(()),
            None => Err(ClientError::NotFound(key)),
        }
    }

    async fn list(
        &self,
        parent: &Identifier,
        collection: &str,
        _api_version: &str,
    ) -> ClientResult<Vec<JsonValue>> {
        let prefix = format!("{}/{}/", try_format(parent)?, collection);
        let resources = self.resources.read().await;
        Ok(resources
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .filter(|(key, _)| !key[prefix.len()..].contains('/'))
            .map(|(_, body)| body.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SqlManagedDatabaseId, SqlManagedInstanceId};
    use serde_json::json;

    fn instance() -> SqlManagedInstanceId {
        SqlManagedInstanceId::new("0000", "rg1", "mi1")
    }

    #[tokio::test]
    async fn put_then_get_stamps_id_and_name() {
        let client = InMemoryClient::new();
        let id = instance().database_id("db1").to_identifier();

        let stored = client
            .create_or_update(&id, "2023-08-01-preview", json!({"properties": {}}))
            .await
            .unwrap();
        assert_eq!(stored["name"], "db1");
        assert_eq!(stored["id"], id.to_string());

        let fetched = client.get(&id, "2023-08-01-preview").await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let client = InMemoryClient::new();
        let id = instance().to_identifier();
        assert_eq!(client.get(&id, "v").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let client = InMemoryClient::new();
        let err = client.delete(&instance().to_identifier(), "v").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_returns_direct_children_only() {
        let client = InMemoryClient::new();
        let instance = instance();
        for name in ["db1", "db2"] {
            client
                .insert(&instance.database_id(name).to_identifier(), json!({}))
                .await
                .unwrap();
        }
        let other = SqlManagedDatabaseId::new("0000", "rg1", "mi2", "db3");
        client.insert(&other.to_identifier(), json!({})).await.unwrap();

        let listed = client
            .list(&instance.to_identifier(), "databases", "v")
            .await
            .unwrap();
        let names: Vec<_> = listed.iter().map(|b| b["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["db1", "db2"]);
    }

    #[tokio::test]
    async fn body_must_be_an_object() {
        let client = InMemoryClient::new();
        let err = client
            .create_or_update(&instance().to_identifier(), "v", json!("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Request { status: 400, .. }));
    }

    #[test]
    fn request_url_joins_endpoint_and_id() {
        let id = instance().to_identifier();
        assert_eq!(
            request_url("https://management.azure.com/", &id, "2023-08-01-preview").unwrap(),
            "https://management.azure.com/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Sql/managedInstances/mi1?api-version=2023-08-01-preview"
        );
    }
}
