//! HTTP+JSON repository variant for a remote server store.
//!
//! Resource conventions: the collection lives at `{base}/servers`, each item
//! at `{base}/servers/{id}`. Create and update PUT the full representation at
//! its id; delete removes the id path. The remote store exposes no query
//! surface, so city and name filters are evaluated over the listed snapshot.

use async_trait::async_trait;
use reqwest::StatusCode;

use models::server::{Model, NewServer};

use crate::errors::ServiceError;
use crate::servers::repository::ServersRepository;

pub struct HttpServersRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpServersRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/servers", self.base_url)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}/servers/{}", self.base_url, id)
    }

    async fn fetch_all(&self) -> Result<Vec<Model>, ServiceError> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        resp.json().await.map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

/// Next free id over a listed snapshot; ids start at 1.
fn next_id(servers: &[Model]) -> i32 {
    servers.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl ServersRepository for HttpServersRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.fetch_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        let resp = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status().map_err(|e| ServiceError::Storage(e.to_string()))?;
        let server = resp.json().await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(Some(server))
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Model>, ServiceError> {
        let needle = city.to_lowercase();
        let servers = self.fetch_all().await?;
        Ok(servers.into_iter().filter(|s| s.city.to_lowercase().contains(&needle)).collect())
    }

    async fn search(&self, name: &str) -> Result<Vec<Model>, ServiceError> {
        let needle = name.to_lowercase();
        let servers = self.fetch_all().await?;
        Ok(servers.into_iter().filter(|s| s.name.to_lowercase().contains(&needle)).collect())
    }

    async fn create(&self, server: NewServer) -> Result<Model, ServiceError> {
        let snapshot = self.fetch_all().await?;
        let record = Model {
            id: next_id(&snapshot),
            name: server.name,
            city: server.city,
            is_online: server.is_online,
        };
        self.client
            .put(self.item_url(record.id))
            .json(&record)
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(record)
    }

    async fn update(&self, id: i32, server: &Model) -> Result<bool, ServiceError> {
        if id != server.id {
            return Ok(false);
        }
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.client
            .put(self.item_url(id))
            .json(server)
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let resp = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        resp.error_for_status().map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32) -> Model {
        Model { id, name: format!("Server{id}"), city: "Toronto".into(), is_online: true }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&[record(3), record(7), record(2)]), 8);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let repo = HttpServersRepository::new("http://stores.example/api/");
        assert_eq!(repo.collection_url(), "http://stores.example/api/servers");
        assert_eq!(repo.item_url(4), "http://stores.example/api/servers/4");
    }
}
