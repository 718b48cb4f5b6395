use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::server::{Model, NewServer};

use crate::errors::ServiceError;

/// Repository abstraction over server record storage.
///
/// Implementations perform no validation; callers must not rely on storage
/// order of `list`. Each call is a single atomic unit against the backing
/// store.
#[async_trait]
pub trait ServersRepository: Send + Sync {
    /// Full snapshot of all records.
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    /// Case-insensitive substring match on city; no match is an empty vec.
    async fn list_by_city(&self, city: &str) -> Result<Vec<Model>, ServiceError>;
    /// Case-insensitive substring match on name.
    async fn search(&self, name: &str) -> Result<Vec<Model>, ServiceError>;
    /// Persist a new record; storage assigns the id exactly once.
    async fn create(&self, server: NewServer) -> Result<Model, ServiceError>;
    /// Replace all mutable fields. Returns `false` (no-op) when `id` does
    /// not match the record's own identity or no such record exists.
    async fn update(&self, id: i32, server: &Model) -> Result<bool, ServiceError>;
    /// Remove the record; `false` when it was already absent.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServersRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServersRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServersRepository for SeaOrmServersRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        models::server::list(&self.db).await.map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        models::server::find_by_id(&self.db, id)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Model>, ServiceError> {
        models::server::filter_by_city(&self.db, city)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn search(&self, name: &str) -> Result<Vec<Model>, ServiceError> {
        models::server::search_by_name(&self.db, name)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn create(&self, server: NewServer) -> Result<Model, ServiceError> {
        models::server::insert(&self.db, server)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn update(&self, id: i32, server: &Model) -> Result<bool, ServiceError> {
        models::server::replace(&self.db, id, server)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        models::server::remove(&self.db, id)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

/// In-memory repository honoring the same contract; used by tests and as a
/// storage-free variant for demos.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryServersRepository {
        servers: Mutex<BTreeMap<i32, Model>>,
    }

    impl InMemoryServersRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed with existing records, keeping their ids.
        pub fn with_servers<I>(servers: I) -> Self
        where
            I: IntoIterator<Item = Model>,
        {
            let map = servers.into_iter().map(|s| (s.id, s)).collect();
            Self { servers: Mutex::new(map) }
        }
    }

    #[async_trait]
    impl ServersRepository for InMemoryServersRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            let map = self.servers.lock().unwrap();
            Ok(map.values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            let map = self.servers.lock().unwrap();
            Ok(map.get(&id).cloned())
        }

        async fn list_by_city(&self, city: &str) -> Result<Vec<Model>, ServiceError> {
            let needle = city.to_lowercase();
            let map = self.servers.lock().unwrap();
            Ok(map.values().filter(|s| s.city.to_lowercase().contains(&needle)).cloned().collect())
        }

        async fn search(&self, name: &str) -> Result<Vec<Model>, ServiceError> {
            let needle = name.to_lowercase();
            let map = self.servers.lock().unwrap();
            Ok(map.values().filter(|s| s.name.to_lowercase().contains(&needle)).cloned().collect())
        }

        async fn create(&self, server: NewServer) -> Result<Model, ServiceError> {
            let mut map = self.servers.lock().unwrap();
            let id = map.keys().next_back().map_or(1, |max| max + 1);
            let record = Model { id, name: server.name, city: server.city, is_online: server.is_online };
            map.insert(id, record.clone());
            Ok(record)
        }

        async fn update(&self, id: i32, server: &Model) -> Result<bool, ServiceError> {
            if id != server.id {
                return Ok(false);
            }
            let mut map = self.servers.lock().unwrap();
            let Some(existing) = map.get_mut(&id) else {
                return Ok(false);
            };
            existing.name = server.name.clone();
            existing.city = server.city.clone();
            existing.is_online = server.is_online;
            Ok(true)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut map = self.servers.lock().unwrap();
            Ok(map.remove(&id).is_some())
        }
    }

}
