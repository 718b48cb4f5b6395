use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use models::server::{Model, NewServer};

use crate::errors::ServiceError;
use crate::servers::repository::ServersRepository;

/// Most suggestions returned for a single name filter.
const SUGGESTION_LIMIT: usize = 10;

/// Validation gate in front of the repository; the single point through
/// which all server mutations pass. Invalid arguments fail before any
/// storage access; repository failures are logged and propagated unchanged.
pub struct ServerService<R: ServersRepository> {
    repo: Arc<R>,
}

fn require_non_blank(value: &str, what: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{what} cannot be empty")));
    }
    Ok(())
}

fn require_positive_id(id: i32) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::validation("id must be greater than 0"));
    }
    Ok(())
}

impl<R: ServersRepository> ServerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_servers(&self) -> Result<Vec<Model>, ServiceError> {
        match self.repo.list().await {
            Ok(servers) => {
                info!(count = servers.len(), "retrieved servers");
                Ok(servers)
            }
            Err(e) => {
                error!(error = %e, "error retrieving servers");
                Err(e)
            }
        }
    }

    pub async fn get_servers_by_city(&self, city: &str) -> Result<Vec<Model>, ServiceError> {
        require_non_blank(city, "city name")?;
        match self.repo.list_by_city(city).await {
            Ok(servers) => {
                info!(count = servers.len(), city, "retrieved servers by city");
                Ok(servers)
            }
            Err(e) => {
                error!(error = %e, city, "error retrieving servers by city");
                Err(e)
            }
        }
    }

    pub async fn get_server_by_id(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        require_positive_id(id)?;
        match self.repo.get_by_id(id).await {
            Ok(Some(server)) => {
                info!(id, name = %server.name, "retrieved server");
                Ok(Some(server))
            }
            Ok(None) => {
                warn!(id, "server not found");
                Ok(None)
            }
            Err(e) => {
                error!(error = %e, id, "error retrieving server");
                Err(e)
            }
        }
    }

    /// Validate and persist a new server.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::servers::repository::memory::InMemoryServersRepository;
    /// use service::servers::service::ServerService;
    /// use models::server::NewServer;
    /// let svc = ServerService::new(Arc::new(InMemoryServersRepository::new()));
    /// let input = NewServer { name: "Web01".into(), city: "Toronto".into(), is_online: true };
    /// let created = tokio_test::block_on(svc.add_server(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, server), fields(name = %server.name, city = %server.city))]
    pub async fn add_server(&self, server: NewServer) -> Result<Model, ServiceError> {
        require_non_blank(&server.name, "server name")?;
        require_non_blank(&server.city, "city")?;
        match self.repo.create(server).await {
            Ok(created) => {
                info!(id = created.id, "added new server");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "error adding server");
                Err(e)
            }
        }
    }

    /// Replace the record identified by `id`. An identity mismatch or an
    /// absent record is reported as `Ok(false)`, never an error.
    #[instrument(skip(self, server), fields(name = %server.name))]
    pub async fn update_server(&self, id: i32, server: &Model) -> Result<bool, ServiceError> {
        require_non_blank(&server.name, "server name")?;
        match self.repo.update(id, server).await {
            Ok(applied) => {
                if applied {
                    info!(id, "updated server");
                } else {
                    warn!(id, server_id = server.id, "update skipped; identity mismatch or absent");
                }
                Ok(applied)
            }
            Err(e) => {
                error!(error = %e, id, "error updating server");
                Err(e)
            }
        }
    }

    /// Delete by id. Deleting an absent id is reported as `Ok(false)`.
    #[instrument(skip(self))]
    pub async fn delete_server(&self, id: i32) -> Result<bool, ServiceError> {
        require_positive_id(id)?;
        match self.repo.delete(id).await {
            Ok(applied) => {
                if applied {
                    info!(id, "deleted server");
                } else {
                    warn!(id, "delete skipped; server absent");
                }
                Ok(applied)
            }
            Err(e) => {
                error!(error = %e, id, "error deleting server");
                Err(e)
            }
        }
    }

    /// Name search. A blank filter returns an empty list without touching
    /// the repository.
    pub async fn search_servers(&self, filter: &str) -> Result<Vec<Model>, ServiceError> {
        if filter.trim().is_empty() {
            warn!("search filter is empty");
            return Ok(Vec::new());
        }
        match self.repo.search(filter).await {
            Ok(servers) => {
                info!(count = servers.len(), filter, "searched servers");
                Ok(servers)
            }
            Err(e) => {
                error!(error = %e, filter, "error searching servers");
                Err(e)
            }
        }
    }

    /// Name suggestions for typeahead: sorted, capped, empty for a blank
    /// filter.
    pub async fn suggest_server_names(&self, filter: &str) -> Result<Vec<String>, ServiceError> {
        if filter.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> =
            self.repo.search(filter).await?.into_iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        names.truncate(SUGGESTION_LIMIT);
        Ok(names)
    }
}
