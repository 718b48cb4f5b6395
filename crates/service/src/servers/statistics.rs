use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{error, info, warn};

use models::city_order::CityOrder;
use models::statistics::{CityStatistics, ServerStatistics};

use crate::servers::repository::ServersRepository;
use crate::servers::service::ServerService;

/// Recomputes fleet health statistics from the current server set on every
/// call. Fetch failures and an empty fleet both yield `None`; the dashboard
/// degrades to "no data" instead of crashing.
pub struct StatisticsService<R: ServersRepository> {
    servers: Arc<ServerService<R>>,
    order: CityOrder,
}

impl<R: ServersRepository> StatisticsService<R> {
    pub fn new(servers: Arc<ServerService<R>>, order: CityOrder) -> Self {
        Self { servers, order }
    }

    pub async fn compute_statistics(&self) -> Option<ServerStatistics> {
        let servers = match self.servers.get_servers().await {
            Ok(servers) => servers,
            Err(e) => {
                error!(error = %e, "error loading server statistics");
                return None;
            }
        };
        if servers.is_empty() {
            warn!("no servers found in the system");
            return None;
        }

        // Group by city in first-seen order, then apply the canonical order
        // so unknown cities trail deterministically.
        let mut cities: IndexMap<String, CityStatistics> = IndexMap::new();
        for server in &servers {
            let entry = cities
                .entry(server.city.clone())
                .or_insert_with(|| CityStatistics::new(server.city.clone()));
            entry.total_count += 1;
            if server.is_online {
                entry.online_count += 1;
            } else {
                entry.offline_count += 1;
            }
        }
        let cities = self.order.sort_map(cities);

        let total_count = servers.len();
        let online_count = servers.iter().filter(|s| s.is_online).count();
        let offline_count = total_count - online_count;

        info!(
            total = total_count,
            online = online_count,
            offline = offline_count,
            city_count = cities.len(),
            "statistics calculated"
        );

        Some(ServerStatistics {
            total_count,
            online_count,
            offline_count,
            online_percentage: online_count as f64 / total_count as f64 * 100.0,
            city_counts: cities.iter().map(|(city, s)| (city.clone(), s.total_count)).collect(),
            cities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use crate::servers::repository::memory::InMemoryServersRepository;
    use async_trait::async_trait;
    use models::server::{Model, NewServer};

    fn stats_over<I>(servers: I) -> StatisticsService<InMemoryServersRepository>
    where
        I: IntoIterator<Item = Model>,
    {
        let repo = Arc::new(InMemoryServersRepository::with_servers(servers));
        StatisticsService::new(Arc::new(ServerService::new(repo)), CityOrder::default())
    }

    fn record(id: i32, city: &str, is_online: bool) -> Model {
        Model { id, name: format!("Server{id}"), city: city.into(), is_online }
    }

    #[tokio::test]
    async fn empty_fleet_yields_no_statistics() {
        let stats = stats_over([]);
        assert!(stats.compute_statistics().await.is_none());
    }

    #[tokio::test]
    async fn single_online_server_is_one_hundred_percent() {
        let stats = stats_over([record(1, "Toronto", true)]);
        let s = stats.compute_statistics().await.expect("some");
        assert_eq!(s.total_count, 1);
        assert_eq!(s.online_count, 1);
        assert_eq!(s.offline_count, 0);
        assert!((s.online_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn counts_are_consistent_across_cities() {
        let stats = stats_over([
            record(1, "Toronto", true),
            record(2, "Toronto", false),
            record(3, "Montreal", true),
            record(4, "Halifax", false),
            record(5, "Halifax", false),
        ]);
        let s = stats.compute_statistics().await.expect("some");

        assert_eq!(s.total_count, s.online_count + s.offline_count);
        let city_total: usize = s.cities.values().map(|c| c.total_count).sum();
        assert_eq!(city_total, s.total_count);
        assert_eq!(s.city_counts["Toronto"], 2);
        assert_eq!(s.cities["Halifax"].offline_count, 2);
        assert!((s.online_percentage - 40.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn city_maps_follow_canonical_order_with_unknowns_trailing() {
        // Stored in a deliberately scrambled order; ids drive first-seen
        // order within the snapshot.
        let stats = stats_over([
            record(1, "Halifax", true),
            record(2, "Springfield", true),
            record(3, "Toronto", false),
            record(4, "Shelbyville", false),
        ]);
        let s = stats.compute_statistics().await.expect("some");

        let keys: Vec<_> = s.cities.keys().cloned().collect();
        assert_eq!(keys, vec!["Toronto", "Halifax", "Springfield", "Shelbyville"]);
        let count_keys: Vec<_> = s.city_counts.keys().cloned().collect();
        assert_eq!(count_keys, keys);
    }

    /// Repository whose list always fails; the aggregator must convert the
    /// failure into "no data".
    struct BrokenRepository;

    #[async_trait]
    impl ServersRepository for BrokenRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn get_by_id(&self, _id: i32) -> Result<Option<Model>, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn list_by_city(&self, _city: &str) -> Result<Vec<Model>, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn search(&self, _name: &str) -> Result<Vec<Model>, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn create(&self, _server: NewServer) -> Result<Model, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn update(&self, _id: i32, _server: &Model) -> Result<bool, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
        async fn delete(&self, _id: i32) -> Result<bool, ServiceError> {
            Err(ServiceError::Storage("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn storage_failure_degrades_to_no_data() {
        let svc = Arc::new(ServerService::new(Arc::new(BrokenRepository)));
        let stats = StatisticsService::new(svc, CityOrder::default());
        assert!(stats.compute_statistics().await.is_none());
    }
}
