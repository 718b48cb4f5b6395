use std::sync::Arc;

use models::city_order::CityOrder;
use service::servers::{ServerService, ServersRepository, StatisticsService};

/// Shared handler state, generic over the repository so the same router
/// serves the SeaORM store in production and the in-memory store in tests.
pub struct AppState<R: ServersRepository> {
    pub servers: Arc<ServerService<R>>,
    pub stats: Arc<StatisticsService<R>>,
    pub order: CityOrder,
}

impl<R: ServersRepository> AppState<R> {
    pub fn new(repo: Arc<R>, order: CityOrder) -> Self {
        let servers = Arc::new(ServerService::new(repo));
        let stats = Arc::new(StatisticsService::new(Arc::clone(&servers), order.clone()));
        Self { servers, stats, order }
    }
}

impl<R: ServersRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            servers: Arc::clone(&self.servers),
            stats: Arc::clone(&self.stats),
            order: self.order.clone(),
        }
    }
}
