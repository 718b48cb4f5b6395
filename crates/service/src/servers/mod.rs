//! Fleet tracking: repository abstraction, validated entity service, and the
//! statistics aggregator consumed by the dashboard.

pub mod remote;
pub mod repository;
pub mod service;
pub mod statistics;

pub use repository::{SeaOrmServersRepository, ServersRepository};
pub use service::ServerService;
pub use statistics::StatisticsService;
