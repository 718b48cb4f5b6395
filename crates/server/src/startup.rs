use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::city_order::CityOrder;
use service::servers::SeaOrmServersRepository;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: wire storage and services, then run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = configs::AppConfig::load_and_validate().ok();

    // DB connection; pool settings come from config when present.
    let db = match &cfg {
        Some(cfg) => models::db::connect_with_config(&cfg.database).await?,
        None => models::db::connect().await?,
    };

    // Bring the schema (and the seed fleet) up to date.
    migration::Migrator::up(&db, None).await?;
    info!("database migrated");

    let order = match &cfg {
        Some(cfg) => CityOrder::new(cfg.display.city_order.clone()),
        None => CityOrder::default(),
    };

    let repo = Arc::new(SeaOrmServersRepository::new(db));
    let state = AppState::new(repo, order);

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, "starting fleet console api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
