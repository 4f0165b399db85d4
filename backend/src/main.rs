//! Address service entry-point: loads settings, prepares storage and the
//! geocoder, then serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use address_service::domain::AddressService;
use address_service::domain::ports::{AddressCommand, AddressQuery};
use address_service::inbound::http::health::HealthState;
use address_service::inbound::http::state::HttpState;
use address_service::outbound::geocoding::NominatimGeocoder;
use address_service::outbound::persistence::{
    DbPool, DieselAddressRepository, PoolConfig, run_pending_migrations,
};
use server::{AddressServiceSettings, ServerConfig, create_server};

#[cfg(feature = "metrics")]
fn initialize_metrics<E, F>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    make()
        .inspect_err(|error| warn!(%error, "Prometheus metrics disabled"))
        .ok()
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AddressServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let database_url = settings.database_url()?.to_owned();

    let applied = {
        let url = database_url.clone();
        tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .wrap_err("migration task panicked")??
    };
    info!(applied, "database migrations complete");

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()?),
    )
    .await?;

    let geocoder = NominatimGeocoder::new(
        settings.geocoder_endpoint()?,
        settings.geocoder_timeout()?,
        settings.geocoder_user_agent(),
    )
    .wrap_err("failed to build geocoder client")?;
    info!(endpoint = %geocoder.endpoint(), "geocoder configured");

    let service = AddressService::new(
        Arc::new(DieselAddressRepository::new(pool)),
        Arc::new(geocoder),
    );
    let commands: Arc<dyn AddressCommand> = Arc::new(service.clone());
    let queries: Arc<dyn AddressQuery> = Arc::new(service);
    let http_state = web::Data::new(HttpState::new(commands, queries));
    let health_state = web::Data::new(HealthState::new());

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("address_service")
            .endpoint("/metrics")
            .build()
    }));

    info!(bind_addr = %config.bind_addr(), "starting address service");
    let server = create_server(health_state.clone(), http_state, config)?;
    server.await?;
    health_state.mark_unhealthy();
    info!("address service stopped");
    Ok(())
}
