//! Courses backend entry-point: wires REST endpoints to PostgreSQL-backed
//! adapters and starts the HTTP listener.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use courses_backend::domain::auth::CredentialAuthenticator;
use courses_backend::inbound::http::error::enable_global_error_logging;
use courses_backend::inbound::http::state::HttpState;
use courses_backend::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselUserRepository, PoolConfig,
};
use server::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    enable_global_error_logging(settings.enable_global_error_logging);

    let pool = DbPool::new(
        PoolConfig::new(settings.database_url()).with_max_size(settings.pool_size()),
    )
    .await
    .map_err(std::io::Error::other)?;

    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let state = web::Data::new(HttpState::new(
        Arc::new(DieselCourseRepository::new(pool)),
        users.clone(),
        Arc::new(CredentialAuthenticator::new(users)),
    ));

    server::create_server(state, settings.bind_addr())?.await
}
