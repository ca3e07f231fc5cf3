// trolley_api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

use trolley_api::config::{AppConfig, LogFormat};
use trolley_api::web::configure_app_routes;
use trolley_api::{db, AppState};

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config comes first: it decides the log format.
  let app_config = Arc::new(AppConfig::from_env().context("loading application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!(config = ?app_config, "Starting trolley API server...");

  let db_pool = PgPoolOptions::new()
    .max_connections(app_config.database_max_connections)
    .connect(&app_config.database_url)
    .await
    .context("connecting to the database")?;
  tracing::info!("Successfully connected to the database.");

  if app_config.init_schema {
    db::apply_schema(&db_pool).await.context("applying database schema")?;
  }

  let app_state = AppState::new(app_config.clone(), db_pool);
  tracing::info!(
    cart_write_mode = ?app_state.carts.write_mode(),
    "Cart aggregator ready."
  );

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await
  .context("running HTTP server")?;

  Ok(())
}
