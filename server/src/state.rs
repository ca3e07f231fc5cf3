// trolley_api/src/state.rs
use crate::config::AppConfig;
use crate::db::carts::PgCartStore;
use crate::services::token_service::TokenService;
use sqlx::PgPool;
use std::sync::Arc;
use trolley::{CartAggregator, CartStore, WriteMode};

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub carts: Arc<CartAggregator>,
  pub tokens: Arc<TokenService>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Carts persisted in Postgres next to users and items.
  pub fn new(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
    let cart_store: Arc<dyn CartStore> = Arc::new(PgCartStore::new(db_pool.clone()));
    Self::with_cart_store(config, db_pool, cart_store)
  }

  pub fn with_cart_store(config: Arc<AppConfig>, db_pool: PgPool, cart_store: Arc<dyn CartStore>) -> Self {
    let mode = if config.cart_serialize_writes {
      WriteMode::SerializedPerUser
    } else {
      WriteMode::Unguarded
    };
    Self {
      db_pool,
      carts: Arc::new(CartAggregator::new(cart_store).with_write_mode(mode)),
      tokens: Arc::new(TokenService::new(&config.jwt_secret, config.jwt_expires_in_secs)),
      config,
    }
  }
}
