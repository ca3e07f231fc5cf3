// trolley_api/src/lib.rs

//! REST backend for users, items and per-user shopping carts.
//!
//! Carts are handled by `trolley::CartAggregator`; this crate wires it to
//! Postgres, bearer-token authentication and actix-web routes.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::AppError;
pub use crate::state::AppState;
