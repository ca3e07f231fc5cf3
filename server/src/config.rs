// trolley_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'", other))),
    }
  }
}

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,

  pub jwt_secret: String,
  pub jwt_expires_in_secs: i64,

  // Serialize cart read-modify-write per user inside this process.
  pub cart_serialize_writes: bool,

  // Apply schema.sql at startup.
  pub init_schema: bool,

  pub log_format: LogFormat,
}

// Hand-written so secrets never reach the logs.
impl std::fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("database_url", &"[REDACTED]")
      .field("database_max_connections", &self.database_max_connections)
      .field("jwt_secret", &"[REDACTED]")
      .field("jwt_expires_in_secs", &self.jwt_expires_in_secs)
      .field("cart_serialize_writes", &self.cart_serialize_writes)
      .field("init_schema", &self.init_schema)
      .field("log_format", &self.log_format)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };
    let or_default = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    fn parse<T: FromStr>(var_name: &str, raw: String) -> Result<T>
    where
      T::Err: std::fmt::Display,
    {
      raw
        .trim()
        .parse::<T>()
        .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
    }

    let server_host = or_default("SERVER_HOST", "127.0.0.1");
    let server_port = parse::<u16>("SERVER_PORT", or_default("SERVER_PORT", "8080"))?;
    let database_url = required("DATABASE_URL")?;
    let database_max_connections = parse::<u32>("DATABASE_MAX_CONNECTIONS", or_default("DATABASE_MAX_CONNECTIONS", "5"))?;

    let jwt_secret = required("JWT_SECRET")?;
    let jwt_expires_in_secs = parse::<i64>("JWT_EXPIRES_IN", or_default("JWT_EXPIRES_IN", "21600"))?;
    if jwt_expires_in_secs <= 0 {
      return Err(AppError::Config("JWT_EXPIRES_IN must be a positive number of seconds".to_string()));
    }

    let cart_serialize_writes = parse::<bool>("CART_SERIALIZE_WRITES", or_default("CART_SERIALIZE_WRITES", "false"))?;
    let init_schema = parse::<bool>("INIT_SCHEMA", or_default("INIT_SCHEMA", "false"))?;
    let log_format = or_default("LOG_FORMAT", "pretty").parse::<LogFormat>()?;

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      jwt_secret,
      jwt_expires_in_secs,
      cart_serialize_writes,
      init_schema,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
