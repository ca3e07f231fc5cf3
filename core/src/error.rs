// trolley/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("No cart exists for user '{user_id}'")]
  NotFound { user_id: String },

  #[error("A cart already exists for user '{user_id}'")]
  AlreadyExists { user_id: String },

  #[error("Cart store operation failed. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl CartError {
  pub fn not_found(user_id: impl Into<String>) -> Self {
    CartError::NotFound { user_id: user_id.into() }
  }

  pub fn already_exists(user_id: impl Into<String>) -> Self {
    CartError::AlreadyExists { user_id: user_id.into() }
  }

  /// Wraps any backend error as a store failure.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    CartError::Store { source: AnyhowError::new(err) }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, CartError::NotFound { .. })
  }
}

// Store backends that already speak anyhow land here.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    // Avoid Store(Store(..)) nesting when a CartError went through anyhow and back.
    match err.downcast::<CartError>() {
      Ok(cart_err) => cart_err,
      Err(err) => CartError::Store { source: err },
    }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
