// trolley_api/src/services/token_service.rs

//! HS256 bearer tokens carrying the user profile.

use crate::errors::AppError;
use crate::models::{UserDto, UserName};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
  /// User id.
  pub sub: String,
  pub email: String,
  pub name: UserName,
  pub iat: i64,
  pub exp: i64,
}

pub struct TokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  expires_in_secs: i64,
}

impl fmt::Debug for TokenService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokenService")
      .field("expires_in_secs", &self.expires_in_secs)
      .finish_non_exhaustive()
  }
}

impl TokenService {
  pub fn new(secret: &str, expires_in_secs: i64) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      expires_in_secs,
    }
  }

  #[instrument(name = "token_service::generate_token", skip(self, user), fields(user_id = %user.id), err(Display))]
  pub fn generate_token(&self, user: &UserDto) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
      sub: user.id.to_string(),
      email: user.email.clone(),
      name: user.name.clone(),
      iat: now,
      exp: now + self.expires_in_secs,
    };
    let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AppError::Token(format!("Error encoding token : {}", e)))?;
    debug!("Token issued.");
    Ok(token)
  }

  #[instrument(name = "token_service::verify_token", skip_all, err(Display))]
  pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
    if token.is_empty() {
      return Err(AppError::Token("Error verifying token : 'token' is null".to_string()));
    }
    let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
      .map_err(|e| AppError::Token(format!("Error verifying token : {}", e)))?;
    Ok(data.claims)
  }
}
