// trolley_api/src/web/extractors.rs

//! Bearer-token authentication as an actix extractor.

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::errors::AppError;
use crate::services::token_service::TokenClaims;
use crate::state::AppState;

/// The caller's profile, taken from a verified bearer token.
/// Handlers that take this argument reject unauthenticated requests with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
  pub user_id: String,
  pub email: String,
  pub name: String,
}

impl AuthenticatedUser {
  pub fn from_claims(claims: TokenClaims) -> Result<Self, AppError> {
    if claims.sub.is_empty() {
      return Err(AppError::Auth("'user id' is null".to_string()));
    }
    Ok(Self {
      name: claims.name.to_string(),
      user_id: claims.sub,
      email: claims.email,
    })
  }
}

/// Pulls `xx.yy.zz` out of an `Authorization: Bearer xx.yy.zz` header value.
pub fn extract_bearer_token(header_value: Option<&str>) -> Result<&str, AppError> {
  let value = header_value.ok_or_else(|| AppError::Auth("Authorization header not found.".to_string()))?;

  if !value.starts_with("Bearer") {
    return Err(AppError::Auth("Authorization header is not of type 'Bearer'.".to_string()));
  }

  let parts: Vec<&str> = value.split(' ').collect();
  match parts.as_slice() {
    [_, token] => Ok(*token),
    _ => Err(AppError::Auth(
      "Authorization header value has too many parts. It must follow the pattern: 'Bearer xx.yy.zz' where xx.yy.zz is a valid JWT token."
        .to_string(),
    )),
  }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

  let header_value = match req.headers().get(header::AUTHORIZATION) {
    Some(raw) => Some(
      raw
        .to_str()
        .map_err(|_| AppError::Auth("Authorization header is not valid text.".to_string()))?,
    ),
    None => None,
  };

  let token = extract_bearer_token(header_value)?;
  let claims = state.tokens.verify_token(token)?;
  AuthenticatedUser::from_claims(claims)
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let outcome = authenticate(req);
    if let Err(e) = &outcome {
      warn!(path = %req.path(), error = %e, "Rejecting unauthenticated request.");
    }
    ready(outcome)
  }
}
