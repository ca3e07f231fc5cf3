// trolley_api/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{Credentials, NewUser, UserDto};
use crate::services::user_service;
use crate::state::AppState;

#[instrument(name = "handler::signup", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
  info!("Signup attempt for email: {}", req_payload.email);
  let user = user_service::create_user(&app_state.db_pool, &req_payload).await?;
  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::login", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Credentials>,
) -> Result<HttpResponse, AppError> {
  let user = user_service::verify_credentials(&app_state.db_pool, &req_payload).await?;
  let token = app_state.tokens.generate_token(&UserDto::from(&user))?;
  info!("Login successful for user ID: {}", user.id);
  Ok(HttpResponse::Ok().json(json!({ "token": token })))
}
