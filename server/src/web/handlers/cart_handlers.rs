// trolley_api/src/web/handlers/cart_handlers.rs

//! Cart routes. Every handler here requires a bearer token.
//!
//! `/user/cart/...` routes act on the caller's own cart through the
//! aggregator; `/carts/...` routes address any cart by user id.

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};
use trolley::{Cart, CartLineItem, CartPatch};

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::AuthenticatedUser;

fn validate_line_items(items: &[CartLineItem]) -> Result<(), AppError> {
  if let Some(pos) = items.iter().position(|li| li.item_id.trim().is_empty()) {
    return Err(AppError::Validation(format!("items[{}].itemId must not be empty.", pos)));
  }
  Ok(())
}

#[instrument(
    name = "handler::add_cart_items",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, item_count = req_payload.len())
)]
pub async fn add_cart_items_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Vec<CartLineItem>>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let incoming = req_payload.into_inner();
  validate_line_items(&incoming)?;

  let cart = app_state.carts.add_items(&auth_user.user_id, incoming).await?;
  info!(
    "Cart for user {} now holds {} line items.",
    auth_user.user_id,
    cart.items.len()
  );
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
    name = "handler::remove_cart_item",
    skip(app_state, path, auth_user),
    fields(user_id = %auth_user.user_id, item_id = %path.as_ref())
)]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let cart = app_state.carts.remove_item(&item_id, &auth_user.user_id).await?;
  info!("Item {} removed from cart of user {}.", item_id, auth_user.user_id);
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::create_cart", skip(app_state, req_payload, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn create_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Cart>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let mut cart = req_payload.into_inner();
  validate_line_items(&cart.items)?;
  // The cart always belongs to the caller, whatever the body says.
  cart.user_id = auth_user.user_id;
  let created = app_state.carts.store().create(cart).await?;
  Ok(HttpResponse::Ok().json(created))
}

// Responds with `null` when the caller has no cart yet.
#[instrument(name = "handler::get_my_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_my_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.carts.find(&auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::list_carts", skip(app_state, _auth_user))]
pub async fn list_carts_handler(
  app_state: web::Data<AppState>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let carts = db::carts::list_all(&app_state.db_pool).await?;
  info!("Successfully fetched {} carts.", carts.len());
  Ok(HttpResponse::Ok().json(carts))
}

#[instrument(name = "handler::get_cart", skip(app_state, path, _auth_user), fields(cart_user_id = %path.as_ref()))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  match app_state.carts.find(&user_id).await? {
    Some(cart) => Ok(HttpResponse::Ok().json(cart)),
    None => {
      warn!("Cart for user {} not found.", user_id);
      Err(AppError::NotFound(format!("Cart for user {} not found.", user_id)))
    }
  }
}

#[instrument(name = "handler::patch_cart", skip(app_state, path, req_payload, _auth_user), fields(cart_user_id = %path.as_ref()))]
pub async fn patch_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<CartPatch>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let patch = req_payload.into_inner();
  if let Some(items) = &patch.items {
    validate_line_items(items)?;
  }
  app_state.carts.store().update(&path.into_inner(), patch).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::replace_cart", skip(app_state, path, req_payload, _auth_user), fields(cart_user_id = %path.as_ref()))]
pub async fn replace_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<Cart>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let mut cart = req_payload.into_inner();
  validate_line_items(&cart.items)?;
  cart.user_id = user_id.clone();
  app_state.carts.store().replace(&user_id, cart).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::delete_cart", skip(app_state, path, _auth_user), fields(cart_user_id = %path.as_ref()))]
pub async fn delete_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  db::carts::delete(&app_state.db_pool, &path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
