// trolley_api/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{ItemPatch, NewItem};
use crate::state::AppState;

fn validate_item(item: &NewItem) -> Result<(), AppError> {
  if item.name.trim().is_empty() {
    return Err(AppError::Validation("Item name is required.".to_string()));
  }
  if !item.price.is_finite() {
    return Err(AppError::Validation("Item price must be a finite number.".to_string()));
  }
  Ok(())
}

#[instrument(name = "handler::create_item", skip(app_state, req_payload), fields(name = %req_payload.name))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewItem>,
) -> Result<HttpResponse, AppError> {
  validate_item(&req_payload)?;
  let item = db::items::insert(&app_state.db_pool, &req_payload).await?;
  info!("Item {} created.", item.id);
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = db::items::list(&app_state.db_pool).await?;
  info!("Successfully fetched {} items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::count_items", skip(app_state))]
pub async fn count_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let count = db::items::count(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({ "count": count })))
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  match db::items::find(&app_state.db_pool, item_id).await? {
    Some(item) => Ok(HttpResponse::Ok().json(item)),
    None => {
      warn!("Item with ID {} not found.", item_id);
      Err(AppError::NotFound(format!("Item with ID {} not found.", item_id)))
    }
  }
}

#[instrument(name = "handler::patch_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn patch_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<ItemPatch>,
) -> Result<HttpResponse, AppError> {
  if let Some(name) = &req_payload.name {
    if name.trim().is_empty() {
      return Err(AppError::Validation("Item name cannot be blank.".to_string()));
    }
  }
  if req_payload.price.map_or(false, |p| !p.is_finite()) {
    return Err(AppError::Validation("Item price must be a finite number.".to_string()));
  }
  db::items::patch(&app_state.db_pool, path.into_inner(), &req_payload).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::replace_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn replace_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<NewItem>,
) -> Result<HttpResponse, AppError> {
  validate_item(&req_payload)?;
  db::items::replace(&app_state.db_pool, path.into_inner(), &req_payload).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn delete_item_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  db::items::delete(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
