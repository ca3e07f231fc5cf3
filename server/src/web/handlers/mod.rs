// trolley_api/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod item_handlers;
pub mod user_handlers;

use actix_web::HttpResponse;

pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
