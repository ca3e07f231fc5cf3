// trolley_api/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, health_check_handler, item_handlers, user_handlers};

// Malformed JSON bodies become 400s with the usual `{"error": ...}` body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid request body: {}", err)).into()
}

/// Registers every route and the JSON extractor config.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/health", web::get().to(health_check_handler))
    // Users
    .route("/signup", web::post().to(user_handlers::signup_handler))
    .route("/users/login", web::post().to(user_handlers::login_handler))
    // Items (no authentication)
    .service(
      web::scope("/items")
        .route("", web::post().to(item_handlers::create_item_handler))
        .route("", web::get().to(item_handlers::list_items_handler))
        .route("/count", web::get().to(item_handlers::count_items_handler))
        .route("/{id}", web::get().to(item_handlers::get_item_handler))
        .route("/{id}", web::patch().to(item_handlers::patch_item_handler))
        .route("/{id}", web::put().to(item_handlers::replace_item_handler))
        .route("/{id}", web::delete().to(item_handlers::delete_item_handler)),
    )
    // The caller's own cart
    .service(
      web::scope("/user/cart")
        .route("", web::post().to(cart_handlers::create_cart_handler))
        .route("", web::get().to(cart_handlers::get_my_cart_handler))
        .route("/items", web::post().to(cart_handlers::add_cart_items_handler))
        .route("/items/{item_id}", web::delete().to(cart_handlers::remove_cart_item_handler)),
    )
    // Any cart, addressed by user id
    .service(
      web::scope("/carts")
        .route("", web::get().to(cart_handlers::list_carts_handler))
        .route("/{user_id}", web::get().to(cart_handlers::get_cart_handler))
        .route("/{user_id}", web::patch().to(cart_handlers::patch_cart_handler))
        .route("/{user_id}", web::put().to(cart_handlers::replace_cart_handler))
        .route("/{user_id}", web::delete().to(cart_handlers::delete_cart_handler)),
    );
}
