// tests/validation_api_tests.rs
//
// Requests rejected before any database access.
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::*;
use serde_json::{json, Value};
use trolley_api::web::configure_app_routes;

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
  let test_app = TestApp::new(vec![]);
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_app.state.clone()))
      .configure(configure_app_routes),
  )
  .await;
  let req = test::TestRequest::post().uri(path).set_json(body).to_request();
  let resp = test::call_service(&app, req).await;
  let status = resp.status();
  (status, test::read_body_json(resp).await)
}

#[actix_rt::test]
async fn test_signup_rejects_short_password() {
  let (status, body) = post_json(
    "/signup",
    json!({"email": "grace@example.com", "password": "short", "name": {"first": "Grace", "last": "Hopper"}}),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Password must be at least 8 characters long.");
}

#[actix_rt::test]
async fn test_signup_rejects_bad_email_and_missing_name() {
  let (status, _) = post_json(
    "/signup",
    json!({"email": "not-an-email", "password": "long-enough", "name": {"first": "Grace", "last": "Hopper"}}),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, body) = post_json("/signup", json!({"email": "grace@example.com", "password": "long-enough"})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_rt::test]
async fn test_login_rejects_malformed_email() {
  let (status, body) = post_json("/users/login", json!({"email": "nobody", "password": "whatever1"})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Valid email is required.");
}

#[actix_rt::test]
async fn test_create_item_requires_a_name() {
  let (status, body) = post_json("/items", json!({"name": "  ", "price": 3.5})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Item name is required.");
}
