//! JSON REST API for the rolo contacts backend.
//!
//! Exposes an axum [`Router`] backed by any [`rolo_core::store::ContactStore`].
//! Transport concerns (bind address, TLS) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolo_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod health;
pub mod seed;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::StatusCode,
  response::IntoResponse,
  routing::{get, patch},
};
use serde_json::json;

use rolo_core::store::ContactStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .route("/contacts/{id}/favorite", patch(contacts::set_favorite::<S>))
    .route("/health", get(health::handler))
    .fallback(not_found)
    .with_state(store)
}

/// Generic 404 for unknown routes.
async fn not_found() -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "message": "endpoint not found" })),
  )
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use rolo_store_memory::MemStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn empty_router() -> Router {
    api_router(Arc::new(MemStore::new()))
  }

  async fn seeded_router() -> Router {
    let store = MemStore::new();
    seed::seed_if_empty(&store).await.unwrap();
    api_router(Arc::new(store))
  }

  async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(v) => builder
        .header("content-type", "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  fn first_names(body: &Value) -> Vec<&str> {
    body["data"]
      .as_array()
      .unwrap()
      .iter()
      .map(|c| c["firstName"].as_str().unwrap())
      .collect()
  }

  fn draft_body() -> Value {
    json!({
      "firstName": "Meera",
      "lastName": "Nair",
      "email": "meera@example.com",
      "phone": "+91-4444444444",
      "company": "Freelance",
      "tags": ["photography"],
      "favorite": false
    })
  }

  // ── Health ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_reports_ok() {
    let (status, body) = send(empty_router().await, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
  }

  // ── List ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_seeded_contacts_newest_first() {
    let (status, body) = send(seeded_router().await, "GET", "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 6);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["limit"], 20);
    assert_eq!(
      first_names(&body),
      ["Asha", "Sneha", "Priya", "Uday", "Rajesh", "Amit"]
    );
  }

  #[tokio::test]
  async fn list_search_design_matches_tag_and_company() {
    let (status, body) =
      send(seeded_router().await, "GET", "/contacts?search=design", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(first_names(&body), ["Asha", "Sneha"]);
  }

  #[tokio::test]
  async fn list_favorites_paginated_reports_full_total() {
    let (status, body) = send(
      seeded_router().await,
      "GET",
      "/contacts?favorite=true&limit=2&page=1",
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 3);
  }

  #[tokio::test]
  async fn list_filters_by_comma_separated_tags() {
    let (status, body) = send(
      seeded_router().await,
      "GET",
      "/contacts?tags=business,friend",
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_names(&body), ["Uday", "Rajesh", "Amit"]);
  }

  #[tokio::test]
  async fn list_rejects_zero_page_and_limit() {
    for uri in ["/contacts?page=0", "/contacts?limit=0"] {
      let (status, body) = send(seeded_router().await, "GET", uri, None).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
      assert!(body["message"].is_string());
    }
  }

  // ── Create ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_then_get_roundtrips() {
    let app = empty_router().await;

    let (status, created) =
      send(app.clone(), "POST", "/contacts", Some(draft_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_string());
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert_eq!(created["avatarUrl"], Value::Null);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) =
      send(app, "GET", &format!("/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
  }

  #[tokio::test]
  async fn create_missing_required_field_is_400() {
    let mut body = draft_body();
    body.as_object_mut().unwrap().remove("email");
    let (status, resp) =
      send(empty_router().await, "POST", "/contacts", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["message"], "missing required field: email");
  }

  #[tokio::test]
  async fn create_invalid_email_is_400() {
    let mut body = draft_body();
    body["email"] = json!("not-an-email");
    let (status, _) =
      send(empty_router().await, "POST", "/contacts", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn create_duplicate_email_is_conflict_and_not_persisted() {
    let app = seeded_router().await;

    let mut body = draft_body();
    body["email"] = json!("asha@example.com");
    let (status, resp) = send(app.clone(), "POST", "/contacts", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(resp["message"].as_str().unwrap().contains("asha@example.com"));

    let (_, listed) = send(app, "GET", "/contacts", None).await;
    assert_eq!(listed["meta"]["total"], 6);
  }

  // ── Update ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_replaces_fields_and_refreshes_updated_at() {
    let app = empty_router().await;
    let (_, created) =
      send(app.clone(), "POST", "/contacts", Some(draft_body())).await;
    let id = created["id"].as_str().unwrap();

    let mut body = draft_body();
    body["firstName"] = json!("Meera-Updated");
    body["tags"] = json!(["photography", "travel"]);
    let (status, updated) =
      send(app.clone(), "PUT", &format!("/contacts/{id}"), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Meera-Updated");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].as_str() >= created["updatedAt"].as_str());

    let (_, fetched) = send(app, "GET", &format!("/contacts/{id}"), None).await;
    assert_eq!(fetched, updated);
  }

  #[tokio::test]
  async fn update_missing_contact_is_404() {
    let uri = format!("/contacts/{}", uuid::Uuid::new_v4());
    let (status, _) =
      send(empty_router().await, "PUT", &uri, Some(draft_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn update_to_taken_email_is_conflict() {
    let app = seeded_router().await;
    let (_, listed) = send(app.clone(), "GET", "/contacts", None).await;
    let id = listed["data"][0]["id"].as_str().unwrap().to_owned();

    let mut body = draft_body();
    body["email"] = json!("uday@example.com");
    let (status, _) =
      send(app, "PUT", &format!("/contacts/{id}"), Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
  }

  // ── Delete ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_then_missing_is_404() {
    let app = empty_router().await;
    let (_, created) =
      send(app.clone(), "POST", "/contacts", Some(draft_body())).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/contacts/{id}");

    let (status, body) = send(app.clone(), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(app.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is not a silent success.
    let (status, _) = send(app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Set favorite ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn set_favorite_uses_the_explicit_value() {
    let app = empty_router().await;
    let (_, created) =
      send(app.clone(), "POST", "/contacts", Some(draft_body())).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/contacts/{id}/favorite");

    let (status, updated) =
      send(app.clone(), "PATCH", &uri, Some(json!({"favorite": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["favorite"], true);

    // Same value again is idempotent, not a flip.
    let (status, updated) =
      send(app, "PATCH", &uri, Some(json!({"favorite": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["favorite"], true);
  }

  #[tokio::test]
  async fn set_favorite_rejects_non_boolean() {
    let app = empty_router().await;
    let (_, created) =
      send(app.clone(), "POST", "/contacts", Some(draft_body())).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
      app,
      "PATCH",
      &format!("/contacts/{id}/favorite"),
      Some(json!({"favorite": "yes"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "favorite must be a boolean value");
  }

  #[tokio::test]
  async fn set_favorite_on_missing_contact_is_404() {
    let uri = format!("/contacts/{}/favorite", uuid::Uuid::new_v4());
    let (status, _) = send(
      empty_router().await,
      "PATCH",
      &uri,
      Some(json!({"favorite": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Routing ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_route_is_404_with_generic_body() {
    let (status, body) =
      send(empty_router().await, "GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "endpoint not found");
  }

  #[tokio::test]
  async fn malformed_id_is_rejected() {
    let (status, _) =
      send(empty_router().await, "GET", "/contacts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
