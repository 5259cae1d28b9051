//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | `?search=&page=&limit=&favorite=&tags=` |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `POST`   | `/contacts` | Body: [`ContactDraft`]; 201 + created contact |
//! | `PUT`    | `/contacts/:id` | Full replace of editable fields |
//! | `DELETE` | `/contacts/:id` | 204 empty |
//! | `PATCH`  | `/contacts/:id/favorite` | Body: `{"favorite": bool}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rolo_core::{
  contact::{Contact, ContactDraft},
  query::{self, ContactQuery, DEFAULT_LIMIT, DEFAULT_PAGE},
  store::ContactStore,
};

use crate::error::ApiError;

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub search:   Option<String>,
  /// 1-based page number, default 1.
  pub page:     Option<u32>,
  /// Page size, default 20.
  pub limit:    Option<u32>,
  /// Only `favorite=true` restricts the result.
  pub favorite: Option<bool>,
  /// Comma-separated tags, split verbatim — tag matching is exact, so the
  /// entries are not trimmed.
  pub tags:     Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub data: Vec<Contact>,
  pub meta: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct PageMeta {
  pub page:  u32,
  pub limit: u32,
  pub total: usize,
}

/// `GET /contacts[?search=...][&page=...][&limit=...][&favorite=true][&tags=a,b]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError>
where
  S: ContactStore,
{
  let query = ContactQuery {
    search:        params.search,
    favorite_only: params.favorite.unwrap_or(false),
    tags:          params
      .tags
      .map(|s| s.split(',').map(str::to_owned).collect())
      .unwrap_or_default(),
    page:          params.page.unwrap_or(DEFAULT_PAGE),
    limit:         params.limit.unwrap_or(DEFAULT_LIMIT),
  };

  let contacts = store.list_all().await.map_err(ApiError::from_store)?;
  let page = query::run(contacts, &query)?;

  Ok(Json(ListResponse {
    data: page.items,
    meta: PageMeta {
      page:  page.page,
      limit: page.limit,
      total: page.total,
    },
  }))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + the stored contact with server-assigned
/// id and timestamps.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let Json(draft) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let input = draft.validate()?;

  let contact = store
    .insert(Contact::create(input))
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — full replace of the editable fields; id and
/// createdAt are preserved, updatedAt is refreshed.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  body: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let Json(draft) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let input = draft.validate()?;

  let existing = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;

  let updated = store
    .update(existing.replace_fields(input))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(updated))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — hard delete, 204 on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  store.delete(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Set favorite ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
  pub favorite: bool,
}

/// `PATCH /contacts/:id/favorite` — body: `{"favorite": bool}`.
///
/// The caller passes the desired value; the server never flips in place.
pub async fn set_favorite<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  body: Result<Json<FavoriteBody>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let Json(FavoriteBody { favorite }) = body
    .map_err(|_| ApiError::BadRequest("favorite must be a boolean value".into()))?;

  let existing = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;

  let updated = store
    .update(existing.with_favorite(favorite))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(updated))
}
