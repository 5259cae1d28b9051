//! The `ContactStore` trait.
//!
//! Implemented by storage backends (`rolo-store-sqlite` for production,
//! `rolo-store-memory` as a test double). Higher layers depend on this
//! abstraction, not on any concrete backend, and listing always pairs
//! [`list_all`](ContactStore::list_all) with the shared query engine in
//! [`crate::query`].

use std::future::Future;

use uuid::Uuid;

use crate::contact::Contact;

/// Abstraction over a contact storage backend.
///
/// The backend owns the persisted record and the `email` uniqueness
/// invariant: writes that would duplicate an email must fail with an error
/// converting to [`Error::EmailConflict`](crate::Error::EmailConflict)
/// rather than being screened by a prior read — a read-then-write check
/// would race under concurrent creates.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Persist a fully-built contact. Fails on duplicate email.
  fn insert(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Snapshot of all contacts in insertion order.
  ///
  /// The order matters: it is the query engine's tie-break for equal
  /// `created_at` values.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Replace the stored record with `contact` (matched by `contact.id`).
  /// Fails if the id is absent or the new email duplicates another record.
  fn update(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Hard delete. Fails if the id is absent — never a silent success.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
