//! Error types for `rolo-core`.
//!
//! This is the domain taxonomy every boundary maps to: validation,
//! not-found, email conflict, storage. Store backends keep their own error
//! enums and convert into this one.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// Missing or malformed caller input (required field, email syntax,
  /// pagination bounds).
  #[error("{0}")]
  Validation(String),

  #[error("contact not found: {0}")]
  NotFound(Uuid),

  /// The `email` uniqueness invariant would be violated.
  #[error("email already in use: {0}")]
  EmailConflict(String),

  /// Underlying data-layer failure.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
