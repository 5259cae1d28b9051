//! Error type for `rolo-store-sqlite`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Attempted to update or delete a contact that was not found.
  #[error("contact not found: {0}")]
  NotFound(Uuid),

  /// The `UNIQUE` constraint on `contacts.email` fired.
  #[error("email already in use: {0}")]
  EmailTaken(String),
}

impl From<Error> for rolo_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::NotFound(id) => rolo_core::Error::NotFound(id),
      Error::EmailTaken(email) => rolo_core::Error::EmailConflict(email),
      other => rolo_core::Error::Storage(Box::new(other)),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
