//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use rolo_core::{contact::Contact, store::ContactStore};

use crate::{
  Error, Result,
  encode::{RawContact, encode_uuid, row_to_raw},
  schema::SCHEMA,
};

const COLUMNS: &str = "contact_id, first_name, last_name, email, phone, \
                       avatar_url, company, job_title, tags, favorite, \
                       created_at, updated_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Whether `e` is the `UNIQUE` violation on `contacts.email`. That signal is
/// the store's only uniqueness check — screening with a prior read would
/// race under concurrent creates.
fn is_email_unique_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, Some(msg)))
      if f.code == rusqlite::ErrorCode::ConstraintViolation
        && msg.contains("contacts.email")
  )
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, contact: Contact) -> Result<Contact> {
    let raw = RawContact::from_contact(&contact)?;

    let res = self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!("INSERT INTO contacts ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"),
          rusqlite::params![
            raw.contact_id,
            raw.first_name,
            raw.last_name,
            raw.email,
            raw.phone,
            raw.avatar_url,
            raw.company,
            raw.job_title,
            raw.tags,
            raw.favorite,
            raw.created_at,
            raw.updated_at,
          ],
        )?;
        Ok(())
      })
      .await;

    match res {
      Ok(()) => Ok(contact),
      Err(e) if is_email_unique_violation(&e) => Err(Error::EmailTaken(contact.email)),
      Err(e) => Err(Error::Database(e)),
    }
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM contacts WHERE contact_id = ?1"),
              rusqlite::params![id_str],
              row_to_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_all(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        // rowid order == insertion order, the query engine's tie-break.
        let mut stmt =
          conn.prepare(&format!("SELECT {COLUMNS} FROM contacts ORDER BY rowid"))?;
        let rows = stmt
          .query_map([], row_to_raw)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn update(&self, contact: Contact) -> Result<Contact> {
    let raw = RawContact::from_contact(&contact)?;

    let res = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE contacts SET
             first_name = ?2, last_name = ?3, email = ?4, phone = ?5,
             avatar_url = ?6, company = ?7, job_title = ?8, tags = ?9,
             favorite = ?10, updated_at = ?11
           WHERE contact_id = ?1",
          rusqlite::params![
            raw.contact_id,
            raw.first_name,
            raw.last_name,
            raw.email,
            raw.phone,
            raw.avatar_url,
            raw.company,
            raw.job_title,
            raw.tags,
            raw.favorite,
            raw.updated_at,
          ],
        )?;
        Ok(changed)
      })
      .await;

    let changed = match res {
      Ok(n) => n,
      Err(e) if is_email_unique_violation(&e) => {
        return Err(Error::EmailTaken(contact.email));
      }
      Err(e) => return Err(Error::Database(e)),
    };

    if changed == 0 {
      return Err(Error::NotFound(contact.id));
    }
    Ok(contact)
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }
}
