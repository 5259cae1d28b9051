//! Encoding and decoding between `Contact` and the plain-text representation
//! stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, tags as compact JSON, UUIDs as
//! hyphenated lowercase strings, the favorite flag as 0/1.

use chrono::{DateTime, Utc};
use rolo_core::contact::Contact;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_tags(tags: &[String]) -> Result<String> {
  Ok(serde_json::to_string(tags)?)
}

pub fn decode_tags(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read from (or bound into) a `contacts` row.
pub struct RawContact {
  pub contact_id: String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub avatar_url: Option<String>,
  pub company:    Option<String>,
  pub job_title:  Option<String>,
  pub tags:       String,
  pub favorite:   bool,
  pub created_at: String,
  pub updated_at: String,
}

impl RawContact {
  pub fn from_contact(contact: &Contact) -> Result<Self> {
    Ok(RawContact {
      contact_id: encode_uuid(contact.id),
      first_name: contact.first_name.clone(),
      last_name:  contact.last_name.clone(),
      email:      contact.email.clone(),
      phone:      contact.phone.clone(),
      avatar_url: contact.avatar_url.clone(),
      company:    contact.company.clone(),
      job_title:  contact.job_title.clone(),
      tags:       encode_tags(&contact.tags)?,
      favorite:   contact.favorite,
      created_at: encode_dt(contact.created_at),
      updated_at: encode_dt(contact.updated_at),
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_uuid(&self.contact_id)?,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      phone:      self.phone,
      avatar_url: self.avatar_url,
      company:    self.company,
      job_title:  self.job_title,
      tags:       decode_tags(&self.tags)?,
      favorite:   self.favorite,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Map a `contacts` row (columns in schema order) to a [`RawContact`].
pub fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContact> {
  Ok(RawContact {
    contact_id: row.get(0)?,
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
    email:      row.get(3)?,
    phone:      row.get(4)?,
    avatar_url: row.get(5)?,
    company:    row.get(6)?,
    job_title:  row.get(7)?,
    tags:       row.get(8)?,
    favorite:   row.get(9)?,
    created_at: row.get(10)?,
    updated_at: row.get(11)?,
  })
}
