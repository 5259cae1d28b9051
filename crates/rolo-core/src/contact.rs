//! Contact — the sole entity.
//!
//! `Contact` is the persisted record. `ContactDraft` is the raw, unvalidated
//! shape accepted from callers; `ContactDraft::validate` turns it into a
//! `NewContact`, which is the only way editable fields reach a `Contact`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Error, validate};

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A person record: identity, contact fields, tags, and a favorite flag.
///
/// `id` and `created_at` are assigned once at creation and never change.
/// `updated_at` is refreshed by every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub avatar_url: Option<String>,
  pub company:    Option<String>,
  pub job_title:  Option<String>,
  /// Ordered; duplicates are not deduplicated.
  pub tags:       Vec<String>,
  pub favorite:   bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Contact {
  /// Build a brand-new contact from validated input. The id and both
  /// timestamps are assigned here, never by the caller.
  pub fn create(input: NewContact) -> Self {
    let now = Utc::now();
    Contact {
      id:         Uuid::new_v4(),
      first_name: input.first_name,
      last_name:  input.last_name,
      email:      input.email,
      phone:      input.phone,
      avatar_url: None,
      company:    input.company,
      job_title:  input.job_title,
      tags:       input.tags,
      favorite:   input.favorite,
      created_at: now,
      updated_at: now,
    }
  }

  /// Full replace of the editable fields. `id`, `created_at`, and
  /// `avatar_url` are preserved; `updated_at` is refreshed.
  pub fn replace_fields(&self, input: NewContact) -> Self {
    Contact {
      id:         self.id,
      first_name: input.first_name,
      last_name:  input.last_name,
      email:      input.email,
      phone:      input.phone,
      avatar_url: self.avatar_url.clone(),
      company:    input.company,
      job_title:  input.job_title,
      tags:       input.tags,
      favorite:   input.favorite,
      created_at: self.created_at,
      updated_at: Utc::now(),
    }
  }

  /// Set `favorite` to an explicit value supplied by the caller (not a
  /// flip-in-place). Refreshes `updated_at`.
  pub fn with_favorite(&self, favorite: bool) -> Self {
    Contact {
      favorite,
      updated_at: Utc::now(),
      ..self.clone()
    }
  }
}

// ─── Draft and validated input ───────────────────────────────────────────────

/// Editable contact fields as received from a caller, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub job_title:  Option<String>,
  #[serde(default)]
  pub tags:       Vec<String>,
  #[serde(default)]
  pub favorite:   bool,
}

/// Editable contact fields that have passed validation.
#[derive(Debug, Clone)]
pub struct NewContact {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub job_title:  Option<String>,
  pub tags:       Vec<String>,
  pub favorite:   bool,
}

impl ContactDraft {
  /// Check required fields and email syntax, normalising blank optional
  /// fields to `None`.
  pub fn validate(self) -> Result<NewContact, Error> {
    let first_name = required(self.first_name, "firstName")?;
    let last_name = required(self.last_name, "lastName")?;
    let email = required(self.email, "email")?;

    if !validate::is_valid_email(&email) {
      return Err(Error::Validation(format!("invalid email address: {email}")));
    }

    Ok(NewContact {
      first_name,
      last_name,
      email,
      phone: none_if_blank(self.phone),
      company: none_if_blank(self.company),
      job_title: none_if_blank(self.job_title),
      tags: self.tags,
      favorite: self.favorite,
    })
  }
}

fn required(value: Option<String>, field: &str) -> Result<String, Error> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(v),
    _ => Err(Error::Validation(format!("missing required field: {field}"))),
  }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}
