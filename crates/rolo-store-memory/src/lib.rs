//! In-memory backend for the rolo contact store.
//!
//! A lightweight [`ContactStore`] used as a test double by the API tests.
//! Each instance owns its own data behind an explicit handle — there is no
//! process-wide state. Listing goes through the same query engine as the
//! SQLite backend, so both paths answer list requests identically.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use rolo_core::{contact::Contact, store::ContactStore};

// ─── Error ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  NotFound(Uuid),

  #[error("email already in use: {0}")]
  EmailTaken(String),
}

impl From<Error> for rolo_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::NotFound(id) => rolo_core::Error::NotFound(id),
      Error::EmailTaken(email) => rolo_core::Error::EmailConflict(email),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a `Vec` in memory.
///
/// The vector's order is the insertion order the query engine relies on for
/// its tie-break. Uniqueness checks happen under the write lock, so writers
/// cannot race each other.
#[derive(Clone, Default)]
pub struct MemStore {
  contacts: Arc<RwLock<Vec<Contact>>>,
}

impl MemStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ContactStore for MemStore {
  type Error = Error;

  async fn insert(&self, contact: Contact) -> Result<Contact> {
    let mut contacts = self.contacts.write().await;
    if contacts.iter().any(|c| c.email == contact.email) {
      return Err(Error::EmailTaken(contact.email));
    }
    contacts.push(contact.clone());
    Ok(contact)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
    let contacts = self.contacts.read().await;
    Ok(contacts.iter().find(|c| c.id == id).cloned())
  }

  async fn list_all(&self) -> Result<Vec<Contact>> {
    Ok(self.contacts.read().await.clone())
  }

  async fn update(&self, contact: Contact) -> Result<Contact> {
    let mut contacts = self.contacts.write().await;
    let Some(idx) = contacts.iter().position(|c| c.id == contact.id) else {
      return Err(Error::NotFound(contact.id));
    };
    // The record being replaced is allowed to keep its own email.
    if contacts
      .iter()
      .enumerate()
      .any(|(i, c)| i != idx && c.email == contact.email)
    {
      return Err(Error::EmailTaken(contact.email));
    }
    contacts[idx] = contact.clone();
    Ok(contact)
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let mut contacts = self.contacts.write().await;
    let Some(idx) = contacts.iter().position(|c| c.id == id) else {
      return Err(Error::NotFound(id));
    };
    contacts.remove(idx);
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use rolo_core::contact::ContactDraft;

  use super::*;

  fn contact(first: &str, email: &str) -> Contact {
    Contact::create(
      ContactDraft {
        first_name: Some(first.into()),
        last_name:  Some("Tester".into()),
        email:      Some(email.into()),
        ..Default::default()
      }
      .validate()
      .expect("valid draft"),
    )
  }

  #[tokio::test]
  async fn insert_then_get() {
    let s = MemStore::new();
    let c = contact("Asha", "asha@example.com");
    s.insert(c.clone()).await.unwrap();
    assert_eq!(s.get(c.id).await.unwrap(), Some(c));
  }

  #[tokio::test]
  async fn insert_duplicate_email_errors() {
    let s = MemStore::new();
    s.insert(contact("Asha", "asha@example.com")).await.unwrap();
    let err = s
      .insert(contact("Imposter", "asha@example.com"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::EmailTaken(_)));
    assert_eq!(s.list_all().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn update_checks_email_against_other_records_only() {
    let s = MemStore::new();
    let asha = contact("Asha", "asha@example.com");
    s.insert(asha.clone()).await.unwrap();
    let uday = contact("Uday", "uday@example.com");
    s.insert(uday.clone()).await.unwrap();

    // Keeping its own email is fine.
    s.update(asha.with_favorite(true)).await.unwrap();

    // Stealing another record's email is not.
    let mut clash = uday.clone();
    clash.email = "asha@example.com".into();
    assert!(matches!(s.update(clash).await, Err(Error::EmailTaken(_))));
  }

  #[tokio::test]
  async fn update_and_delete_missing_error() {
    let s = MemStore::new();
    let ghost = contact("Ghost", "ghost@example.com");
    assert!(matches!(s.update(ghost).await, Err(Error::NotFound(_))));
    assert!(matches!(s.delete(Uuid::new_v4()).await, Err(Error::NotFound(_))));
  }

  #[tokio::test]
  async fn list_all_preserves_insertion_order() {
    let s = MemStore::new();
    let mut ids = Vec::new();
    for i in 0..3 {
      let c = contact(&format!("C{i}"), &format!("c{i}@example.com"));
      ids.push(c.id);
      s.insert(c).await.unwrap();
    }
    let got: Vec<_> = s.list_all().await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(got, ids);
  }
}
