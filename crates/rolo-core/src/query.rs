//! The contact query engine: filter, count, sort, paginate.
//!
//! Listing always goes through [`run`], fed with a snapshot from
//! [`ContactStore::list_all`](crate::store::ContactStore::list_all). Every
//! storage backend therefore shares one filter implementation instead of
//! re-encoding the rules per backend.

use crate::{contact::Contact, error::Error};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`run`].
#[derive(Debug, Clone)]
pub struct ContactQuery {
  /// Free-text term, matched case-insensitively against first name, last
  /// name, email, company, and each individual tag.
  pub search:        Option<String>,
  /// Keep only contacts with `favorite == true`.
  pub favorite_only: bool,
  /// Exact, case-sensitive tag filter; a contact matches if it shares at
  /// least one non-empty tag with this list.
  pub tags:          Vec<String>,
  /// 1-based page number.
  pub page:          u32,
  /// Page size.
  pub limit:         u32,
}

impl Default for ContactQuery {
  fn default() -> Self {
    ContactQuery {
      search:        None,
      favorite_only: false,
      tags:          Vec::new(),
      page:          DEFAULT_PAGE,
      limit:         DEFAULT_LIMIT,
    }
  }
}

/// One page of query results. `total` counts the whole filtered set,
/// independent of the pagination window.
#[derive(Debug, Clone)]
pub struct ContactPage {
  pub items: Vec<Contact>,
  pub total: usize,
  pub page:  u32,
  pub limit: u32,
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Apply `query` to a snapshot of the contact collection.
///
/// Rejects `page < 1` and `limit < 1` outright — silent clamping would mask
/// caller bugs. The snapshot's order is the tie-break for equal
/// `created_at` values, so callers must pass contacts in insertion order.
pub fn run(contacts: Vec<Contact>, query: &ContactQuery) -> Result<ContactPage, Error> {
  if query.page < 1 {
    return Err(Error::Validation("page must be a positive integer".into()));
  }
  if query.limit < 1 {
    return Err(Error::Validation("limit must be a positive integer".into()));
  }

  let mut matched = contacts;

  if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
    let needle = term.to_lowercase();
    matched.retain(|c| matches_search(c, &needle));
  }

  if query.favorite_only {
    matched.retain(|c| c.favorite);
  }

  if !query.tags.is_empty() {
    matched.retain(|c| matches_tags(c, &query.tags));
  }

  let total = matched.len();

  // Stable sort: ties on created_at keep snapshot (insertion) order.
  matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

  let skip = (query.page as usize - 1) * query.limit as usize;
  let items = matched
    .into_iter()
    .skip(skip)
    .take(query.limit as usize)
    .collect();

  Ok(ContactPage {
    items,
    total,
    page: query.page,
    limit: query.limit,
  })
}

/// `needle` must already be lowercased.
fn matches_search(contact: &Contact, needle: &str) -> bool {
  let field_hit = [
    Some(contact.first_name.as_str()),
    Some(contact.last_name.as_str()),
    Some(contact.email.as_str()),
    contact.company.as_deref(),
  ]
  .into_iter()
  .flatten()
  .any(|f| f.to_lowercase().contains(needle));

  field_hit || contact.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Exact, case-sensitive overlap. Empty filter entries never match, so a
/// filter of `[""]` excludes everything — including tagless contacts.
fn matches_tags(contact: &Contact, filter: &[String]) -> bool {
  filter
    .iter()
    .any(|t| !t.is_empty() && contact.tags.iter().any(|ct| ct == t))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
