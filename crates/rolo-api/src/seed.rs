//! Sample data seeded into an empty store at startup.
//!
//! The same fixture backs the API tests, so the documented scenarios
//! ("design" search, three favorites) hold against a freshly-seeded server.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use rolo_core::{contact::Contact, store::ContactStore};

/// Insert the sample contacts if (and only if) the store is empty.
/// Returns the number of contacts inserted.
pub async fn seed_if_empty<S>(store: &S) -> Result<usize, S::Error>
where
  S: ContactStore,
{
  if !store.list_all().await?.is_empty() {
    return Ok(0);
  }

  let samples = sample_contacts();
  let count = samples.len();
  for contact in samples {
    store.insert(contact).await?;
  }
  Ok(count)
}

/// Six sample contacts: three favorites, distinct creation times, and a mix
/// of tags/companies so search and filter behavior is observable out of the
/// box.
pub fn sample_contacts() -> Vec<Contact> {
  let now = Utc::now();
  vec![
    sample(
      now - Duration::days(1),
      "Asha",
      "Sharma",
      "asha@example.com",
      Some("+91-9876543210"),
      Some("Acme Co."),
      Some("Product Designer"),
      &["design", "india"],
      true,
    ),
    sample(
      now - Duration::days(7),
      "Sneha",
      "Gupta",
      "sneha@designstudio.com",
      Some("+91-6666666666"),
      Some("Design Studio"),
      Some("UX Designer"),
      &["design", "ux", "research"],
      true,
    ),
    sample(
      now - Duration::days(12),
      "Priya",
      "Patel",
      "priya@techcorp.com",
      Some("+91-8888888888"),
      Some("TechCorp"),
      Some("Frontend Developer"),
      &["engineering", "react", "javascript"],
      true,
    ),
    sample(
      now - Duration::days(17),
      "Uday",
      "Srivastava",
      "uday@example.com",
      Some("+91-9999999999"),
      Some("Example Labs"),
      Some("Software Engineer"),
      &["engineering", "friend"],
      false,
    ),
    sample(
      now - Duration::days(22),
      "Rajesh",
      "Kumar",
      "rajesh@startup.io",
      Some("+91-7777777777"),
      Some("StartupIO"),
      Some("CEO"),
      &["leadership", "startup", "business"],
      false,
    ),
    sample(
      now - Duration::days(27),
      "Amit",
      "Singh",
      "amit@consulting.com",
      Some("+91-5555555555"),
      Some("Consulting Inc"),
      Some("Senior Consultant"),
      &["consulting", "strategy", "business"],
      false,
    ),
  ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
  created_at: DateTime<Utc>,
  first: &str,
  last: &str,
  email: &str,
  phone: Option<&str>,
  company: Option<&str>,
  job_title: Option<&str>,
  tags: &[&str],
  favorite: bool,
) -> Contact {
  Contact {
    id: Uuid::new_v4(),
    first_name: first.into(),
    last_name: last.into(),
    email: email.into(),
    phone: phone.map(Into::into),
    avatar_url: None,
    company: company.map(Into::into),
    job_title: job_title.map(Into::into),
    tags: tags.iter().map(|t| t.to_string()).collect(),
    favorite,
    created_at,
    updated_at: created_at,
  }
}
