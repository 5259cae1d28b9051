//! Field-level validation helpers.

/// Syntactic email check: one `@`, non-empty local part, domain with a dot
/// and non-empty labels around it, no whitespace anywhere.
///
/// Deliberately loose — the goal is to catch obvious typos, not to police
/// RFC 5321. Uniqueness is a separate, store-enforced invariant.
pub fn is_valid_email(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let Some((host, tld)) = domain.rsplit_once('.') else {
    return false;
  };
  !host.is_empty() && !tld.is_empty()
}
