//! Unique test data built from ULIDs.

use ulid::Ulid;

/// `{prefix}-{ulid}@example.test`
///
/// The local part becomes the first name of a demo login, so tests can
/// recognise their own user in the response.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("reader");
/// assert!(email.starts_with("reader-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
