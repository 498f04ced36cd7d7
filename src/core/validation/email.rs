//! E-mail shape validation
//!
//! Matches a minimal `local@domain.tld` shape. Deliverability is not
//! verified; this only catches obviously malformed form input.

use regex::Regex;

/// Validates that a string looks like an e-mail address
///
/// The shape is `local@domain.tld`: no whitespace, exactly one `@`, and a
/// dot somewhere after it.
pub fn validate_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}
