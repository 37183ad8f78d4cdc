//! Input validation helpers shared by the service layer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum accepted name length
pub const MAX_NAME_LENGTH: usize = 50;

// Pragmatic address check; full RFC 5322 parsing is not the goal here
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if a password satisfies the minimum length rule
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Check if a display name satisfies the length rule
pub fn is_valid_name(name: &str) -> bool {
    not_empty(name) && length_between(name, 1, MAX_NAME_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_password_length() {
        assert!(is_valid_password("longenough"));
        assert!(!is_valid_password("short"));
    }

    #[test]
    fn test_name_bounds() {
        assert!(is_valid_name("Ada"));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name(&"x".repeat(MAX_NAME_LENGTH + 1)));
    }
}
