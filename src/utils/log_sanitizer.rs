//! Log sanitization utilities for masking personal data.
//!
//! Emails and names are masked before logging so request logs never carry
//! full PII.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part followed by
/// asterisks and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local_part, domain)) => format!("{}@{}", mask_name(local_part), domain),
        None => mask_name(email),
    }
}

/// Mask a first or last name for safe logging.
///
/// Counts characters rather than bytes so multi-byte names are never split.
pub fn mask_name(name: &str) -> String {
    let visible: String = name.chars().take(3).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@test.org"), "a***@test.org");
    }

    #[test]
    fn test_mask_email_without_domain() {
        assert_eq!(mask_email("notanemail"), "not***");
        assert_eq!(mask_email("e"), "e***");
    }

    #[test]
    fn test_mask_name() {
        assert_eq!(mask_name("Margaret"), "Mar***");
        assert_eq!(mask_name("Al"), "Al***");
        assert_eq!(mask_name("Żółć"), "Żół***");
    }
}
