//! Field validation helpers for admission and profile forms

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static AADHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Basic email shape check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Indian mobile number: exactly 10 digits
pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value)
}

/// Aadhar number: exactly 12 digits
pub fn is_valid_aadhar(value: &str) -> bool {
    AADHAR_RE.is_match(value)
}

/// Postal pincode: exactly 6 digits
pub fn is_valid_pincode(value: &str) -> bool {
    PINCODE_RE.is_match(value)
}

/// Password policy: at least 8 characters with a lowercase letter, an
/// uppercase letter, a digit, and a symbol.
///
/// Mirrors the signup form's policy so the server rejects everything the
/// client would.
pub fn is_strong_password(value: &str) -> bool {
    value.len() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| "!@#$%^&*".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("resident@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("98765"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("98765abcde"));
    }

    #[test]
    fn test_aadhar_validation() {
        assert!(is_valid_aadhar("123456789012"));
        assert!(!is_valid_aadhar("12345678901"));
        assert!(!is_valid_aadhar("1234567890123"));
    }

    #[test]
    fn test_pincode_validation() {
        assert!(is_valid_pincode("695001"));
        assert!(!is_valid_pincode("69500"));
        assert!(!is_valid_pincode("6950011"));
    }

    #[test]
    fn test_password_strength() {
        assert!(is_strong_password("Str0ng!pass"));
        assert!(!is_strong_password("weak"));
        assert!(!is_strong_password("alllowercase1!"));
        assert!(!is_strong_password("NoDigits!!"));
        assert!(!is_strong_password("NoSymbol123"));
    }
}
