//! Checkout signature verification.
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed
//! by the merchant's key secret and sends the hex digest back through
//! the client. The server recomputes and compares in constant time.

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected checkout signature.
pub fn sign(key_secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key_secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a signature received from the client.
pub fn verify(key_secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let expected = sign(key_secret, order_id, payment_id);
    constant_time_eq(expected.as_bytes(), signature.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_key_secret";

    #[test]
    fn test_valid_signature_verifies() {
        let sig = sign(SECRET, "order_abc123", "pay_def456");
        assert!(verify(SECRET, "order_abc123", "pay_def456", &sig));
    }

    #[test]
    fn test_signature_is_hex_sha256() {
        let sig = sign(SECRET, "order_abc123", "pay_def456");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let mut sig = sign(SECRET, "order_abc123", "pay_def456");
        // Flip the last character
        let last = sig.pop().unwrap();
        sig.push(if last == '0' { '1' } else { '0' });
        assert!(!verify(SECRET, "order_abc123", "pay_def456", &sig));
    }

    #[test]
    fn test_wrong_ids_rejected() {
        let sig = sign(SECRET, "order_abc123", "pay_def456");
        assert!(!verify(SECRET, "order_abc123", "pay_other", &sig));
        assert!(!verify(SECRET, "order_other", "pay_def456", &sig));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let sig = sign(SECRET, "order_abc123", "pay_def456");
        assert!(!verify("other_secret", "order_abc123", "pay_def456", &sig));
    }

    #[test]
    fn test_ids_are_not_interchangeable() {
        // The "|" separator keeps (a, b) distinct from concatenation games.
        let sig = sign(SECRET, "order_a", "b_pay");
        assert!(!verify(SECRET, "order_a|b", "_pay", &sig));
    }
}
