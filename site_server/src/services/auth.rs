//! Admin token derivation and verification.
//!
//! The admin token is the hex HMAC-SHA256 of a fixed context string under the
//! configured secret. Verification recomputes the MAC and compares in
//! constant time. An empty secret disables validation (local development).

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_CONTEXT: &[u8] = b"modsite-admin-token-v1";

/// Derive the admin token for a secret.
pub fn derive_token(secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(TOKEN_CONTEXT);
    hex::encode(mac.finalize().into_bytes())
}

/// Validate a presented admin token.
pub fn validate_token(secret: &str, provided: &str) -> bool {
    if secret.is_empty() {
        tracing::warn!("Admin secret not configured, skipping validation");
        return true;
    }

    let provided_bytes = match hex::decode(provided) {
        Ok(b) => b,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(TOKEN_CONTEXT);

    mac.verify_slice(&provided_bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_token_validates() {
        let token = derive_token("s3cret");
        assert!(validate_token("s3cret", &token));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = derive_token("s3cret");
        assert!(!validate_token("other", &token));
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(!validate_token("s3cret", "not-hex"));
        assert!(!validate_token("s3cret", ""));
        assert!(!validate_token("s3cret", "deadbeef"));
    }

    #[test]
    fn empty_secret_is_open() {
        assert!(validate_token("", "anything"));
    }
}
