//! Credential hashing and session token helpers
//!
//! Pure functions only - no HTTP framework or database dependencies.
//! Session persistence lives in trackflow-hub's db layer.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Minimum accepted password length at sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Hash a password with a fresh random salt
///
/// Output format: `<salt-hex>$<sha256(salt || password)-hex>`.
/// The salt is 16 random bytes; the stored string is self-contained, so
/// verification needs no external state.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    let salt_hex = hex_encode(&salt);
    format!("{}${}", salt_hex, digest_with_salt(&salt_hex, password))
}

/// Verify a password against a stored `salt$hash` string
///
/// Returns false for malformed stored values rather than erroring; a
/// corrupted hash must never authenticate anyone.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt_hex, hash_hex)) => digest_with_salt(salt_hex, password) == hash_hex,
        None => false,
    }
}

/// Validate a sign-up password, surfacing a caller-presentable message
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Generate an opaque session token (32 random bytes, hex encoded)
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex_encode(&bytes)
}

fn digest_with_salt(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_roundtrip() {
        let stored = hash_password("correct horse");
        assert!(verify_password("correct horse", &stored));
        assert!(!verify_password("wrong horse", &stored));
    }

    #[test]
    fn test_hashes_are_salted() {
        // Same password, different salt, different stored value
        let a = hash_password("hunter22");
        let b = hash_password("hunter22");
        assert_ne!(a, b);
        assert!(verify_password("hunter22", &a));
        assert!(verify_password("hunter22", &b));
    }

    #[test]
    fn test_malformed_stored_hash_rejected() {
        assert!(!verify_password("anything", "no-separator-here"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_password_length_rule() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_session_token_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_session_token());
    }
}
