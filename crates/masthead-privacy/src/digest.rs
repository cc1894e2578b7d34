//! Keyed digest over address and salt.

use sha2::{Digest, Sha256};

/// Number of hexadecimal characters in a [`keyed_digest`] output.
pub const DIGEST_HEX_LEN: usize = 64;

/// Computes the SHA-256 digest of `input` concatenated with `salt`,
/// hex-encoded.
///
/// Neither value is truncated or normalized before hashing, and the
/// concatenation order is always `input` then `salt`. The output is a
/// lowercase hex string of [`DIGEST_HEX_LEN`] characters.
///
/// # Example
///
/// ```rust,ignore
/// use masthead_privacy::keyed_digest;
///
/// let digest = keyed_digest("203.0.113.42", "2024-01-15");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn keyed_digest(input: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_fixed_length_lowercase_hex() {
        let digest = keyed_digest("203.0.113.42", "2024-01-15");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(
            keyed_digest("203.0.113.42", "2024-01-15"),
            keyed_digest("203.0.113.42", "2024-01-15"),
        );
    }

    #[test]
    fn digest_changes_with_salt() {
        assert_ne!(
            keyed_digest("203.0.113.42", "2024-01-15"),
            keyed_digest("203.0.113.42", "2024-01-16"),
        );
    }

    #[test]
    fn digest_hashes_plain_concatenation() {
        // input || salt is a single byte stream, so shifting the boundary
        // between the two arguments does not change the digest.
        assert_eq!(keyed_digest("10.0.0.", "1"), keyed_digest("10.0", ".0.1"));
    }

    #[test]
    fn empty_input_and_salt_match_sha256_of_empty_string() {
        assert_eq!(
            keyed_digest("", ""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
    }
}
