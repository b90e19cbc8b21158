//! Content digests.
//!
//! SHA-256 rendered as lowercase hex is the provenance hash format
//! stamped into exported SVG metadata.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::sha256_hex("<svg/>"); // 64 lowercase hex chars
//! ```

use sha2::{Digest, Sha256};

/// Length of a rendered SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// SHA-256 of `data` as lowercase hex.
#[inline]
pub fn sha256_hex<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(Sha256::digest(data.as_ref()))
}

/// Whether `s` looks like output of [`sha256_hex`].
pub fn is_sha256_hex(s: &str) -> bool {
    s.len() == SHA256_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_is_sha256_hex() {
        assert!(is_sha256_hex(&sha256_hex("x")));
        assert!(!is_sha256_hex("ABC"));
        assert!(!is_sha256_hex(&"A".repeat(64)));
    }
}
