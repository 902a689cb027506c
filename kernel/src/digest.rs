//! Canonical hashing and instance fingerprints.
//!
//! Algorithm: SHA-256 over `domain || data`, where every domain prefix is
//! null-terminated. Result format: `"sha256:<hex_digest>"`.

use sha2::{Digest, Sha256};

use crate::instance::Instance;

/// Domain prefix for instance fingerprints.
pub const DOMAIN_INSTANCE: &[u8] = b"SETCOVER::INSTANCE::V1\0";

/// Domain prefix for run summary content hashing.
pub const DOMAIN_RUN_SUMMARY: &[u8] = b"SETCOVER::RUN_SUMMARY::V1\0";

/// A content-addressed hash, `"sha256:<hex_digest>"`. Only
/// [`canonical_hash`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash {
        full: format!("sha256:{}", hex::encode(hasher.finalize())),
    }
}

impl Instance {
    /// Canonical byte encoding: universe size, subset count, then for each
    /// subset its length followed by its elements in ascending order. All
    /// integers are little-endian `u64`.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.universe_size() as u64).to_le_bytes());
        out.extend_from_slice(&(self.subset_count() as u64).to_le_bytes());
        for subset in self.subsets() {
            out.extend_from_slice(&(subset.len() as u64).to_le_bytes());
            for element in subset.iter() {
                out.extend_from_slice(&(element as u64).to_le_bytes());
            }
        }
        out
    }

    /// Content fingerprint of the instance under [`DOMAIN_INSTANCE`].
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_INSTANCE, &self.canonical_bytes())
    }
}
