//! Content fingerprinting for decoded structures.

use ripemd::{Digest, Ripemd128};

/// Computes a stable 128-bit content digest of `bytes`, rendered as 32
/// lowercase hex characters.
///
/// The digest is used purely for change detection: identical input bytes
/// produce an identical string across runs and platforms. It is not a
/// security boundary.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Ripemd128::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
