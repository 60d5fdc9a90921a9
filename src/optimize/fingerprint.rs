//! Content fingerprints for optimizer cache keys.
//!
//! A fingerprint digests the ordered tuple list `(kind, extracted text,
//! modifier-hash)` over a segment sequence. Modifier hashes serialize the
//! name + property bag with `serde_json` and truncate a SHA-256 digest.
//! Serialization failure is not an error: the fingerprint degrades to `None`
//! and the caller simply skips caching — a cache miss is always safe.

use sha2::{Digest, Sha256};

use crate::segment::{Modifier, Segment};

/// Truncated hex length for modifier hashes (8 digest bytes).
const MODIFIER_HASH_LEN: usize = 16;

/// Truncated hex length for sequence fingerprints (16 digest bytes).
const FINGERPRINT_LEN: usize = 32;

/// Hash an ordered modifier list. Empty lists hash to the empty string.
///
/// Returns `None` when the modifiers cannot be serialized; the degradation
/// is logged at debug level and the caller falls back to the uncached path.
pub fn modifier_hash(modifiers: &[Modifier]) -> Option<String> {
    if modifiers.is_empty() {
        return Some(String::new());
    }
    match serde_json::to_vec(modifiers) {
        Ok(bytes) => Some(truncated_hex(&Sha256::digest(&bytes), MODIFIER_HASH_LEN)),
        Err(err) => {
            tracing::debug!(error = %err, "modifier serialization failed, skipping fingerprint");
            None
        }
    }
}

/// Fingerprint a segment sequence for cache lookup.
///
/// Any degraded modifier hash degrades the whole fingerprint.
pub fn fingerprint(segments: &[Segment]) -> Option<String> {
    let mut hasher = Sha256::new();
    for segment in segments {
        hasher.update(segment.kind().name().as_bytes());
        hasher.update([0x1f]);
        hasher.update(extracted_text(segment).as_bytes());
        hasher.update([0x1f]);
        hasher.update(modifier_hash(segment.modifiers())?.as_bytes());
        hasher.update([0x1e]);
    }
    Some(truncated_hex(&hasher.finalize(), FINGERPRINT_LEN))
}

/// Text a segment contributes to its fingerprint: visible text, else the
/// configured accessible name, else empty.
fn extracted_text(segment: &Segment) -> &str {
    segment
        .text_content()
        .or_else(|| segment.accessible_name())
        .unwrap_or("")
}

fn truncated_hex(digest: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for byte in digest.iter().take(len / 2) {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================
