// tome-core/src/token.rs
//! Time-based id tokens.
//!
//! The store does not enforce id uniqueness; callers mint ids here. A token
//! is the current millisecond timestamp plus a process-local counter, so two
//! tokens minted in the same millisecond still differ.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Mint a fresh id token, e.g. `"1767225600123-42"`.
pub fn next_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{count}")
}

/// Current time as the RFC 3339 string stored on entities.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_within_a_burst() {
        let ids: Vec<String> = (0..64).map(|_| next_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn now_is_parseable() {
        assert!(chrono::DateTime::parse_from_rfc3339(&now_rfc3339()).is_ok());
    }
}
