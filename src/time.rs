//! Time helpers and nonce generation.
//!
//! Private mutating endpoints require a monotonically increasing nonce for
//! replay protection. The nonce is derived from current time in milliseconds
//! and guaranteed to strictly increase even when two calls land in the same
//! millisecond.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Returns the current time in milliseconds since the Unix epoch.
///
/// # Example
///
/// ```rust
/// use cobinhood::time::milliseconds;
///
/// let now = milliseconds();
/// assert!(now > 0);
/// ```
pub fn milliseconds() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns the current time in seconds since the Unix epoch.
pub fn seconds() -> i64 {
    Utc::now().timestamp()
}

/// Produces strictly increasing nonce values based on wall-clock
/// milliseconds.
///
/// If the clock has not advanced since the previous call (or moved
/// backwards), the previous nonce plus one is used instead.
#[derive(Debug, Default)]
pub struct NonceFactory {
    last: AtomicI64,
}

impl NonceFactory {
    /// Creates a new nonce factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next nonce value.
    pub fn next(&self) -> i64 {
        let now = milliseconds();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now > prev { now } else { prev + 1 };
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => prev = observed,
            }
        }
    }
}
