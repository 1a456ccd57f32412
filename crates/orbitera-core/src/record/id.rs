//! Record identifiers and the clock they are derived from.
//!
//! Every record is identified by its creation time in Unix milliseconds.
//! Two records created inside the same millisecond would share an id, so
//! [`IdSequence`] bumps a colliding timestamp to one past the last id it
//! issued. Ids therefore stay "creation time in ms" to within a few ms and
//! are strictly increasing per sequence.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a message, project or service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(RecordId)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value)
    }
}

/// Source of "now" for ids and message timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats a timestamp the way a browser's `Date.toISOString()` does,
/// e.g. `2026-10-16T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Hands out strictly increasing timestamp ids.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicI64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sequence above an existing id, so ids already on disk are never reissued.
    pub fn starting_after(last: RecordId) -> Self {
        Self {
            last: AtomicI64::new(last.0),
        }
    }

    /// Raises the floor to `id` if it is larger than anything issued so far.
    pub fn observe(&self, id: RecordId) {
        self.last.fetch_max(id.0, Ordering::SeqCst);
    }

    /// Returns `max(at_millis, last + 1)` and remembers it.
    pub fn next(&self, at: DateTime<Utc>) -> RecordId {
        let candidate = at.timestamp_millis();
        let mut current = self.last.load(Ordering::SeqCst);
        loop {
            let issued = candidate.max(current.saturating_add(1));
            match self
                .last
                .compare_exchange(current, issued, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return RecordId(issued),
                Err(actual) => current = actual,
            }
        }
    }
}
