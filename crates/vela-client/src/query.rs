//! # Stale-Response Suppression
//!
//! Monotonic tickets for overlapping async queries.
//!
//! ## Why
//! Search-as-you-type fires a request per keystroke and responses can
//! resolve out of order. Each request takes a ticket from a shared
//! sequence; when a response arrives, it is applied only if its ticket is
//! still the latest one issued. A superseded response is dropped, never
//! surfaced as an error.
//!
//! ```text
//!   type "co"  ──► ticket 1 ──────────────► resolves, ticket 2 exists: drop
//!   type "col" ──► ticket 2 ──► resolves, still latest: apply
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing query tickets.
///
/// One sequence per result slot (e.g. the product grid); concurrent
/// `begin` calls are safe.
#[derive(Debug, Default)]
pub struct QuerySequence {
    latest: AtomicU64,
}

/// A ticket identifying one in-flight query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

impl QueryTicket {
    /// The raw ticket number, for logging.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl QuerySequence {
    /// Creates a fresh sequence with no tickets issued.
    pub fn new() -> Self {
        QuerySequence::default()
    }

    /// Issues the next ticket and marks it as the latest.
    pub fn begin(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket is still the most recently issued one.
    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
