//! # Vela Client
//!
//! Data access and session layer for the POS frontend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          vela-client                                │
//! │                                                                     │
//! │   session ──► PosSession: cart ownership + checkout orchestration   │
//! │      │                                                              │
//! │      ▼                                                              │
//! │   store ────► PosClient: offline-fallback reads, blocked writes     │
//! │      │                                                              │
//! │      ├────► backend:  remote seam (trait) + wire normalization      │
//! │      ├────► fixtures: static fallback datasets                      │
//! │      └────► query:    stale-response suppression tickets            │
//! │                                                                     │
//! │   Business arithmetic lives in vela-core; nothing here computes     │
//! │   a price.                                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP transport is deliberately outside this crate: callers provide
//! any [`Backend`] implementation, and tests drive the whole stack with an
//! in-memory double.

pub mod backend;
pub mod error;
pub mod fixtures;
pub mod query;
pub mod session;
pub mod store;

pub use backend::{Backend, BackendError, BackendResult, CreatedSale, NewCustomer, ProductQuery};
pub use error::{ClientError, ClientResult};
pub use query::{QuerySequence, QueryTicket};
pub use session::{CheckoutOptions, PosSession, Receipt};
pub use store::PosClient;
