//! # Offline-Fallback Data Access
//!
//! Wraps the remote backend and decides, per read, whether to serve live
//! data or the static fixture dataset.
//!
//! ## Per-Read State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Offline-Fallback Decision                         │
//! │                                                                     │
//! │  read request                                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  offline flag set? ── yes ──► serve fixtures immediately            │
//! │       │ no                                                          │
//! │       ▼                                                             │
//! │  call backend                                                       │
//! │       │                                                             │
//! │       ├── Ok ───────────────► canonicalize, return live data        │
//! │       │                                                             │
//! │       ├── Unreachable ──────► set offline flag, warn!, fixtures     │
//! │       │                                                             │
//! │       └── Rejected ─────────► propagate unchanged (NO fallback)     │
//! │                                                                     │
//! │  write request                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  offline flag set? ── yes ──► UnavailableOffline (no network call)  │
//! │       │ no                                                          │
//! │       ▼                                                             │
//! │  call backend; Unreachable sets the flag and surfaces Network       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The offline flag is process-wide and sticky: once a read trips it, every
//! later operation short-circuits until [`PosClient::set_offline`] clears it
//! (the UI's "reconnect" button). Fallback substitution is logged as a
//! non-fatal event and is the only path that converts an error into data.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};
use vela_core::validation::validate_search_query;
use vela_core::{Customer, Product, SaleSubmission};

use crate::backend::{Backend, BackendError, CreatedSale, NewCustomer, ProductQuery};
use crate::error::{ClientError, ClientResult};
use crate::fixtures;
use crate::query::{QuerySequence, QueryTicket};

/// Data-access front for the POS screens.
///
/// Generic over the backend so tests drive it with an in-memory double and
/// the application wires in the HTTP implementation.
pub struct PosClient<B: Backend> {
    backend: B,
    offline: AtomicBool,
}

impl<B: Backend> PosClient<B> {
    /// Creates a client in online mode.
    pub fn new(backend: B) -> Self {
        PosClient {
            backend,
            offline: AtomicBool::new(false),
        }
    }

    /// Whether offline mode is currently active.
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    /// Forces offline mode on or off (the UI's reconnect toggle).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
        debug!(offline, "offline mode toggled");
    }

    // -------------------------------------------------------------------------
    // Reads (fallback-capable)
    // -------------------------------------------------------------------------

    /// Product lookup/search with offline fallback.
    ///
    /// The search term is validated and trimmed before anything else; a
    /// rejected term never produces a request or a fallback.
    pub async fn search_products(&self, query: &ProductQuery) -> ClientResult<Vec<Product>> {
        let query = ProductQuery {
            search: validate_search_query(&query.search)?,
            ..query.clone()
        };
        let query = &query;

        if self.is_offline() {
            debug!("offline mode active, serving product fixtures");
            return Ok(filter_products(fixtures::fallback_products(), query));
        }

        match self.backend.search_products(query).await {
            Ok(records) => Ok(records
                .into_iter()
                .map(|r| r.canonicalize())
                .filter(|p| p.is_active)
                .collect()),
            Err(BackendError::Unreachable(reason)) => {
                self.enter_offline("products", &reason);
                Ok(filter_products(fixtures::fallback_products(), query))
            }
            Err(BackendError::Rejected { status, message }) => {
                Err(ClientError::Remote { status, message })
            }
        }
    }

    /// Product search that suppresses stale responses.
    ///
    /// An in-flight query superseded by a newer ticket from the same
    /// sequence resolves to `Ok(None)`; only the latest request's result
    /// may be applied to displayed state.
    pub async fn search_products_latest(
        &self,
        sequence: &QuerySequence,
        ticket: &QueryTicket,
        query: &ProductQuery,
    ) -> ClientResult<Option<Vec<Product>>> {
        let products = self.search_products(query).await?;
        if sequence.is_current(ticket) {
            Ok(Some(products))
        } else {
            debug!(ticket = ticket.value(), "discarding stale search result");
            Ok(None)
        }
    }

    /// Customer lookup with offline fallback.
    pub async fn customers(&self, search: &str) -> ClientResult<Vec<Customer>> {
        let search = validate_search_query(search)?;
        let search = search.as_str();

        if self.is_offline() {
            debug!("offline mode active, serving customer fixtures");
            return Ok(filter_customers(fixtures::fallback_customers(), search));
        }

        match self.backend.list_customers(search).await {
            Ok(records) => Ok(records.into_iter().map(|r| r.canonicalize()).collect()),
            Err(BackendError::Unreachable(reason)) => {
                self.enter_offline("customers", &reason);
                Ok(filter_customers(fixtures::fallback_customers(), search))
            }
            Err(BackendError::Rejected { status, message }) => {
                Err(ClientError::Remote { status, message })
            }
        }
    }

    // -------------------------------------------------------------------------
    // Writes (never fall back)
    // -------------------------------------------------------------------------

    /// Creates a customer. Fails immediately when offline.
    pub async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Customer> {
        if self.is_offline() {
            return Err(ClientError::UnavailableOffline {
                operation: "create_customer",
            });
        }

        match self.backend.create_customer(customer).await {
            Ok(record) => Ok(record.canonicalize()),
            Err(err) => Err(self.write_error("create_customer", err)),
        }
    }

    /// Submits a finalized sale. Fails immediately when offline; the caller
    /// keeps its cart for manual retry.
    pub async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<CreatedSale> {
        if self.is_offline() {
            return Err(ClientError::UnavailableOffline {
                operation: "submit_sale",
            });
        }

        match self.backend.submit_sale(submission).await {
            Ok(created) => Ok(created),
            Err(err) => Err(self.write_error("submit_sale", err)),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Flips the offline flag and records the fallback event.
    /// Observability only; the read that triggered this still succeeds.
    fn enter_offline(&self, endpoint: &str, reason: &str) {
        self.offline.store(true, Ordering::SeqCst);
        warn!(endpoint, reason, "backend unreachable, serving fallback fixtures");
    }

    fn write_error(&self, operation: &str, err: BackendError) -> ClientError {
        match err {
            BackendError::Unreachable(reason) => {
                self.offline.store(true, Ordering::SeqCst);
                warn!(operation, reason = %reason, "write failed, entering offline mode");
                ClientError::Network { message: reason }
            }
            BackendError::Rejected { status, message } => ClientError::Remote { status, message },
        }
    }
}

/// Applies live-query semantics to the fixture catalog.
fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    products.into_iter().filter(|p| query.matches(p)).collect()
}

/// Applies live-query semantics to the fixture customers.
fn filter_customers(customers: Vec<Customer>, search: &str) -> Vec<Customer> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return customers;
    }
    customers
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email
                    .as_deref()
                    .map(|e| e.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendResult, CustomerRecord, ProductRecord};
    use std::sync::atomic::AtomicUsize;

    /// How the fake backend should behave.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Ok,
        Unreachable,
        Rejected,
    }

    /// In-memory backend double with call counters.
    struct FakeBackend {
        mode: Mode,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn new(mode: Mode) -> Self {
            FakeBackend {
                mode,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn fail<T>(&self) -> BackendResult<T> {
            match self.mode {
                Mode::Unreachable => Err(BackendError::Unreachable("connection aborted".into())),
                Mode::Rejected => Err(BackendError::Rejected {
                    status: 422,
                    message: "validation failed".into(),
                }),
                Mode::Ok => unreachable!("fail() called in Ok mode"),
            }
        }

        fn live_products() -> Vec<ProductRecord> {
            vec![ProductRecord {
                id: 100,
                name: "Live Cola".into(),
                sku: "LIVE-COLA".into(),
                barcode: None,
                price: 1.5,
                tax_rate: Some(10.0),
                category_id: None,
                is_active: true,
            }]
        }
    }

    impl Backend for FakeBackend {
        async fn search_products(&self, _query: &ProductQuery) -> BackendResult<Vec<ProductRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Ok => Ok(Self::live_products()),
                _ => self.fail(),
            }
        }

        async fn list_customers(&self, _search: &str) -> BackendResult<Vec<CustomerRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Ok => Ok(vec![CustomerRecord {
                    id: 10,
                    name: None,
                    first_name: Some("Live".into()),
                    last_name: Some("Customer".into()),
                    email: Some("live@example.com".into()),
                    phone: None,
                }]),
                _ => self.fail(),
            }
        }

        async fn create_customer(&self, customer: &NewCustomer) -> BackendResult<CustomerRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Ok => Ok(CustomerRecord {
                    id: 77,
                    name: Some(customer.name.clone()),
                    first_name: None,
                    last_name: None,
                    email: customer.email.clone(),
                    phone: customer.phone.clone(),
                }),
                _ => self.fail(),
            }
        }

        async fn submit_sale(&self, submission: &SaleSubmission) -> BackendResult<CreatedSale> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Ok => Ok(CreatedSale {
                    id: 501,
                    invoice_number: submission.invoice_number.clone(),
                }),
                _ => self.fail(),
            }
        }
    }

    #[tokio::test]
    async fn test_live_read_is_canonicalized() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        let products = client.search_products(&ProductQuery::all()).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price_cents, 150);
        assert_eq!(products[0].tax_rate_bps, 1000);
        assert!(!client.is_offline());
    }

    #[tokio::test]
    async fn test_unreachable_read_falls_back_and_sets_offline() {
        let client = PosClient::new(FakeBackend::new(Mode::Unreachable));
        let products = client.search_products(&ProductQuery::all()).await.unwrap();

        // Fixture catalog served instead of an error.
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.is_active));
        assert!(client.is_offline());
    }

    #[tokio::test]
    async fn test_offline_read_skips_network() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        client.set_offline(true);

        let products = client.search_products(&ProductQuery::all()).await.unwrap();
        assert!(!products.is_empty());
        assert_eq!(client.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_rejected_read_propagates_without_fallback() {
        let client = PosClient::new(FakeBackend::new(Mode::Rejected));
        let err = client
            .search_products(&ProductQuery::all())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Remote { status: 422, .. }
        ));
        // A server rejection is not a connectivity problem.
        assert!(!client.is_offline());
    }

    #[tokio::test]
    async fn test_fallback_customers_have_live_shape() {
        let client = PosClient::new(FakeBackend::new(Mode::Unreachable));
        let customers = client.customers("").await.unwrap();

        assert!(!customers.is_empty());
        let json = serde_json::to_value(&customers[0]).unwrap();
        for field in ["id", "name", "email", "phone"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }

    #[tokio::test]
    async fn test_fallback_applies_query_filters() {
        let client = PosClient::new(FakeBackend::new(Mode::Unreachable));

        let hits = client
            .search_products(&ProductQuery::search("espresso"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "CAF-ESP");

        let ada = client.customers("ada").await.unwrap();
        assert_eq!(ada.len(), 1);
        assert_eq!(ada[0].name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_overlong_search_rejected_before_any_request() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        let long = "x".repeat(150);

        let err = client
            .search_products(&ProductQuery::search(long.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        let err = client.customers(&long).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        assert_eq!(client.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_term_is_trimmed_before_matching() {
        let client = PosClient::new(FakeBackend::new(Mode::Unreachable));

        // Padding must not defeat the fixture substring match.
        let hits = client
            .search_products(&ProductQuery::search("  espresso "))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "CAF-ESP");
    }

    #[tokio::test]
    async fn test_write_blocked_offline_without_network_call() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        client.set_offline(true);

        let err = client
            .create_customer(&NewCustomer {
                name: "New".into(),
                email: None,
                phone: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::UnavailableOffline { .. }));
        assert_eq!(client.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_write_surfaces_network_error() {
        let client = PosClient::new(FakeBackend::new(Mode::Unreachable));
        let err = client
            .create_customer(&NewCustomer {
                name: "New".into(),
                email: None,
                phone: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Network { .. }));
        assert!(client.is_offline());
    }

    #[tokio::test]
    async fn test_reconnect_clears_offline_mode() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        client.set_offline(true);
        client.set_offline(false);

        let products = client.search_products(&ProductQuery::all()).await.unwrap();
        assert_eq!(products[0].sku, "LIVE-COLA");
        assert_eq!(client.backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_stale_search_result_is_suppressed() {
        let client = PosClient::new(FakeBackend::new(Mode::Ok));
        let sequence = QuerySequence::new();

        let first = sequence.begin();
        // A newer query supersedes the first before it resolves.
        let second = sequence.begin();

        let stale = client
            .search_products_latest(&sequence, &first, &ProductQuery::search("co"))
            .await
            .unwrap();
        assert!(stale.is_none());

        let fresh = client
            .search_products_latest(&sequence, &second, &ProductQuery::search("cola"))
            .await
            .unwrap();
        assert!(fresh.is_some());
    }
}
