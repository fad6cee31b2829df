//! # Backend Seam
//!
//! The remote REST collaborator, consumed as a black box behind a trait.
//!
//! ## Endpoints Covered
//! ```text
//! GET  /products?search=&category_id=&barcode=   search_products
//! GET  /customers?search=                        list_customers
//! POST /customers                                create_customer   (write)
//! POST /sales                                    submit_sale       (write)
//! ```
//!
//! Implementations live outside this crate (the HTTP transport is not part
//! of the covered core); tests use an in-memory double. What this module
//! does own is the **wire shape** and its one-time normalization into
//! canonical `vela-core` types, immediately after fetch:
//!
//! - decimal prices and percent tax rates become cents and basis points;
//! - the `name` vs `first_name`/`last_name` customer split is resolved once
//!   here, so no downstream call site ever branches on field spelling.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vela_core::{Customer, Product, Rate, SaleSubmission};

// =============================================================================
// Backend Error
// =============================================================================

/// How a backend call failed.
///
/// The distinction drives the offline-fallback decision in the store:
/// `Unreachable` means the network itself failed (fall back for reads);
/// `Rejected` means the server answered and said no (never fall back).
#[derive(Debug, Error)]
pub enum BackendError {
    /// Timeout, connection aborted, or no response at all.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The server responded with an error status and message body.
    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Convenience alias for backend call results.
pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Queries
// =============================================================================

/// Filter parameters for a product search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Substring match against name and SKU.
    pub search: String,
    /// Restrict to one category.
    pub category_id: Option<i64>,
    /// Exact barcode lookup; takes precedence over `search` when set.
    pub barcode: Option<String>,
}

impl ProductQuery {
    /// Query matching everything (the default POS grid).
    pub fn all() -> Self {
        ProductQuery::default()
    }

    /// Substring search by name or SKU.
    pub fn search(term: impl Into<String>) -> Self {
        ProductQuery {
            search: term.into(),
            ..Default::default()
        }
    }

    /// Exact barcode lookup.
    pub fn barcode(code: impl Into<String>) -> Self {
        ProductQuery {
            barcode: Some(code.into()),
            ..Default::default()
        }
    }

    /// Whether a product matches this query.
    ///
    /// Used verbatim by the fixture fallback so offline results behave like
    /// live ones.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if let Some(barcode) = &self.barcode {
            return product.barcode.as_deref() == Some(barcode.as_str());
        }
        if let Some(category_id) = self.category_id {
            if product.category_id != Some(category_id) {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.sku.to_lowercase().contains(&needle)
    }
}

// =============================================================================
// Wire Records
// =============================================================================

/// A product exactly as the REST backend emits it: decimal price, percent
/// tax rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    /// Decimal price, e.g. 10.99.
    pub price: f64,
    /// Tax rate as a percentage, e.g. 8.25. Absent means untaxed.
    pub tax_rate: Option<f64>,
    pub category_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl ProductRecord {
    /// Normalizes the wire shape into the canonical product type.
    ///
    /// This is the only place decimal money enters the system; everything
    /// past this point is integer cents.
    pub fn canonicalize(self) -> Product {
        Product {
            id: self.id,
            sku: self.sku,
            barcode: self.barcode,
            name: self.name,
            price_cents: cents_from_decimal(self.price),
            tax_rate_bps: Rate::from_percent(self.tax_rate.unwrap_or(0.0)).bps(),
            category_id: self.category_id,
            is_active: self.is_active,
        }
    }
}

/// A customer as the REST backend emits it. Some endpoints send `name`,
/// others send `first_name`/`last_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerRecord {
    /// Resolves the display-name split into the canonical customer shape.
    pub fn canonicalize(self) -> Customer {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                let first = self.first_name.as_deref().unwrap_or("").trim();
                let last = self.last_name.as_deref().unwrap_or("").trim();
                format!("{} {}", first, last).trim().to_string()
            }
        };
        Customer {
            id: self.id,
            name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Payload for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The backend's response to a submitted sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSale {
    /// Backend-generated sale id.
    pub id: i64,
    pub invoice_number: String,
}

// =============================================================================
// Backend Trait
// =============================================================================

/// The remote backend, one async method per covered endpoint.
///
/// Reads return wire records; the store canonicalizes them immediately.
/// Writes are never given fallback behaviour by the store.
pub trait Backend: Send + Sync {
    fn search_products(
        &self,
        query: &ProductQuery,
    ) -> impl std::future::Future<Output = BackendResult<Vec<ProductRecord>>> + Send;

    fn list_customers(
        &self,
        search: &str,
    ) -> impl std::future::Future<Output = BackendResult<Vec<CustomerRecord>>> + Send;

    fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> impl std::future::Future<Output = BackendResult<CustomerRecord>> + Send;

    fn submit_sale(
        &self,
        submission: &SaleSubmission,
    ) -> impl std::future::Future<Output = BackendResult<CreatedSale>> + Send;
}

// =============================================================================
// Decimal Conversion
// =============================================================================

/// Converts a decimal wire amount to cents, half-up.
pub fn cents_from_decimal(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, first: Option<&str>, last: Option<&str>) -> CustomerRecord {
        CustomerRecord {
            id: 1,
            name: name.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            email: Some("a@example.com".into()),
            phone: None,
        }
    }

    #[test]
    fn test_cents_from_decimal() {
        assert_eq!(cents_from_decimal(10.99), 1099);
        assert_eq!(cents_from_decimal(5.0), 500);
        assert_eq!(cents_from_decimal(0.005), 1);
        assert_eq!(cents_from_decimal(0.0), 0);
    }

    #[test]
    fn test_product_canonicalize() {
        let p = ProductRecord {
            id: 3,
            name: "Espresso".into(),
            sku: "CAF-001".into(),
            barcode: Some("7501234567890".into()),
            price: 2.5,
            tax_rate: Some(8.25),
            category_id: Some(2),
            is_active: true,
        }
        .canonicalize();

        assert_eq!(p.price_cents, 250);
        assert_eq!(p.tax_rate_bps, 825);
    }

    #[test]
    fn test_product_missing_tax_rate_is_zero() {
        let p = ProductRecord {
            id: 1,
            name: "Bread".into(),
            sku: "BAK-01".into(),
            barcode: None,
            price: 1.2,
            tax_rate: None,
            category_id: None,
            is_active: true,
        }
        .canonicalize();
        assert_eq!(p.tax_rate_bps, 0);
    }

    #[test]
    fn test_customer_canonicalize_prefers_name() {
        let c = record(Some("Ada Lovelace"), Some("ignored"), None).canonicalize();
        assert_eq!(c.name, "Ada Lovelace");
    }

    #[test]
    fn test_customer_canonicalize_joins_split_names() {
        let c = record(None, Some("Grace"), Some("Hopper")).canonicalize();
        assert_eq!(c.name, "Grace Hopper");

        let c = record(Some("   "), Some("Grace"), None).canonicalize();
        assert_eq!(c.name, "Grace");
    }

    #[test]
    fn test_query_matches_search_and_barcode() {
        let p = ProductRecord {
            id: 1,
            name: "Cola 330ml".into(),
            sku: "BEV-COLA".into(),
            barcode: Some("123456789012".into()),
            price: 1.0,
            tax_rate: None,
            category_id: Some(4),
            is_active: true,
        }
        .canonicalize();

        assert!(ProductQuery::all().matches(&p));
        assert!(ProductQuery::search("cola").matches(&p));
        assert!(ProductQuery::search("bev-").matches(&p));
        assert!(!ProductQuery::search("tea").matches(&p));
        assert!(ProductQuery::barcode("123456789012").matches(&p));
        assert!(!ProductQuery::barcode("000000000000").matches(&p));

        let in_category = ProductQuery {
            category_id: Some(4),
            ..Default::default()
        };
        assert!(in_category.matches(&p));
    }
}
