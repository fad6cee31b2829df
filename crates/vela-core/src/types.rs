//! # Domain Types
//!
//! Core domain types used throughout Vela POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    Customer    │   │      Rate      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (i64)      │   │  id (i64)      │   │  bps (u32)     │      │
//! │  │  sku           │   │  name          │   │  825 = 8.25%   │      │
//! │  │  price_cents   │   │  email?        │   └────────────────┘      │
//! │  │  tax_rate_bps  │   │  phone?        │                           │
//! │  └────────────────┘   └────────────────┘                           │
//! │                                                                     │
//! │  ┌────────────────────┐    ┌────────────────┐                      │
//! │  │   PaymentMethod    │    │ PaymentStatus  │                      │
//! │  │  ────────────────  │    │  ────────────  │                      │
//! │  │  Cash (default)    │    │  Paid          │                      │
//! │  │  CreditCard        │    └────────────────┘                      │
//! │  │  DebitCard         │                                            │
//! │  │  BankTransfer      │                                            │
//! │  └────────────────────┘                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are backend-assigned integers; this client never mints ids.
//! `Customer` is the single canonical customer shape: the data-access layer
//! normalizes whatever the wire carries into it once, immediately after
//! fetch, so nothing downstream branches on field spelling.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. 825 bps = 8.25%. Integer rates keep the
/// arithmetic exact; both tax rates and discounts use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage. Negative input becomes 0%.
    pub fn from_percent(pct: f64) -> Self {
        Rate((pct.max(0.0) * 100.0).round() as u32)
    }

    /// Creates a rate from a percentage, clamped into [0%, 100%].
    ///
    /// Used for cart discounts, where any out-of-range input is clamped on
    /// write rather than rejected.
    ///
    /// ## Example
    /// ```rust
    /// use vela_core::types::Rate;
    ///
    /// assert_eq!(Rate::from_percent_clamped(150.0).bps(), 10000);
    /// assert_eq!(Rate::from_percent_clamped(-10.0).bps(), 0);
    /// ```
    pub fn from_percent_clamped(pct: f64) -> Self {
        Rate((pct.clamp(0.0, 100.0) * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale, as the catalog exposes it to the POS screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: i64,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Barcode (EAN-13, UPC-A, etc.).
    pub barcode: Option<String>,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Tax rate in basis points (825 = 8.25%).
    pub tax_rate_bps: u32,

    /// Category for the POS grid filter.
    pub category_id: Option<i64>,

    /// Whether the product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> Rate {
        Rate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The canonical customer summary attached to a cart.
///
/// Whatever split the wire uses (`name` vs `first_name`/`last_name`), the
/// data-access layer folds it into this shape at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// Only `Cash` carries tender reconciliation (amount received, change due);
/// the card and transfer methods settle externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement status recorded on a submission.
///
/// The POS only submits settled sales; deferred-payment flows live elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Paid
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percent() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_rate_from_percent() {
        assert_eq!(Rate::from_percent(8.25).bps(), 825);
        assert_eq!(Rate::from_percent(-3.0).bps(), 0);
    }

    #[test]
    fn test_rate_clamping() {
        assert_eq!(Rate::from_percent_clamped(150.0).bps(), 10000);
        assert_eq!(Rate::from_percent_clamped(-10.0).bps(), 0);
        assert_eq!(Rate::from_percent_clamped(12.5).bps(), 1250);
    }

    #[test]
    fn test_product_typed_accessors() {
        let product = Product {
            id: 1,
            sku: "CAF-ESP".into(),
            barcode: None,
            name: "Espresso".into(),
            price_cents: 250,
            tax_rate_bps: 825,
            category_id: None,
            is_active: true,
        };

        assert_eq!(product.price(), Money::from_cents(250));
        assert_eq!(product.tax_rate(), Rate::from_bps(825));
    }

    #[test]
    fn test_payment_method_wire_names() {
        // The backend expects these exact strings.
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit_card\"");
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
    }

    #[test]
    fn test_payment_method_default_is_cash() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }
}
