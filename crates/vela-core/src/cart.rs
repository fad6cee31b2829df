//! # Cart State Container
//!
//! The in-progress sale: line items, customer, cart-level discount, payment
//! method, notes.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Operations                          │
//! │                                                                     │
//! │  UI Event                 Operation                State Change     │
//! │  ────────                 ─────────                ────────────     │
//! │                                                                     │
//! │  Click Product ─────────► add_item() ────────────► merge or push    │
//! │                                                                     │
//! │  Change Quantity ───────► update_quantity() ─────► qty = max(n, 1)  │
//! │                                                                     │
//! │  Click Remove ──────────► remove_item() ─────────► retain != id     │
//! │                                                                     │
//! │  Apply Discount ────────► set_discount_percent() ► clamp [0, 100]   │
//! │                                                                     │
//! │  Sale Submitted ────────► clear() ───────────────► initial state    │
//! │                                                                     │
//! │  Totals are DERIVED on every read. Nothing caches them.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product_id` (adding the same product merges)
//! - Quantity is always ≥ 1 (attempts to set lower clamp to 1)
//! - `discount_bps` is always within [0, 10000] (clamped on write)
//! - Every total is recomputed from `items` + `discount_bps`; no line or
//!   cart total is ever stored, so they cannot drift from their inputs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Customer, PaymentMethod, Product, Rate};
use crate::validation::{validate_price_cents, validate_quantity, validate_rate_bps};
use crate::MAX_CART_ITEMS;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// Price, tax rate, and per-line discount are captured when the product is
/// added. If the catalog changes afterwards, this line keeps what the
/// cashier saw; the submission payload carries these frozen values, not a
/// re-derived catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product id (backend-assigned).
    pub product_id: i64,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Per-line discount in basis points. Defaults to 0 and is carried
    /// through to the submission untouched.
    pub discount_bps: u32,

    /// Tax rate in basis points at time of adding (frozen).
    pub tax_rate_bps: u32,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from a product snapshot.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            quantity: quantity.max(1),
            unit_price_cents: product.price().cents(),
            discount_bps: 0,
            tax_rate_bps: product.tax_rate().bps(),
            added_at: Utc::now(),
        }
    }

    /// Pre-tax line amount (unit price × quantity). Exact, no rounding.
    pub fn line_base_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Tax amount for this line, rounded half-up.
    pub fn tax_cents(&self) -> i64 {
        Money::from_cents(self.line_base_cents())
            .round_fraction(self.tax_rate_bps)
            .cents()
    }

    /// Line total including tax: `unit_price × qty × (1 + tax_rate)`.
    pub fn line_total_cents(&self) -> i64 {
        self.line_base_cents() + self.tax_cents()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one POS session.
///
/// The cart has no concept of "ready to submit": emptiness and payment
/// sufficiency are checked by sale finalization, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Line items, unique by product id, in the order they were added.
    pub items: Vec<LineItem>,

    /// Optional customer attached to the sale ("walk-in" when None).
    pub customer: Option<Customer>,

    /// Cart-level discount in basis points, clamped into [0, 10000].
    pub discount_bps: u32,

    /// Selected payment method, defaults to cash.
    pub payment_method: PaymentMethod,

    /// Free-text notes for the sale.
    pub notes: String,
}

impl Cart {
    /// Creates a new empty cart with default payment method (cash).
    pub fn new() -> Self {
        Cart::default()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product or increments the existing line's quantity.
    ///
    /// ## Behavior
    /// - The product snapshot is validated first: a negative price or a tax
    ///   rate over 100% never enters the cart.
    /// - Quantity below 1 is treated as 1; above the per-line maximum it is
    ///   rejected.
    /// - Same product already in cart: its quantity is incremented; a second
    ///   line is never created.
    /// - New product: appended with `discount_bps = 0` and the product's tax
    ///   rate frozen in.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_price_cents(product.price_cents)?;
        validate_rate_bps(product.tax_rate_bps)?;

        let quantity = quantity.max(1);

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            validate_quantity(new_qty)?;
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }
        validate_quantity(quantity)?;

        self.items.push(LineItem::from_product(product, quantity));
        Ok(())
    }

    /// Sets a line's quantity, clamping anything below 1 up to 1.
    ///
    /// Zero does NOT remove the line; removal is an explicit, separate
    /// operation. Unknown product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> CoreResult<()> {
        let quantity = quantity.max(1);
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
        Ok(())
    }

    /// Removes a line by product id. No-op if not present.
    pub fn remove_item(&mut self, product_id: i64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Attaches or detaches the customer.
    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    /// Sets the cart-level discount, clamped into [0%, 100%].
    pub fn set_discount_percent(&mut self, percent: f64) {
        self.discount_bps = Rate::from_percent_clamped(percent).bps();
    }

    /// Sets the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Sets the free-text notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Resets to the initial state: no items, no customer, 0 discount,
    /// cash payment, empty notes.
    pub fn clear(&mut self) {
        *self = Cart::default();
    }

    // -------------------------------------------------------------------------
    // Derived Totals
    // -------------------------------------------------------------------------
    // Recomputed on every call. There is deliberately no cached total to
    // invalidate.

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal: Σ unit price × quantity (pre-tax, pre-discount).
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_base_cents()).sum()
    }

    /// Total tax across all lines.
    pub fn tax_cents(&self) -> i64 {
        self.items.iter().map(|i| i.tax_cents()).sum()
    }

    /// Gross amount: Σ line totals (tax included, before cart discount).
    pub fn gross_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Cart-discount amount in cents, rounded half-up.
    pub fn discount_amount_cents(&self) -> i64 {
        Money::from_cents(self.gross_cents())
            .round_fraction(self.discount_bps)
            .cents()
    }

    /// Grand total: gross − discount amount.
    ///
    /// Subtracting the rounded discount (rather than rounding the
    /// post-discount product) keeps `total + discount == gross` exact.
    /// On a half-cent tie the two forms differ by 1 cent (5¢ gross at
    /// 10% → discount 1¢, total 4¢; rounding 4.5¢ directly would give 5¢);
    /// the tie rounds into the discount, in the customer's favour.
    pub fn total_cents(&self) -> i64 {
        self.gross_cents() - self.discount_amount_cents()
    }

    /// Checks if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
