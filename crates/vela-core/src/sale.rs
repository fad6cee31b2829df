//! # Sale Finalization
//!
//! Converts a cart snapshot into an immutable [`SaleSubmission`] and
//! reconciles payment.
//!
//! ## Finalization Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Finalization Flow                             │
//! │                                                                     │
//! │  Cart snapshot                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  empty? ──────────────────────► SaleError::EmptyCart                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  recompute totals (never trust a cached value)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  cash? ── tendered < total ───► SaleError::InsufficientPayment      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  invoice number: override │ auto "INV-<epoch-millis>"               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  FinalizedSale { submission, change_cents ≥ 0 }                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The submission is built fresh from the cart every time and never mutated
//! afterwards. Per-line discount and tax rate are the values frozen at
//! add-time, not a catalog re-derivation; prices may have been overridden
//! in the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::SaleError;
use crate::types::{PaymentMethod, PaymentStatus};
use crate::validation::validate_invoice_number;

// =============================================================================
// Submission Payload
// =============================================================================

/// One line of the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleLine {
    pub product_id: i64,
    pub quantity: i64,
    /// Unit price in cents as frozen at add-time.
    pub unit_price_cents: i64,
    /// Per-line discount in basis points as frozen at add-time.
    pub discount_bps: u32,
    /// Tax rate in basis points as frozen at add-time.
    pub tax_rate_bps: u32,
    /// Line total including tax.
    pub total_cents: i64,
}

/// The sale record submitted to the backend.
///
/// Built fresh from cart state at finalize time; submitted once; never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleSubmission {
    pub invoice_number: String,
    pub customer_id: Option<i64>,
    /// Grand total after cart discount.
    pub total_cents: i64,
    /// Total tax across all lines.
    pub tax_cents: i64,
    /// Cart-discount amount (not the percent).
    pub discount_cents: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub notes: String,
    pub items: Vec<SaleLine>,
}

/// The result of a successful finalization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalizedSale {
    pub submission: SaleSubmission,
    /// Change due to the customer. Zero for non-cash methods.
    pub change_cents: i64,
}

// =============================================================================
// Finalize Options
// =============================================================================

/// Caller-provided inputs to finalization.
#[derive(Debug, Clone, Default)]
pub struct FinalizeOptions {
    /// Invoice number override. None means auto-generate.
    pub invoice_number: Option<String>,

    /// Cash received from the customer, in cents. Required when the cart's
    /// payment method is cash; ignored otherwise.
    pub tendered_cents: Option<i64>,
}

// =============================================================================
// Finalization
// =============================================================================

/// Validates the cart and builds the submission payload.
///
/// Totals are recomputed from the live cart state at this moment; nothing
/// previously displayed is trusted.
///
/// ## Preconditions
/// 1. The cart has at least one item.
/// 2. For cash payment, `tendered_cents` is present and covers the total.
/// 3. An explicitly provided invoice number passes validation (non-blank,
///    at most 50 characters). An absent one is auto-generated from `now`.
pub fn finalize(
    cart: &Cart,
    options: &FinalizeOptions,
    now: DateTime<Utc>,
) -> Result<FinalizedSale, SaleError> {
    if cart.is_empty() {
        return Err(SaleError::EmptyCart);
    }

    let total_cents = cart.total_cents();

    let change_cents = match cart.payment_method {
        PaymentMethod::Cash => {
            let tendered = options.tendered_cents.unwrap_or(0);
            if tendered < total_cents {
                return Err(SaleError::InsufficientPayment {
                    total_cents,
                    tendered_cents: tendered,
                });
            }
            tendered - total_cents
        }
        _ => 0,
    };

    let invoice_number = match &options.invoice_number {
        Some(provided) => validate_invoice_number(provided)?,
        None => generate_invoice_number(now),
    };

    let submission = SaleSubmission {
        invoice_number,
        customer_id: cart.customer.as_ref().map(|c| c.id),
        total_cents,
        tax_cents: cart.tax_cents(),
        discount_cents: cart.discount_amount_cents(),
        payment_method: cart.payment_method,
        payment_status: PaymentStatus::Paid,
        notes: cart.notes.clone(),
        items: cart
            .items
            .iter()
            .map(|i| SaleLine {
                product_id: i.product_id,
                quantity: i.quantity,
                unit_price_cents: i.unit_price_cents,
                discount_bps: i.discount_bps,
                tax_rate_bps: i.tax_rate_bps,
                total_cents: i.line_total_cents(),
            })
            .collect(),
    };

    Ok(FinalizedSale {
        submission,
        change_cents,
    })
}

/// Generates a time-based default invoice number, e.g. `INV-1724580000000`.
///
/// The cashier may override it before submission.
pub fn generate_invoice_number(now: DateTime<Utc>) -> String {
    format!("INV-{}", now.timestamp_millis())
}

// =============================================================================
// Unit Tests
// =============================================================================
