//! # POS Session
//!
//! Owns the live cart and drives checkout end to end.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Flow                               │
//! │                                                                     │
//! │  checkout(options)                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  snapshot cart (clone under lock, lock released before I/O)         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  finalize snapshot ── Err ──► cart untouched, error to caller       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  submit to backend ── Err ──► cart untouched, error to caller       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  clear cart, return Receipt                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is cleared only after the backend acknowledges the sale. Any
//! failure along the way leaves the cart exactly as it was, so the cashier
//! can correct the problem and retry.

use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use vela_core::cart::Cart;
use vela_core::sale::{finalize, FinalizeOptions};
use vela_core::PaymentMethod;

use crate::backend::Backend;
use crate::error::ClientResult;
use crate::store::PosClient;

/// Caller-provided checkout inputs.
#[derive(Debug, Clone, Default)]
pub struct CheckoutOptions {
    /// Invoice number override. None means auto-generate.
    pub invoice_number: Option<String>,
    /// Cash received, in cents. Required for cash payment.
    pub tendered_cents: Option<i64>,
}

/// What the cashier sees after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Backend-assigned sale id.
    pub sale_id: i64,
    pub invoice_number: String,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    /// Change due. Zero for non-cash payment.
    pub change_cents: i64,
    pub payment_method: PaymentMethod,
}

/// One cashier session: a cart plus the data-access client.
pub struct PosSession<B: Backend> {
    client: PosClient<B>,
    cart: Mutex<Cart>,
}

impl<B: Backend> PosSession<B> {
    /// Creates a session with an empty cart.
    pub fn new(client: PosClient<B>) -> Self {
        PosSession {
            client,
            cart: Mutex::new(Cart::new()),
        }
    }

    /// The underlying data-access client, for catalog and customer lookups.
    pub fn client(&self) -> &PosClient<B> {
        &self.client
    }

    /// Read access to the cart.
    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Mutable access to the cart.
    pub fn with_cart_mut<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }

    /// Finalizes the cart, submits the sale, and clears the cart on success.
    pub async fn checkout(&self, options: CheckoutOptions) -> ClientResult<Receipt> {
        // Snapshot under the lock; finalization and I/O run lock-free so
        // the cart stays responsive while the request is in flight.
        let snapshot = self.with_cart(|cart| cart.clone());

        let finalize_options = FinalizeOptions {
            invoice_number: options.invoice_number,
            tendered_cents: options.tendered_cents,
        };
        let finalized = finalize(&snapshot, &finalize_options, Utc::now())?;

        let created = self.client.submit_sale(&finalized.submission).await?;

        self.with_cart_mut(|cart| cart.clear());

        let receipt = Receipt {
            sale_id: created.id,
            invoice_number: created.invoice_number,
            subtotal_cents: snapshot.subtotal_cents(),
            tax_cents: finalized.submission.tax_cents,
            discount_cents: finalized.submission.discount_cents,
            total_cents: finalized.submission.total_cents,
            change_cents: finalized.change_cents,
            payment_method: finalized.submission.payment_method,
        };

        info!(
            sale_id = receipt.sale_id,
            invoice = %receipt.invoice_number,
            total_cents = receipt.total_cents,
            change_cents = receipt.change_cents,
            "sale completed"
        );

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
