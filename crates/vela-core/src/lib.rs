//! # vela-core: Pure Business Logic for Vela POS
//!
//! The heart of the POS client: all sale arithmetic and cart rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Vela POS Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (single-page UI)                  │   │
//! │  │     Search UI ──► Cart UI ──► Payment UI ──► Receipt        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                  vela-client (session + data access)        │   │
//! │  │     PosSession, PosClient, offline fallback, fixtures      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                ★ vela-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐   │   │
//! │  │  │  types   │ │  money   │ │   cart   │ │     sale     │   │   │
//! │  │  │ Product  │ │  Money   │ │   Cart   │ │ finalize()   │   │   │
//! │  │  │ Customer │ │  Rate    │ │ LineItem │ │ Submission   │   │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────────┘   │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output, always
//! 2. **No I/O**: network, file system, and async code are forbidden here
//! 3. **Integer money**: all monetary values are cents (i64), rates are
//!    basis points; one half-up rounding kernel
//! 4. **Explicit errors**: typed errors, never strings or panics
//!
//! ## Example
//!
//! ```rust
//! use vela_core::cart::Cart;
//! use vela_core::types::Product;
//!
//! let product = Product {
//!     id: 1,
//!     sku: "COLA-330".into(),
//!     barcode: None,
//!     name: "Cola 330ml".into(),
//!     price_cents: 1000,
//!     tax_rate_bps: 1000, // 10%
//!     category_id: None,
//!     is_active: true,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2).unwrap();
//!
//! // $10.00 × 2 at 10% tax = $22.00
//! assert_eq!(cart.total_cents(), 2200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, SaleError, ValidationError};
pub use money::Money;
pub use sale::{finalize, FinalizeOptions, FinalizedSale, SaleLine, SaleSubmission};
pub use types::{Customer, PaymentMethod, PaymentStatus, Product, Rate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transaction sizes reasonable.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
