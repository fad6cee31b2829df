//! # Client Error Type
//!
//! Unified error type for the data-access and session layer.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Error Taxonomy                                │
//! │                                                                     │
//! │  Sale(..)              finalization failures (empty cart,           │
//! │                        insufficient payment) - raised before any    │
//! │                        network call, never retried automatically    │
//! │                                                                     │
//! │  Validation(..)        caller input rejected at the boundary        │
//! │                        (e.g. overlong search query); no request     │
//! │                        is ever made                                 │
//! │                                                                     │
//! │  Network { .. }        timeout / connection aborted / no response;  │
//! │                        reads fall back to fixtures instead of       │
//! │                        raising this, writes surface it              │
//! │                                                                     │
//! │  Remote { .. }         4xx/5xx with a server-provided message;      │
//! │                        propagated unchanged, no fallback            │
//! │                                                                     │
//! │  UnavailableOffline    a write attempted while offline mode is      │
//! │                        active; fails before touching the network    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant renders to a display string; the UI layer shows exactly
//! that message. Nothing here is swallowed silently except the logged
//! fallback substitution in the store.

use thiserror::Error;
use vela_core::{SaleError, ValidationError};

/// Errors surfaced by [`crate::store::PosClient`] and
/// [`crate::session::PosSession`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Finalization precondition failed. The cart is untouched.
    #[error(transparent)]
    Sale(#[from] SaleError),

    /// Caller input rejected before any request was made.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The backend could not be reached (timeout, aborted connection,
    /// no response object).
    #[error("Could not reach the server: {message}")]
    Network { message: String },

    /// The backend answered with an error status and a message body.
    #[error("Server error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// A write operation was attempted while offline mode is active.
    #[error("{operation} is unavailable offline")]
    UnavailableOffline { operation: &'static str },
}

/// Convenience alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_presentable() {
        let err = ClientError::UnavailableOffline {
            operation: "create_customer",
        };
        assert_eq!(err.to_string(), "create_customer is unavailable offline");

        let err = ClientError::Remote {
            status: 422,
            message: "invoice_number already exists".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server error (422): invoice_number already exists"
        );
    }

    #[test]
    fn test_sale_error_passthrough() {
        let err: ClientError = SaleError::EmptyCart.into();
        assert_eq!(err.to_string(), "Cannot finalize an empty cart");
    }
}
