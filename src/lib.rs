//! # Orange Money Rust SDK
//!
//! A minimal, type-safe Rust client for the Orange Money Web Payment API.
//!
//! ## Features
//!
//! - **Token exchange**: OAuth2 client-credentials flow against a pre-encoded
//!   Basic-auth credential
//! - **Payment links**: request a provider-hosted payment URL plus a
//!   notification token for an order
//! - **Typed errors**: transport failures, provider rejections, and response
//!   validation kept distinct
//! - **No hidden state**: no token caching, no retries; every call is
//!   self-contained
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orange_money::{ClientConfig, OrangeMoneyClient, PaymentLinkRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new(
//!         "dXNlcjpwYXNz", // Basic-auth credential, encoded by the caller
//!         "https://api.orange.com/oauth/v3/token",
//!         "https://api.orange.com/orange-money-webpay/dev/v1/webpayment",
//!     );
//!     let client = OrangeMoneyClient::new(config)?;
//!
//!     let request = PaymentLinkRequest::new(
//!         "merchant-key-123",
//!         "order-123",
//!         1000.0,
//!         "https://example.com/success",
//!         "https://example.com/cancel",
//!         "https://example.com/notify",
//!     );
//!
//!     let link = client.create_payment_link(&request).await?;
//!     println!("Payment link: {}", link.payment_url);
//!     println!("Notification token: {}", link.notif_token);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **`types`**: configuration, request/result value types, and wire bodies
//! - **`auth`**: OAuth2 client-credentials token exchange
//! - **`payment`**: payment-link generation
//! - **`client`**: the facade sequencing token fetch and payment call
//! - **`error`**: error handling
//!
//! ## Call Flow
//!
//! [`OrangeMoneyClient::create_payment_link`] performs two sequential network
//! round trips: a token fetch, then the payment request carrying that token.
//! A token failure short-circuits the chain; the payment endpoint is never
//! contacted. Tokens are never cached across calls.

pub mod auth;
pub mod client;
pub mod error;
pub mod payment;
pub mod types;

// Re-exports for convenience
pub use client::OrangeMoneyClient;
pub use error::{OrangeMoneyError, Result};
pub use types::{
    ClientConfig, PaymentLink, PaymentLinkRequest, DEFAULT_CURRENCY, PAYMENT_LANG,
    PAYMENT_REFERENCE,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        // VERSION is a const string, so it's never empty
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_wire_constants() {
        assert_eq!(DEFAULT_CURRENCY, "XOF");
        assert_eq!(PAYMENT_LANG, "fr");
        assert_eq!(PAYMENT_REFERENCE, "MyReference");
    }
}
