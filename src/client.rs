//! Client facade for the Orange Money Web Payment API
//!
//! [`OrangeMoneyClient`] holds the endpoint and credential configuration and
//! sequences the two provider calls: token exchange, then payment-link
//! generation. Nothing is cached between calls; every
//! [`create_payment_link`](OrangeMoneyClient::create_payment_link)
//! re-authenticates from scratch, so concurrent calls on one client are
//! independent.
//!
//! # Examples
//!
//! ```no_run
//! use orange_money::{ClientConfig, OrangeMoneyClient, PaymentLinkRequest};
//!
//! # async fn example() -> orange_money::Result<()> {
//! let config = ClientConfig::new(
//!     "dXNlcjpwYXNz",
//!     "https://api.orange.com/oauth/v3/token",
//!     "https://api.orange.com/orange-money-webpay/dev/v1/webpayment",
//! );
//! let client = OrangeMoneyClient::new(config)?;
//!
//! let request = PaymentLinkRequest::new(
//!     "merchant-key-123",
//!     "order-123",
//!     1000.0,
//!     "https://example.com/success",
//!     "https://example.com/cancel",
//!     "https://example.com/notify",
//! );
//!
//! let link = client.create_payment_link(&request).await?;
//! println!("Redirect customer to: {}", link.payment_url);
//! # Ok(())
//! # }
//! ```

use crate::types::{ClientConfig, PaymentLink, PaymentLinkRequest};
use crate::{auth, payment, OrangeMoneyError, Result};

/// Client for the Orange Money Web Payment API
#[derive(Debug, Clone)]
pub struct OrangeMoneyClient {
    /// Endpoint and credential configuration
    config: ClientConfig,
    /// Shared HTTP client
    http: reqwest::Client,
}

impl OrangeMoneyClient {
    /// Create a new client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| OrangeMoneyError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Fetch a fresh bearer access token
    ///
    /// No memoization: each call performs the full client-credentials
    /// exchange.
    pub async fn get_token(&self) -> Result<String> {
        auth::fetch_access_token(&self.http, &self.config.token_url, &self.config.basic_token).await
    }

    /// Create a hosted payment link for an order
    ///
    /// Fetches a token, then posts the payment request with it. A token
    /// failure short-circuits; the payment endpoint is never contacted.
    pub async fn create_payment_link(&self, request: &PaymentLinkRequest) -> Result<PaymentLink> {
        let token = self.get_token().await?;
        payment::generate_payment_link(&self.http, &token, &self.config.payment_url, request).await
    }

    /// Get the configured token endpoint
    pub fn token_url(&self) -> &str {
        &self.config.token_url
    }

    /// Get the configured payment endpoint
    pub fn payment_url(&self) -> &str {
        &self.config.payment_url
    }
}
