//! Core types for the Orange Money Web Payment API
//!
//! This module defines the client configuration, the payment-link request and
//! result value types, and the wire-level structures exchanged with the
//! provider.
//!
//! # Examples
//!
//! ## Creating a client configuration
//!
//! ```
//! use orange_money::ClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> orange_money::Result<()> {
//! let config = ClientConfig::new(
//!     "dXNlcjpwYXNz",                          // pre-encoded Basic credential
//!     "https://api.orange.com/oauth/v3/token", // token endpoint
//!     "https://api.orange.com/orange-money-webpay/dev/v1/webpayment",
//! )
//! .with_timeout(Duration::from_secs(30));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a payment-link request
//!
//! ```
//! use orange_money::PaymentLinkRequest;
//!
//! let request = PaymentLinkRequest::new(
//!     "merchant-key-123",
//!     "order-123",
//!     1000.0,
//!     "https://example.com/success",
//!     "https://example.com/cancel",
//!     "https://example.com/notify",
//! )
//! .with_currency("XOF");
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::{OrangeMoneyError, Result};

/// Currency applied when the caller does not provide one
pub const DEFAULT_CURRENCY: &str = "XOF";

/// Language sent on every payment request
pub const PAYMENT_LANG: &str = "fr";

/// Reference sent on every payment request, fixed by the provider integration
pub const PAYMENT_REFERENCE: &str = "MyReference";

/// Client configuration for the Orange Money Web Payment API
#[derive(Clone)]
pub struct ClientConfig {
    /// Pre-encoded Basic-auth credential (the caller encodes it)
    pub basic_token: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    /// Payment request endpoint
    pub payment_url: String,
    /// Request timeout applied to every call
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("basic_token", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("payment_url", &self.payment_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(
        basic_token: impl Into<String>,
        token_url: impl Into<String>,
        payment_url: impl Into<String>,
    ) -> Self {
        Self {
            basic_token: basic_token.into(),
            token_url: token_url.into(),
            payment_url: payment_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.basic_token.is_empty() {
            return Err(OrangeMoneyError::config("Basic token cannot be empty"));
        }

        Self::validate_url("Token URL", &self.token_url)?;
        Self::validate_url("Payment URL", &self.payment_url)?;

        Ok(())
    }

    fn validate_url(name: &str, value: &str) -> Result<()> {
        let parsed = Url::parse(value)
            .map_err(|e| OrangeMoneyError::config(format!("{} is not a valid URL: {}", name, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(OrangeMoneyError::config(format!(
                "{} must use http or https, got {}",
                name, other
            ))),
        }
    }
}

/// Input for a payment-link request
///
/// The request is consumed by a single call and never retained by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLinkRequest {
    /// Merchant key issued by the provider
    pub merchant_key: String,
    /// Merchant-side order identifier
    pub order_id: String,
    /// Order total, in the request currency
    pub total_price: f64,
    /// ISO currency code; defaults to [`DEFAULT_CURRENCY`] when absent
    pub currency: Option<String>,
    /// URL the customer is sent to after a successful payment
    pub return_url: String,
    /// URL the customer is sent to after cancelling
    pub cancel_url: String,
    /// URL the provider notifies about payment status
    pub notif_url: String,
}

impl PaymentLinkRequest {
    /// Create a new payment-link request
    pub fn new(
        merchant_key: impl Into<String>,
        order_id: impl Into<String>,
        total_price: f64,
        return_url: impl Into<String>,
        cancel_url: impl Into<String>,
        notif_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_key: merchant_key.into(),
            order_id: order_id.into(),
            total_price,
            currency: None,
            return_url: return_url.into(),
            cancel_url: cancel_url.into(),
            notif_url: notif_url.into(),
        }
    }

    /// Set an explicit currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// A hosted payment link returned by the provider
///
/// Both fields are guaranteed non-empty: the client rejects any provider
/// response missing either one before constructing this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Provider-hosted URL the customer is redirected to
    pub payment_url: String,
    /// Opaque token authenticating asynchronous status notifications
    pub notif_token: String,
}

/// Wire body of the payment request, using the provider's field names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequestBody {
    /// Merchant key issued by the provider
    pub merchant_key: String,
    /// ISO currency code
    pub currency: String,
    /// Merchant-side order identifier
    pub order_id: String,
    /// Order total
    pub amount: f64,
    /// Post-payment redirect URL
    pub return_url: String,
    /// Cancellation redirect URL
    pub cancel_url: String,
    /// Status notification URL
    pub notif_url: String,
    /// Always [`PAYMENT_LANG`]
    pub lang: String,
    /// Always [`PAYMENT_REFERENCE`]
    pub reference: String,
}

impl PaymentRequestBody {
    /// Build the wire body from a request, resolving the default currency
    pub fn from_request(request: &PaymentLinkRequest) -> Self {
        Self {
            merchant_key: request.merchant_key.clone(),
            currency: request
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            order_id: request.order_id.clone(),
            amount: request.total_price,
            return_url: request.return_url.clone(),
            cancel_url: request.cancel_url.clone(),
            notif_url: request.notif_url.clone(),
            lang: PAYMENT_LANG.to_string(),
            reference: PAYMENT_REFERENCE.to_string(),
        }
    }
}

/// Wire body of the token response
///
/// `token_type` and `expires_in` are deliberately not modeled; the token is
/// used once and discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    /// Bearer access token, when the provider issued one
    pub access_token: Option<String>,
}

/// Wire body of the payment response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentResponse {
    /// Hosted payment URL
    pub payment_url: Option<String>,
    /// Notification token
    pub notif_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_request() -> PaymentLinkRequest {
        PaymentLinkRequest::new(
            "merchant-key-123",
            "order-123",
            1000.0,
            "https://example.com/success",
            "https://example.com/cancel",
            "https://example.com/notify",
        )
    }

    #[test]
    fn test_config_validation_accepts_valid_config() {
        let config = ClientConfig::new(
            "basic-token-123",
            "https://api.example.com/token",
            "https://api.example.com/payment",
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_empty_basic_token() {
        let config = ClientConfig::new(
            "",
            "https://api.example.com/token",
            "https://api.example.com/payment",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Basic token"));
    }

    #[test]
    fn test_config_validation_rejects_malformed_url() {
        let config = ClientConfig::new(
            "basic-token-123",
            "not a url",
            "https://api.example.com/payment",
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_non_http_scheme() {
        let config = ClientConfig::new(
            "basic-token-123",
            "https://api.example.com/token",
            "ftp://api.example.com/payment",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_config_debug_redacts_credential() {
        let config = ClientConfig::new(
            "super-secret",
            "https://api.example.com/token",
            "https://api.example.com/payment",
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_config_with_timeout() {
        let config = ClientConfig::new(
            "basic-token-123",
            "https://api.example.com/token",
            "https://api.example.com/payment",
        )
        .with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_request_body_resolves_default_currency() {
        let body = PaymentRequestBody::from_request(&test_request());
        assert_eq!(body.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_request_body_keeps_explicit_currency() {
        let request = test_request().with_currency("EUR");
        let body = PaymentRequestBody::from_request(&request);
        assert_eq!(body.currency, "EUR");
    }

    #[test]
    fn test_request_body_wire_format() {
        let body = PaymentRequestBody::from_request(&test_request());
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "merchant_key": "merchant-key-123",
                "currency": "XOF",
                "order_id": "order-123",
                "amount": 1000.0,
                "return_url": "https://example.com/success",
                "cancel_url": "https://example.com/cancel",
                "notif_url": "https://example.com/notify",
                "lang": "fr",
                "reference": "MyReference",
            })
        );
    }

    #[test]
    fn test_token_response_ignores_extra_fields() {
        let response: TokenResponse = serde_json::from_value(json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600,
        }))
        .unwrap();
        assert_eq!(response.access_token.as_deref(), Some("tok"));
    }
}
