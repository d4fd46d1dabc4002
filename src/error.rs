//! Error types for the Orange Money client
//!
//! Transport failures and provider rejections are kept distinct from the
//! client's own response validation, so callers can match on the fixed
//! validation messages without inspecting HTTP internals.

use thiserror::Error;

/// Errors returned by the Orange Money client
#[derive(Error, Debug)]
pub enum OrangeMoneyError {
    /// Transport-level failure from the underlying HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Provider returned status {status}: {body}")]
    Provider {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw response body, as received
        body: String,
    },

    /// The token response carried no usable `access_token`
    #[error("No access token found in response")]
    MissingAccessToken,

    /// The payment response lacked `payment_url` or `notif_token`
    #[error("payment_url or notif_token missing in response")]
    MissingPaymentFields,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OrangeMoneyError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, OrangeMoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_stable() {
        assert_eq!(
            OrangeMoneyError::MissingAccessToken.to_string(),
            "No access token found in response"
        );
        assert_eq!(
            OrangeMoneyError::MissingPaymentFields.to_string(),
            "payment_url or notif_token missing in response"
        );
    }

    #[test]
    fn test_provider_error_carries_status_and_body() {
        let err = OrangeMoneyError::Provider {
            status: 401,
            body: "invalid_client".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid_client"));
    }
}
