//! OAuth2 client-credentials token exchange
//!
//! The provider issues short-lived bearer tokens against a pre-encoded
//! Basic-auth credential. A token is fetched per call chain and never cached;
//! `token_type` and `expires_in` in the response are ignored.

use reqwest::header::AUTHORIZATION;

use crate::types::TokenResponse;
use crate::{OrangeMoneyError, Result};

/// Exchange Basic-auth client credentials for a bearer access token
///
/// Issues a form-encoded `grant_type=client_credentials` POST to `token_url`.
/// Transport failures propagate unchanged; a response body without a
/// non-empty `access_token` fails with
/// [`OrangeMoneyError::MissingAccessToken`].
pub async fn fetch_access_token(
    http: &reqwest::Client,
    token_url: &str,
    basic_token: &str,
) -> Result<String> {
    tracing::debug!("Requesting access token from: {}", token_url);

    let response = http
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {}", basic_token))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        tracing::error!(
            "Token request failed with status: {}. Response body: {}",
            status,
            body
        );
        return Err(OrangeMoneyError::Provider {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;

    // A non-object body or a wrong-typed field counts the same as an absent
    // token, as does an empty string.
    serde_json::from_str::<TokenResponse>(&text)
        .ok()
        .and_then(|body| body.access_token)
        .filter(|token| !token.is_empty())
        .ok_or(OrangeMoneyError::MissingAccessToken)
}
