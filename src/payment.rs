//! Payment-link generation
//!
//! Posts an order to the provider's web-payment endpoint and extracts the
//! hosted payment URL and notification token from the response.

use reqwest::header::AUTHORIZATION;

use crate::types::{PaymentLink, PaymentLinkRequest, PaymentRequestBody, PaymentResponse};
use crate::{OrangeMoneyError, Result};

/// Request a hosted payment link for an order
///
/// Issues a JSON POST to `payment_url` authorized with the bearer token.
/// Transport failures propagate unchanged; a response body without both a
/// non-empty `payment_url` and a non-empty `notif_token` fails with
/// [`OrangeMoneyError::MissingPaymentFields`].
pub async fn generate_payment_link(
    http: &reqwest::Client,
    access_token: &str,
    payment_url: &str,
    request: &PaymentLinkRequest,
) -> Result<PaymentLink> {
    let body = PaymentRequestBody::from_request(request);

    tracing::debug!(
        "Payment request body: {}",
        serde_json::to_string_pretty(&body).unwrap_or_default()
    );
    tracing::debug!("Sending payment request to: {}", payment_url);

    let response = http
        .post(payment_url)
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        tracing::error!(
            "Payment request failed with status: {}. Response body: {}",
            status,
            body
        );
        return Err(OrangeMoneyError::Provider {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    let decoded = serde_json::from_str::<PaymentResponse>(&text).unwrap_or_default();

    // Either field absent or empty is enough to reject; other response
    // fields are discarded.
    let payment_url = decoded.payment_url.filter(|url| !url.is_empty());
    let notif_token = decoded.notif_token.filter(|token| !token.is_empty());

    match (payment_url, notif_token) {
        (Some(payment_url), Some(notif_token)) => Ok(PaymentLink {
            payment_url,
            notif_token,
        }),
        _ => Err(OrangeMoneyError::MissingPaymentFields),
    }
}
