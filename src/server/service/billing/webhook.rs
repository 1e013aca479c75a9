//! Stripe webhook signature verification and event payloads.
//!
//! The `Stripe-Signature` header has the form `t=<unix time>,v1=<hex hmac>[,v1=...]`.
//! The signature is HMAC-SHA256 of `"{t}.{body}"` keyed by the endpoint secret.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::server::error::billing::BillingError;

type HmacSha256 = Hmac<Sha256>;

/// Oldest accepted signature, in seconds.
const MAX_EVENT_AGE_SECS: i64 = 300;

/// Accepted clock skew for signatures from the future, in seconds.
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed `Stripe-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    pub timestamp: i64,
    /// Every `v1` signature present; Stripe sends several while a secret is rolled.
    pub v1_signatures: Vec<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses the header, ignoring unknown schemes.
    ///
    /// # Returns
    /// - `Ok(SignatureHeader)` - Timestamp and at least one `v1` signature
    /// - `Err(BillingError::InvalidSignature)` - Malformed header
    pub fn parse(header: &str) -> Result<Self, BillingError> {
        let mut timestamp = None;
        let mut v1_signatures = Vec::new();

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or(BillingError::InvalidSignature)?;

            match key.trim() {
                "t" => {
                    timestamp = Some(
                        value
                            .trim()
                            .parse::<i64>()
                            .map_err(|_| BillingError::InvalidSignature)?,
                    );
                }
                "v1" => {
                    let signature =
                        hex::decode(value.trim()).map_err(|_| BillingError::InvalidSignature)?;
                    v1_signatures.push(signature);
                }
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(BillingError::InvalidSignature)?;
        if v1_signatures.is_empty() {
            return Err(BillingError::InvalidSignature);
        }

        Ok(Self {
            timestamp,
            v1_signatures,
        })
    }
}

/// Verifies a webhook body against its signature header and parses the event.
///
/// # Arguments
/// - `payload` - Raw request body, exactly as received
/// - `signature_header` - Value of `Stripe-Signature`
/// - `secret` - Endpoint signing secret
/// - `now` - Current unix time in seconds
///
/// # Returns
/// - `Ok(StripeEvent)` - Authentic event
/// - `Err(BillingError::InvalidSignature)` - Malformed header or no matching signature
/// - `Err(BillingError::TimestampOutOfRange)` - Signature older than five minutes or
///   too far in the future
/// - `Err(BillingError::InvalidPayload)` - Authentic body that is not a Stripe event
pub fn verify_event(
    payload: &str,
    signature_header: &str,
    secret: &str,
    now: i64,
) -> Result<StripeEvent, BillingError> {
    let header = SignatureHeader::parse(signature_header)?;

    let age_secs = now.saturating_sub(header.timestamp);
    if age_secs > MAX_EVENT_AGE_SECS || age_secs < -MAX_CLOCK_SKEW_SECS {
        return Err(BillingError::TimestampOutOfRange { age_secs });
    }

    let expected = compute_signature(secret, header.timestamp, payload)?;

    let matched = header
        .v1_signatures
        .iter()
        .any(|signature| bool::from(expected.as_slice().ct_eq(signature.as_slice())));

    if !matched {
        return Err(BillingError::InvalidSignature);
    }

    Ok(serde_json::from_str(payload)?)
}

fn compute_signature(secret: &str, timestamp: i64, payload: &str) -> Result<Vec<u8>, BillingError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| BillingError::InvalidSignature)?;
    mac.update(format!("{}.{}", timestamp, payload).as_bytes());

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Builds a valid `Stripe-Signature` header for test payloads.
#[cfg(test)]
pub fn test_signature_header(secret: &str, timestamp: i64, payload: &str) -> String {
    let signature = compute_signature(secret, timestamp, payload).unwrap();
    format!("t={},v1={}", timestamp, hex::encode(signature))
}

/// Stripe event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// The fields read from a `checkout.session.completed` object.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionObject {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// The fields read from a `customer.subscription.*` object.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionObject {
    pub id: String,
    #[serde(default)]
    pub customer: Option<String>,
    pub status: String,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub items: SubscriptionItems,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionItems {
    #[serde(default)]
    pub data: Vec<SubscriptionItem>,
}

/// Subscription line item. Billing periods live on the item in current API versions.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionItem {
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub current_period_start: Option<i64>,
    #[serde(default)]
    pub current_period_end: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub id: String,
}

/// The fields read from an `invoice.*` object.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceObject {
    #[serde(default)]
    pub customer: Option<String>,
}

/// Reads the user id the checkout flow stores in metadata.
pub fn metadata_user_id(metadata: &HashMap<String, String>) -> Option<i32> {
    metadata
        .get("userId")
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const NOW: i64 = 1_767_225_600;
    const PAYLOAD: &str =
        r#"{"id":"evt_1","type":"invoice.payment_failed","data":{"object":{"customer":"cus_1"}}}"#;

    #[test]
    fn parses_header_with_multiple_signatures() {
        let header = SignatureHeader::parse(&format!(
            "t=123,v1={},v0={},v1={}",
            "ab".repeat(32),
            "cd".repeat(32),
            "ef".repeat(32)
        ))
        .unwrap();

        assert_eq!(header.timestamp, 123);
        assert_eq!(header.v1_signatures.len(), 2);
    }

    #[test]
    fn rejects_malformed_headers() {
        for header in ["", "t=abc,v1=00", "t=123", "v1=00", "t=123,v1=zz"] {
            assert!(
                matches!(SignatureHeader::parse(header), Err(BillingError::InvalidSignature)),
                "accepted {:?}",
                header
            );
        }
    }

    /// Expected: a correctly signed payload verifies and parses
    #[test]
    fn verifies_signed_payload() {
        let header = test_signature_header(SECRET, NOW - 10, PAYLOAD);

        let event = verify_event(PAYLOAD, &header, SECRET, NOW).unwrap();

        assert_eq!(event.id, "evt_1");
        assert_eq!(event.event_type, "invoice.payment_failed");
    }

    /// Expected: a signature from another secret or over another body is rejected
    #[test]
    fn rejects_wrong_signature() {
        let header = test_signature_header("whsec_other", NOW, PAYLOAD);
        assert!(matches!(
            verify_event(PAYLOAD, &header, SECRET, NOW),
            Err(BillingError::InvalidSignature)
        ));

        let header = test_signature_header(SECRET, NOW, PAYLOAD);
        let tampered = PAYLOAD.replace("cus_1", "cus_2");
        assert!(matches!(
            verify_event(&tampered, &header, SECRET, NOW),
            Err(BillingError::InvalidSignature)
        ));
    }

    /// Expected: signatures older than five minutes are rejected
    #[test]
    fn rejects_stale_timestamp() {
        let header = test_signature_header(SECRET, NOW - 301, PAYLOAD);

        assert!(matches!(
            verify_event(PAYLOAD, &header, SECRET, NOW),
            Err(BillingError::TimestampOutOfRange { age_secs: 301 })
        ));
    }

    /// Tests timestamps at the edges of the integer range.
    ///
    /// The timestamp is read before the signature is checked, so extreme values
    /// must be rejected without overflowing.
    ///
    /// Expected: both rejected as out of range
    #[test]
    fn rejects_extreme_timestamps() {
        for timestamp in [i64::MIN, i64::MAX] {
            let header = format!("t={},v1=00", timestamp);

            assert!(matches!(
                verify_event(PAYLOAD, &header, SECRET, NOW),
                Err(BillingError::TimestampOutOfRange { .. })
            ));
        }
    }

    /// Expected: an authentic body that is not an event is a payload error
    #[test]
    fn rejects_non_event_payload() {
        let payload = r#"{"hello":"world"}"#;
        let header = test_signature_header(SECRET, NOW, payload);

        assert!(matches!(
            verify_event(payload, &header, SECRET, NOW),
            Err(BillingError::InvalidPayload(_))
        ));
    }

    #[test]
    fn reads_subscription_items() {
        let object = serde_json::json!({
            "id": "sub_1",
            "customer": "cus_1",
            "status": "active",
            "metadata": { "userId": "42" },
            "items": { "data": [{
                "price": { "id": "price_premium" },
                "current_period_start": 1_767_225_600,
                "current_period_end": 1_769_904_000
            }]}
        });

        let subscription: SubscriptionObject = serde_json::from_value(object).unwrap();

        assert_eq!(metadata_user_id(&subscription.metadata), Some(42));
        assert!(!subscription.cancel_at_period_end);
        assert_eq!(
            subscription.items.data[0].price.as_ref().map(|p| p.id.as_str()),
            Some("price_premium")
        );
    }
}
