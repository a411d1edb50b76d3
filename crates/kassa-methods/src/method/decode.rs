//! Catalog decoder.
//!
//! Decoding is deliberately lopsided: the `paymentMethod` discriminator is
//! the only thing that can fail an entry. Every other field degrades to
//! `None` on any problem, so one malformed attribute in a server response
//! never takes the whole method (or catalog) down with it.

use serde_json::{Map, Value};

use crate::operation::Operation;
use crate::prefill::{CreditCardPrefill, SwishPrefill};

use super::error::MethodError;
use super::types::PaymentMethod;

/// Decodes one catalog entry into a [`PaymentMethod`].
///
/// The input must be an object with a string `paymentMethod` field;
/// anything else fails with [`MethodError::MissingDiscriminator`]. The
/// remaining fields all share one tolerant sequence rule: a missing key,
/// an explicit null, a non-array value, and a single undecodable element
/// each turn that one field into `None`. A tag outside the native three
/// decodes to [`PaymentMethod::WebBased`] with the raw tag; its other
/// fields are never read.
pub fn decode(v: &Value) -> Result<PaymentMethod, MethodError> {
    let obj = v.as_object().ok_or(MethodError::MissingDiscriminator)?;
    let tag = obj
        .get("paymentMethod")
        .and_then(Value::as_str)
        .ok_or(MethodError::MissingDiscriminator)?;

    Ok(match tag {
        "Swish" => PaymentMethod::Swish {
            prefills: seq_or_absent(obj, "prefills", SwishPrefill::from_json),
            operations: seq_or_absent(obj, "operations", Operation::from_json),
        },
        "CreditCard" => PaymentMethod::CreditCard {
            prefills: seq_or_absent(obj, "prefills", CreditCardPrefill::from_json),
            operations: seq_or_absent(obj, "operations", Operation::from_json),
            card_brands: seq_or_absent(obj, "cardBrands", decode_str),
        },
        "ApplePay" => PaymentMethod::ApplePay {
            operations: seq_or_absent(obj, "operations", Operation::from_json),
            card_brands: seq_or_absent(obj, "cardBrands", decode_str),
            merchant_capabilities: seq_or_absent(obj, "merchantCapabilities", decode_str),
        },
        other => PaymentMethod::WebBased {
            payment_method: other.to_owned(),
        },
    })
}

/// Decodes a whole catalog (a JSON array of entries) in order.
///
/// Field tolerance applies inside each entry, but an entry without a
/// usable discriminator still fails the catalog: such a value is not a
/// payment-method object at all. A non-array input fails with
/// [`MethodError::Catalog`].
pub fn decode_catalog(v: &Value) -> Result<Vec<PaymentMethod>, MethodError> {
    let items = v
        .as_array()
        .ok_or_else(|| MethodError::Catalog("catalog must be an array".to_owned()))?;
    items.iter().map(decode).collect()
}

/// Decodes one catalog entry from raw JSON bytes.
pub fn decode_slice(bytes: &[u8]) -> Result<PaymentMethod, MethodError> {
    let v: Value = serde_json::from_slice(bytes)?;
    decode(&v)
}

/// Decodes a whole catalog from raw JSON bytes.
pub fn decode_catalog_slice(bytes: &[u8]) -> Result<Vec<PaymentMethod>, MethodError> {
    let v: Value = serde_json::from_slice(bytes)?;
    decode_catalog(&v)
}

/// Decodes `obj[key]` as a sequence of `elem`-decoded values, where every
/// failure mode means "field absent": a missing key, an explicit null, a
/// non-array value, and any element `elem` rejects all yield `None`.
fn seq_or_absent<T, F>(obj: &Map<String, Value>, key: &str, elem: F) -> Option<Vec<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    let raw = obj.get(key)?;
    let decoded = raw
        .as_array()
        .and_then(|items| items.iter().map(elem).collect::<Option<Vec<T>>>());
    if decoded.is_none() && !raw.is_null() {
        log::debug!("dropping malformed `{key}` field");
    }
    decoded
}

fn decode_str(v: &Value) -> Option<String> {
    v.as_str().map(str::to_owned)
}
