//! Catalog encoder.
//!
//! Encoding is not the inverse of [`super::decode()`]: the
//! `paymentMethod` discriminator is never written, and a web-based method
//! encodes to a bare JSON string rather than an object. The output is the
//! shape the client sends onward in follow-up requests, not the shape the
//! catalog endpoint serves.

use serde_json::{Map, Value};

use crate::operation::Operation;
use crate::prefill::{CreditCardPrefill, SwishPrefill};

use super::types::PaymentMethod;

/// Encodes a method to its wire value.
///
/// Fields keep their variant order. An absent optional field omits its key
/// entirely; null is never written.
pub fn encode(method: &PaymentMethod) -> Value {
    match method {
        PaymentMethod::Swish {
            prefills,
            operations,
        } => {
            let mut m = Map::new();
            insert_seq(&mut m, "prefills", prefills, SwishPrefill::to_json);
            insert_seq(&mut m, "operations", operations, Operation::to_json);
            Value::Object(m)
        }
        PaymentMethod::CreditCard {
            prefills,
            operations,
            card_brands,
        } => {
            let mut m = Map::new();
            insert_seq(&mut m, "prefills", prefills, CreditCardPrefill::to_json);
            insert_seq(&mut m, "operations", operations, Operation::to_json);
            insert_seq(&mut m, "cardBrands", card_brands, |s| Value::String(s.clone()));
            Value::Object(m)
        }
        PaymentMethod::ApplePay {
            operations,
            card_brands,
            merchant_capabilities,
        } => {
            let mut m = Map::new();
            insert_seq(&mut m, "operations", operations, Operation::to_json);
            insert_seq(&mut m, "cardBrands", card_brands, |s| Value::String(s.clone()));
            insert_seq(&mut m, "merchantCapabilities", merchant_capabilities, |s| {
                Value::String(s.clone())
            });
            Value::Object(m)
        }
        PaymentMethod::WebBased { payment_method } => Value::String(payment_method.clone()),
    }
}

/// Encodes a whole catalog as a JSON array, in slice order.
pub fn encode_catalog(methods: &[PaymentMethod]) -> Value {
    Value::Array(methods.iter().map(encode).collect())
}

fn insert_seq<T>(
    m: &mut Map<String, Value>,
    key: &str,
    field: &Option<Vec<T>>,
    elem: impl Fn(&T) -> Value,
) {
    if let Some(items) = field {
        m.insert(
            key.to_owned(),
            Value::Array(items.iter().map(elem).collect()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::decode::decode;
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn card_prefill() -> CreditCardPrefill {
        CreditCardPrefill {
            rank: 1,
            payment_token: "tok_5f2a".to_owned(),
            card_brand: "Visa".to_owned(),
            masked_pan: "4111 11** **** 1111".to_owned(),
            expiry_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn encode_never_writes_the_discriminator() {
        let v = encode(&PaymentMethod::Swish {
            prefills: Some(vec![SwishPrefill {
                rank: 1,
                msisdn: "+46701234567".to_owned(),
            }]),
            operations: None,
        });
        assert_eq!(v["paymentMethod"], Value::Null);
        assert_eq!(
            v,
            json!({ "prefills": [{ "rank": 1, "msisdn": "+46701234567" }] })
        );
    }

    #[test]
    fn encode_bare_methods_are_empty_objects() {
        let bare = [
            PaymentMethod::Swish {
                prefills: None,
                operations: None,
            },
            PaymentMethod::CreditCard {
                prefills: None,
                operations: None,
                card_brands: None,
            },
            PaymentMethod::ApplePay {
                operations: None,
                card_brands: None,
                merchant_capabilities: None,
            },
        ];
        for m in &bare {
            assert_eq!(encode(m), json!({}), "for {:?}", m.name());
        }
    }

    #[test]
    fn encode_web_based_is_a_bare_string() {
        let v = encode(&PaymentMethod::WebBased {
            payment_method: "Invoice".to_owned(),
        });
        assert_eq!(v, json!("Invoice"));
    }

    #[test]
    fn encode_keeps_variant_field_order() {
        let v = encode(&PaymentMethod::CreditCard {
            prefills: Some(vec![card_prefill()]),
            operations: Some(vec![Operation::default()]),
            card_brands: Some(vec!["Visa".to_owned()]),
        });
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["prefills", "operations", "cardBrands"]);
    }

    #[test]
    fn encode_omits_absent_fields_without_null() {
        let v = encode(&PaymentMethod::ApplePay {
            operations: None,
            card_brands: Some(vec!["Visa".to_owned(), "Amex".to_owned()]),
            merchant_capabilities: None,
        });
        assert_eq!(v, json!({ "cardBrands": ["Visa", "Amex"] }));
        let obj = v.as_object().unwrap();
        assert!(!obj.contains_key("operations"));
        assert!(!obj.contains_key("merchantCapabilities"));
    }

    #[test]
    fn encode_empty_list_is_an_empty_array() {
        let v = encode(&PaymentMethod::Swish {
            prefills: Some(vec![]),
            operations: None,
        });
        assert_eq!(v, json!({ "prefills": [] }));
    }

    #[test]
    fn encode_card_prefill_in_place() {
        let v = encode(&PaymentMethod::CreditCard {
            prefills: Some(vec![card_prefill()]),
            operations: None,
            card_brands: None,
        });
        assert_eq!(
            v,
            json!({
                "prefills": [{
                    "rank": 1,
                    "paymentToken": "tok_5f2a",
                    "cardBrand": "Visa",
                    "maskedPan": "4111 11** **** 1111",
                    "expiryDate": "03/2025",
                }],
            })
        );
    }

    #[test]
    fn encode_catalog_in_slice_order() {
        let methods = [
            PaymentMethod::Swish {
                prefills: None,
                operations: None,
            },
            PaymentMethod::WebBased {
                payment_method: "Invoice".to_owned(),
            },
        ];
        assert_eq!(encode_catalog(&methods), json!([{}, "Invoice"]));
    }

    // Encode output is for sending onward; it cannot be decoded back.

    #[test]
    fn encoded_object_does_not_decode_back() {
        let v = encode(&PaymentMethod::Swish {
            prefills: None,
            operations: None,
        });
        assert!(decode(&v).is_err());
    }

    #[test]
    fn encoded_web_based_does_not_decode_back() {
        let v = encode(&PaymentMethod::WebBased {
            payment_method: "Invoice".to_owned(),
        });
        assert!(decode(&v).is_err());
    }
}
