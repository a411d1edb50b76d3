//! [`Operation`]: a follow-up network action attached to a payment method.
//!
//! The catalog lists the requests a client may perform next for a given
//! method (creating an authorization, redirect targets, and so on). This
//! crate carries them verbatim; executing them belongs to the transport
//! layer.

use serde_json::{Map, Value};

/// One action descriptor from the catalog.
///
/// Every field is optional on the wire, but a present field must be a
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Link relation naming the action, e.g. `"create-authorization"`.
    pub rel: Option<String>,
    /// HTTP method to use.
    pub method: Option<String>,
    /// Target URL.
    pub href: Option<String>,
    /// Request content type the target expects.
    pub content_type: Option<String>,
}

impl Operation {
    /// Decodes an operation from its wire object.
    ///
    /// Returns `None` for a non-object value and for any present field that
    /// is not a string. Absent and null fields decode to `None` fields.
    pub fn from_json(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        Some(Self {
            rel: string_or_absent(obj, "rel")?,
            method: string_or_absent(obj, "method")?,
            href: string_or_absent(obj, "href")?,
            content_type: string_or_absent(obj, "contentType")?,
        })
    }

    /// Encodes the operation, omitting the keys of absent fields.
    pub fn to_json(&self) -> Value {
        let mut m = Map::new();
        if let Some(rel) = &self.rel {
            m.insert("rel".into(), Value::String(rel.clone()));
        }
        if let Some(method) = &self.method {
            m.insert("method".into(), Value::String(method.clone()));
        }
        if let Some(href) = &self.href {
            m.insert("href".into(), Value::String(href.clone()));
        }
        if let Some(content_type) = &self.content_type {
            m.insert("contentType".into(), Value::String(content_type.clone()));
        }
        Value::Object(m)
    }
}

/// Outer `None` means the field is malformed; inner `None` means absent.
fn string_or_absent(obj: &Map<String, Value>, key: &str) -> Option<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_full() {
        let op = Operation::from_json(&json!({
            "rel": "create-authorization",
            "method": "POST",
            "href": "https://api.example.test/authorizations",
            "contentType": "application/json",
        }))
        .unwrap();
        assert_eq!(op.rel.as_deref(), Some("create-authorization"));
        assert_eq!(op.method.as_deref(), Some("POST"));
        assert_eq!(op.href.as_deref(), Some("https://api.example.test/authorizations"));
        assert_eq!(op.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn from_json_partial_and_null() {
        let op = Operation::from_json(&json!({
            "rel": "redirect",
            "href": null,
        }))
        .unwrap();
        assert_eq!(op.rel.as_deref(), Some("redirect"));
        assert_eq!(op.method, None);
        assert_eq!(op.href, None);
        assert_eq!(op.content_type, None);
    }

    #[test]
    fn from_json_empty_object_is_all_absent() {
        assert_eq!(Operation::from_json(&json!({})), Some(Operation::default()));
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert_eq!(Operation::from_json(&json!("redirect")), None);
        assert_eq!(Operation::from_json(&json!(["redirect"])), None);
        assert_eq!(Operation::from_json(&json!(null)), None);
    }

    #[test]
    fn from_json_rejects_non_string_field() {
        assert_eq!(Operation::from_json(&json!({ "rel": 42 })), None);
        assert_eq!(Operation::from_json(&json!({ "method": ["POST"] })), None);
        assert_eq!(Operation::from_json(&json!({ "href": {} })), None);
        assert_eq!(Operation::from_json(&json!({ "contentType": true })), None);
    }

    #[test]
    fn to_json_omits_absent_keys() {
        let op = Operation {
            rel: Some("redirect".to_owned()),
            href: Some("https://pay.example.test/session/1".to_owned()),
            ..Operation::default()
        };
        assert_eq!(
            op.to_json(),
            json!({ "rel": "redirect", "href": "https://pay.example.test/session/1" })
        );
    }

    #[test]
    fn to_json_empty_operation_is_empty_object() {
        assert_eq!(Operation::default().to_json(), json!({}));
    }

    #[test]
    fn roundtrip() {
        let v = json!({
            "rel": "create-authorization",
            "method": "POST",
            "href": "https://api.example.test/authorizations",
            "contentType": "application/json",
        });
        assert_eq!(Operation::from_json(&v).unwrap().to_json(), v);
    }
}
