//! Prefill records carried by the catalog for returning customers.
//!
//! Wire format, one object per saved entry:
//!
//! ```json
//! { "rank": 1, "msisdn": "+46701234567" }
//! ```
//!
//! ```json
//! {
//!   "rank": 1,
//!   "paymentToken": "tok_5f2a...",
//!   "cardBrand": "Visa",
//!   "maskedPan": "4111 11** **** 1111",
//!   "expiryDate": "03/2025"
//! }
//! ```
//!
//! Both record decoders return `Option` rather than `Result`: a prefill
//! that fails to decode is dropped by the enclosing field, it never fails
//! the surrounding method entry.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde_json::{json, Map, Value};

/// A saved Swish number that can pre-populate the Swish flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwishPrefill {
    /// Position among the user's saved numbers, 1 is the most relevant.
    pub rank: i32,
    /// The saved phone number in MSISDN form.
    pub msisdn: String,
}

impl SwishPrefill {
    /// Decodes a prefill from its wire object. Returns `None` when the
    /// value does not have the expected shape.
    pub fn from_json(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        Some(Self {
            rank: decode_rank(obj)?,
            msisdn: obj.get("msisdn")?.as_str()?.to_owned(),
        })
    }

    /// Encodes the prefill back to its wire object.
    pub fn to_json(&self) -> Value {
        json!({ "rank": self.rank, "msisdn": self.msisdn })
    }
}

/// A saved card that can pre-populate the card flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreditCardPrefill {
    /// Position among the user's saved cards, 1 is the most relevant.
    pub rank: i32,
    /// Opaque token standing in for the stored card.
    pub payment_token: String,
    pub card_brand: String,
    /// The PAN as the API masks it, e.g. `"4111 11** **** 1111"`.
    pub masked_pan: String,
    /// Card expiry, normalized to midnight UTC on the first of the month.
    pub expiry_date: DateTime<Utc>,
}

impl CreditCardPrefill {
    /// Decodes a prefill from its wire object. Returns `None` when the
    /// value does not have the expected shape or the expiry does not parse
    /// as `"MM/yyyy"`.
    pub fn from_json(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        Some(Self {
            rank: decode_rank(obj)?,
            payment_token: obj.get("paymentToken")?.as_str()?.to_owned(),
            card_brand: obj.get("cardBrand")?.as_str()?.to_owned(),
            masked_pan: obj.get("maskedPan")?.as_str()?.to_owned(),
            expiry_date: parse_expiry(obj.get("expiryDate")?.as_str()?)?,
        })
    }

    /// Encodes the prefill back to its wire object.
    pub fn to_json(&self) -> Value {
        json!({
            "rank": self.rank,
            "paymentToken": self.payment_token,
            "cardBrand": self.card_brand,
            "maskedPan": self.masked_pan,
            "expiryDate": format!(
                "{:02}/{:04}",
                self.expiry_date.month(),
                self.expiry_date.year()
            ),
        })
    }

    /// Two-digit expiry month in UTC, e.g. `"03"`.
    pub fn expiry_month(&self) -> String {
        format!("{:02}", self.expiry_date.month())
    }

    /// Two-digit expiry year in UTC, e.g. `"25"`.
    pub fn expiry_year(&self) -> String {
        format!("{:02}", self.expiry_date.year() % 100)
    }

    /// Expiry as printed on a card, `"MM/yy"` in UTC, e.g. `"03/25"`.
    pub fn expiry_string(&self) -> String {
        format!("{}/{}", self.expiry_month(), self.expiry_year())
    }
}

fn decode_rank(obj: &Map<String, Value>) -> Option<i32> {
    i32::try_from(obj.get("rank")?.as_i64()?).ok()
}

/// Parses the catalog's `"MM/yyyy"` expiry into midnight UTC on the first
/// of that month. Out-of-range months are rejected.
fn parse_expiry(s: &str) -> Option<DateTime<Utc>> {
    let (month, year) = s.split_once('/')?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}
