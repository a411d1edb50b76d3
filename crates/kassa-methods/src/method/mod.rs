//! Payment-method catalog codec.
//!
//! The payment API answers a session request with a catalog: a JSON array
//! of tagged objects, one per way to pay. A typical entry:
//!
//! ```json
//! {
//!   "paymentMethod": "CreditCard",
//!   "prefills": [ { "rank": 1, "paymentToken": "...", ... } ],
//!   "operations": [ { "rel": "create-authorization", ... } ],
//!   "cardBrands": ["Visa", "MasterCard"]
//! }
//! ```
//!
//! [`decode()`] dispatches on the `paymentMethod` tag, degrading unknown
//! tags to the web-based fallback and malformed optional fields to `None`.
//! [`encode()`] produces the outbound shape, which deliberately differs
//! from the inbound one; the two are not inverses.

mod decode;
mod encode;
mod error;
mod types;

pub use decode::{decode, decode_catalog, decode_catalog_slice, decode_slice};
pub use encode::{encode, encode_catalog};
pub use error::MethodError;
pub use types::{first_with_name, PaymentMethod};
