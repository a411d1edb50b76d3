//! [`AvailableInstrument`]: what this device can actually pay with.
//!
//! The catalog says what the API offers; capability probing (is Swish
//! installed, can the wallet make payments) says what is usable right
//! here. This enum is the result of that probing. It covers the same
//! method universe as [`PaymentMethod`](crate::PaymentMethod) and shares
//! its prefill records, but the two are kept as separate types on
//! purpose: adding a method kind means deciding its availability story
//! too, and the compiler's exhaustiveness check enforces that at both
//! sites.

use crate::prefill::{CreditCardPrefill, SwishPrefill};

/// One payment instrument confirmed usable on this device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailableInstrument {
    /// Swish is reachable; saved numbers carried over from the catalog.
    Swish { prefills: Option<Vec<SwishPrefill>> },
    /// Card entry is available; saved cards carried over from the catalog.
    CreditCard {
        prefills: Option<Vec<CreditCardPrefill>>,
    },
    /// Apple Pay, with the wallet probe results.
    ApplePay {
        can_make_payments: bool,
        can_make_payments_using_networks_and_capabilities: bool,
    },
    /// The hosted checkout page handles this method tag.
    WebBased { payment_method: String },
}

impl AvailableInstrument {
    /// Returns the method tag this instrument answers to, aligned with
    /// [`PaymentMethod::name`](crate::PaymentMethod::name) so the two can
    /// be matched up by string.
    pub fn name(&self) -> &str {
        match self {
            AvailableInstrument::Swish { .. } => "Swish",
            AvailableInstrument::CreditCard { .. } => "CreditCard",
            AvailableInstrument::ApplePay { .. } => "ApplePay",
            AvailableInstrument::WebBased { payment_method } => payment_method,
        }
    }
}
