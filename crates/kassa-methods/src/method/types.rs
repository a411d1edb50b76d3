//! Core types for the payment-method catalog.

use serde_json::Value;

use crate::operation::Operation;
use crate::prefill::{CreditCardPrefill, SwishPrefill};

use super::error::MethodError;

/// One payment method offered by the catalog.
///
/// The wire object's `paymentMethod` field selects the variant. Any tag
/// outside the three natively supported ones becomes
/// [`PaymentMethod::WebBased`], which keeps the raw tag and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Swish, optionally with the user's saved numbers.
    Swish {
        prefills: Option<Vec<SwishPrefill>>,
        operations: Option<Vec<Operation>>,
    },
    /// Card payments, optionally with saved cards and accepted brands.
    CreditCard {
        prefills: Option<Vec<CreditCardPrefill>>,
        operations: Option<Vec<Operation>>,
        card_brands: Option<Vec<String>>,
    },
    /// Apple Pay, with the merchant's accepted networks and capabilities.
    ApplePay {
        operations: Option<Vec<Operation>>,
        card_brands: Option<Vec<String>>,
        merchant_capabilities: Option<Vec<String>>,
    },
    /// Any method this client cannot run natively; it is handed to the
    /// hosted checkout page instead. Carries the verbatim discriminator.
    WebBased { payment_method: String },
}

impl PaymentMethod {
    /// Returns the discriminator this method was tagged with.
    ///
    /// The three native variants answer their fixed tag; a
    /// [`PaymentMethod::WebBased`] answers whatever tag the wire carried.
    pub fn name(&self) -> &str {
        match self {
            PaymentMethod::Swish { .. } => "Swish",
            PaymentMethod::CreditCard { .. } => "CreditCard",
            PaymentMethod::ApplePay { .. } => "ApplePay",
            PaymentMethod::WebBased { payment_method } => payment_method,
        }
    }

    /// Returns the method's follow-up operations, if the catalog sent any.
    /// Web-based methods never carry operations.
    pub fn operations(&self) -> Option<&[Operation]> {
        match self {
            PaymentMethod::Swish { operations, .. }
            | PaymentMethod::CreditCard { operations, .. }
            | PaymentMethod::ApplePay { operations, .. } => operations.as_deref(),
            PaymentMethod::WebBased { .. } => None,
        }
    }

    /// Returns true when the method runs natively on the device rather
    /// than in the hosted checkout page.
    pub fn is_native(&self) -> bool {
        !matches!(self, PaymentMethod::WebBased { .. })
    }

    /// Decodes a method from its wire value. See [`super::decode()`].
    pub fn from_json(v: &Value) -> Result<PaymentMethod, MethodError> {
        super::decode(v)
    }

    /// Encodes the method to its wire value. See [`super::encode()`].
    pub fn to_json(&self) -> Value {
        super::encode(self)
    }
}

/// Returns the first method in `methods` whose
/// [`name()`](PaymentMethod::name) equals `name`, scanning in catalog
/// order.
pub fn first_with_name<'a>(
    methods: &'a [PaymentMethod],
    name: &str,
) -> Option<&'a PaymentMethod> {
    methods.iter().find(|m| m.name() == name)
}
