//! Payment-method catalog codec for the kassa checkout client.
//!
//! The payment API describes each way to pay as a tagged JSON object: a
//! `paymentMethod` discriminator plus method-specific fields. This crate
//! turns those objects into the closed [`PaymentMethod`] enum and back,
//! carrying saved-input prefills and follow-up operations along. Decoding
//! degrades instead of failing: an unknown tag becomes
//! [`PaymentMethod::WebBased`] (handled by the hosted checkout page), and
//! a malformed optional field costs that field, never the whole entry.
//! The discriminator is the one exception; without it there is no entry
//! to salvage.
//!
//! [`AvailableInstrument`] is the companion sum type answering a
//! different question (not "what does the API offer" but "what can this
//! device run"), kept in lockstep with the method universe.

pub mod instrument;
pub mod method;
pub mod operation;
pub mod prefill;

pub use instrument::AvailableInstrument;
pub use method::{first_with_name, MethodError, PaymentMethod};
pub use operation::Operation;
pub use prefill::{CreditCardPrefill, SwishPrefill};
