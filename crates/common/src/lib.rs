//! Common utilities shared across MailTriage crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation primitives

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

#[cfg(feature = "foundation")]
pub use validation::{
    CustomValidator, FieldError, FieldValidator, RangeValidator, StringValidator,
    ValidationError, ValidationResult,
};
