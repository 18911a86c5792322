//! Email input: validation rules and the file/text form

pub mod form;
pub mod validator;

pub use form::{EmailForm, FormInput};
pub use validator::InputValidator;
