//! Display/FromStr boilerplate for service status enums
//!
//! The classification service reports lifecycle and health values as
//! lowercase strings. This macro maps each variant to its wire string once
//! and derives both directions from that table.
//!
//! # Example
//!
//! ```rust
//! use mailtriage_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ServiceState {
//!     Up,
//!     Down,
//! }
//!
//! impl_domain_status_conversions!(ServiceState {
//!     Up => "up",
//!     Down => "down",
//! });
//!
//! assert_eq!(ServiceState::Up.to_string(), "up");
//! assert_eq!(" DOWN ".parse::<ServiceState>(), Ok(ServiceState::Down));
//! ```

/// Implements `Display` and `FromStr` for a status enum.
///
/// Strings in the table must be lowercase. Parsing trims surrounding
/// whitespace and ignores case; unknown values yield
/// `Err("Invalid <Enum>: <input>")`.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
