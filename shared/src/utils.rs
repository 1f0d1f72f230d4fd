//! # Shared Utility Functions
//!
//! Helpers used by both the DTOs and the storefront client.
//!
//! - [`compose_full_name`] - Build the display name stored with a session
//! - [`decimal`] - Serde helpers for decimal fields sent as numbers or strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::compose_full_name;
//!
//! assert_eq!(compose_full_name("Ada", "Lovelace"), "Ada Lovelace");
//! assert_eq!(compose_full_name("Ada", ""), "Ada");
//! ```

/// Join first and last name with a single space, dropping empty parts.
///
/// # Examples
///
/// ```rust
/// use shared::utils::compose_full_name;
///
/// assert_eq!(compose_full_name("  Grace ", "Hopper"), "Grace Hopper");
/// assert_eq!(compose_full_name("", ""), "");
/// ```
pub fn compose_full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
        .trim()
        .to_string()
}

/// Decimal fields (`price`, `rating`) arrive either as JSON numbers or as
/// decimal strings such as `"1299.00"`.
pub mod decimal {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a decimal string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    struct OptionalDecimalVisitor;

    impl<'de> Visitor<'de> for OptionalDecimalVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("null, a number or a decimal string")
        }

        fn visit_none<E: de::Error>(self) -> Result<Option<f64>, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Option<f64>, D::Error> {
            deserializer.deserialize_any(DecimalVisitor).map(Some)
        }
    }

    /// Deserialize a required decimal.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }

    /// Deserialize an optional decimal; `null` maps to `None`.
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalDecimalVisitor)
    }
}
