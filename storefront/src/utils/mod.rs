//! # Utility Functions
//!
//! Shared utility functions used across the storefront client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Field validators and the advisory password strength
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (full name, decimal fields)
//! - [`crate::app::forms`]: Forms that run these validators on submit

pub mod validation;
