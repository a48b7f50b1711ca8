//! Naming tests
//!
//! Tests for:
//! - Unique names against reserved names from different sources
//! - Base names derived from types
//! - Resolver properties over generated reserved sets

pub mod tests_properties;
pub mod tests_scenarios;
