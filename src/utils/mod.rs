//! Utility functions shared across the application.
//!
//! - [`short_code`] - Reversible id ↔ short code transform
//! - [`url_validator`] - Redirect target validation

pub mod short_code;
pub mod url_validator;
