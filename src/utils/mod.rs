//! Utility functions.
//!
//! This module provides:
//! - Text cleanup for extracted values and logged errors
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use sanitize::{clean_text, sanitize_and_truncate_error_message};
pub use selector::parse_selector_unsafe;
