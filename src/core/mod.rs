//! Core formatting and conversion functionality
//!
//! This module contains the stateless helpers consumed by page and space views.
//! It provides:
//!
//! - [`formatting`]: Member counts, byte sizes and capitalization
//! - [`slug`]: Page slug ids and space short codes
//! - [`svg`]: SVG file objects and base64 data URI conversion
//! - [`icon`]: Page icon resolution with a placeholder fallback
//! - [`error`]: Error types for fallible conversions

pub mod error;
pub mod formatting;
pub mod icon;
pub mod slug;
pub mod svg;
