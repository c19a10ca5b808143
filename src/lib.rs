//! pagefmt - Page and space formatting helpers
//!
//! Small, stateless conversions used when displaying wiki pages, spaces and
//! their assets.
//!
//! # Architecture
//!
//! - [`core`] - Formatting, slug, SVG and icon helpers
//! - [`validators`] - Input validation for file names and configuration
//! - [`config`] - Configuration persistence
//! - [`utils`] - Utility functions (XDG directories)
//!
//! # Example
//!
//! ```
//! use pagefmt::{compute_space_slug, extract_page_slug_id, format_bytes, format_member_count};
//!
//! assert_eq!(format_member_count(12), "12 members");
//! assert_eq!(compute_space_slug("Engineering Team"), "ET");
//! assert_eq!(extract_page_slug_id(Some("roadmap-9f8a7b6c")), Some("9f8a7b6c"));
//! assert_eq!(format_bytes(2048.0), "2.00 KB");
//! ```

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::formatting::{
    SizeUnit, capitalize_first_char, format_bytes, format_bytes_with_precision,
    format_member_count,
};
pub use core::icon::{PageIcon, PlaceholderIcon, resolve_page_icon, resolve_page_icon_text};
pub use core::slug::{compute_space_slug, extract_page_slug_id};
pub use core::svg::{
    SVG_DATA_URI_PREFIX, SVG_MIME_TYPE, SvgFile, decode_base64_to_svg_string,
    encode_svg_to_base64, svg_string_to_file,
};
