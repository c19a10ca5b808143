//! Page icon resolution
//!
//! Pages may carry an icon (usually an emoji). When they don't, views show a
//! neutral document glyph. Rendering is left to the presentation layer; this
//! module only decides which of the two to show.

use serde::Serialize;

/// Pixel size used when the caller doesn't ask for one
pub const DEFAULT_ICON_SIZE: u32 = 18;

/// Description of the fallback icon for pages without one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderIcon {
    pub size: u32,
    pub color: &'static str,
    pub glyph: &'static str,
    pub variant: &'static str,
    /// Placeholders are decorative and never clickable
    pub interactive: bool,
}

impl PlaceholderIcon {
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            color: "gray",
            glyph: "file-description",
            variant: "transparent",
            interactive: false,
        }
    }
}

impl Default for PlaceholderIcon {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_SIZE)
    }
}

/// Icon to display for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "icon", rename_all = "snake_case")]
pub enum PageIcon<T> {
    /// Icon supplied by the page, passed through untouched
    Provided(T),
    Placeholder(PlaceholderIcon),
}

impl<T> PageIcon<T> {
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, PageIcon::Placeholder(_))
    }

    pub fn provided(&self) -> Option<&T> {
        match self {
            PageIcon::Provided(icon) => Some(icon),
            PageIcon::Placeholder(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageIcon<U> {
        match self {
            PageIcon::Provided(icon) => PageIcon::Provided(f(icon)),
            PageIcon::Placeholder(placeholder) => PageIcon::Placeholder(placeholder),
        }
    }
}

/// Resolves the icon for a page.
///
/// A provided icon is returned as-is whatever its representation. Otherwise a
/// fresh [`PlaceholderIcon`] of `size` pixels (default 18) is returned.
///
/// # Examples
///
/// ```
/// use pagefmt::core::icon::{PageIcon, resolve_page_icon};
///
/// assert_eq!(resolve_page_icon(Some("📄"), None), PageIcon::Provided("📄"));
/// assert!(resolve_page_icon::<&str>(None, Some(24)).is_placeholder());
/// ```
pub fn resolve_page_icon<T>(icon: Option<T>, size: Option<u32>) -> PageIcon<T> {
    match icon {
        Some(icon) => PageIcon::Provided(icon),
        None => PageIcon::Placeholder(PlaceholderIcon::new(size.unwrap_or(DEFAULT_ICON_SIZE))),
    }
}

/// Same as [`resolve_page_icon`] for text icons, treating `""` as absent.
pub fn resolve_page_icon_text(icon: Option<&str>, size: Option<u32>) -> PageIcon<&str> {
    resolve_page_icon(icon.filter(|i| !i.is_empty()), size)
}
