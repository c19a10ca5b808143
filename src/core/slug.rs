//! Slug helpers for page URLs and space short codes
//!
//! Page URLs carry a human-readable title followed by the page id, e.g.
//! `meeting-notes-9f8a7b6c` or `meeting-notes-123e4567-e89b-12d3-a456-426614174000`.
//! Spaces are labelled with a short code derived from their name.

use uuid::Uuid;

/// Length of a UUID in hyphenated 8-4-4-4-12 form
const HYPHENATED_UUID_LEN: usize = 36;

/// Returns true only for the hyphenated textual form (any hex case).
///
/// `Uuid::parse_str` also accepts simple, braced and URN forms, none of which
/// are 36 bytes long.
fn is_hyphenated_uuid(text: &str) -> bool {
    text.len() == HYPHENATED_UUID_LEN && Uuid::parse_str(text).is_ok()
}

/// Trailing `-<uuid>` of a compound slug, without the separator
fn uuid_suffix(slug: &str) -> Option<&str> {
    let start = slug.len().checked_sub(HYPHENATED_UUID_LEN + 1)?;
    let suffix = slug.get(start..)?.strip_prefix('-')?;
    is_hyphenated_uuid(suffix).then_some(suffix)
}

/// Extracts the page id from a URL slug.
///
/// - Absent or empty slug: `None`
/// - Bare UUID: returned unchanged
/// - Slug ending in `-<uuid>`: the UUID
/// - Otherwise: the last `-` separated segment, or the whole slug when it
///   has no `-` at all
///
/// The last segment is not validated, so any hyphenated text yields its tail.
///
/// # Examples
///
/// ```
/// use pagefmt::core::slug::extract_page_slug_id;
///
/// assert_eq!(extract_page_slug_id(Some("meeting-notes-9f8a7b6c")), Some("9f8a7b6c"));
/// assert_eq!(extract_page_slug_id(Some("")), None);
/// assert_eq!(extract_page_slug_id(None), None);
/// ```
pub fn extract_page_slug_id(slug: Option<&str>) -> Option<&str> {
    let slug = slug.filter(|s| !s.is_empty())?;

    if is_hyphenated_uuid(slug) {
        return Some(slug);
    }

    if let Some(id) = uuid_suffix(slug) {
        tracing::debug!(slug, id, "Extracted UUID suffix from page slug");
        return Some(id);
    }

    Some(slug.rsplit_once('-').map_or(slug, |(_, last)| last))
}

/// Computes the short code shown for a space.
///
/// Everything except ASCII letters, digits and whitespace is dropped first.
/// Multi-word names become their upper-cased initials (`"Engineering Team"`
/// -> `"ET"`), single words are lower-cased (`"R&D!!"` -> `"rd"`). Words are
/// split on single spaces and empty words are skipped.
pub fn compute_space_slug(name: &str) -> String {
    let alphanumeric: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    if alphanumeric.contains(' ') {
        alphanumeric
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    } else {
        alphanumeric.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn test_slug_id_absent() {
        assert_eq!(extract_page_slug_id(None), None);
        assert_eq!(extract_page_slug_id(Some("")), None);
    }

    #[test]
    fn test_slug_id_bare_uuid() {
        assert_eq!(extract_page_slug_id(Some(ID)), Some(ID));
    }

    #[test]
    fn test_slug_id_bare_uuid_uppercase() {
        let upper = ID.to_uppercase();
        assert_eq!(extract_page_slug_id(Some(upper.as_str())), Some(upper.as_str()));
    }

    #[test]
    fn test_slug_id_title_with_uuid_suffix() {
        let slug = format!("my-page-title-{ID}");
        assert_eq!(extract_page_slug_id(Some(slug.as_str())), Some(ID));
    }

    #[test]
    fn test_slug_id_title_with_short_id() {
        assert_eq!(
            extract_page_slug_id(Some("meeting-notes-9f8a7b6c")),
            Some("9f8a7b6c")
        );
    }

    #[test]
    fn test_slug_id_single_word() {
        assert_eq!(extract_page_slug_id(Some("singleword")), Some("singleword"));
    }

    #[test]
    fn test_slug_id_unvalidated_tail() {
        assert_eq!(extract_page_slug_id(Some("not-a-uuid")), Some("uuid"));
        assert_eq!(extract_page_slug_id(Some("trailing-")), Some(""));
    }

    #[test]
    fn test_slug_id_simple_uuid_form_is_single_segment() {
        let simple = "123e4567e89b12d3a456426614174000";
        assert_eq!(extract_page_slug_id(Some(simple)), Some(simple));
    }

    #[test]
    fn test_slug_id_braced_uuid_not_passthrough() {
        let braced = format!("{{{ID}}}");
        assert_eq!(
            extract_page_slug_id(Some(braced.as_str())),
            Some("426614174000}")
        );
    }

    #[test]
    fn test_slug_id_multibyte_title() {
        let slug = format!("café-crème-{ID}");
        assert_eq!(extract_page_slug_id(Some(slug.as_str())), Some(ID));
        assert_eq!(extract_page_slug_id(Some("café-crème")), Some("crème"));
    }

    #[test]
    fn test_space_slug_initials() {
        assert_eq!(compute_space_slug("Engineering Team"), "ET");
        assert_eq!(compute_space_slug("product design review"), "PDR");
    }

    #[test]
    fn test_space_slug_single_word() {
        assert_eq!(compute_space_slug("engineering"), "engineering");
        assert_eq!(compute_space_slug("Engineering"), "engineering");
    }

    #[test]
    fn test_space_slug_strips_symbols() {
        assert_eq!(compute_space_slug("R&D!!"), "rd");
        assert_eq!(compute_space_slug("Q&A / Support"), "QS");
    }

    #[test]
    fn test_space_slug_skips_empty_words() {
        assert_eq!(compute_space_slug("  Design   Ops "), "DO");
        assert_eq!(compute_space_slug(" "), "");
    }

    #[test]
    fn test_space_slug_non_ascii_dropped() {
        assert_eq!(compute_space_slug("Équipe Données"), "QD");
        assert_eq!(compute_space_slug("日本"), "");
    }

    #[test]
    fn test_space_slug_empty() {
        assert_eq!(compute_space_slug(""), "");
    }

    #[test]
    fn test_space_slug_digits() {
        assert_eq!(compute_space_slug("2024 Roadmap"), "2R");
    }
}
