//! SVG asset conversion
//!
//! Icons and diagrams travel between the editor and storage either as raw
//! SVG markup or as base64 data URIs. This module converts between the two
//! and wraps markup in an uploadable file object.

use crate::core::error::{Error, Result};
use crate::validators::validate_file_name;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose};
use std::path::{Path, PathBuf};

/// MIME type declared on every SVG file object
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Data URI header stripped before decoding (exact, case-sensitive match)
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Standard alphabet that, like browser `atob`, accepts missing padding and
/// non-zero trailing bits.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// In-memory SVG file ready for upload or saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgFile {
    name: String,
    content: String,
}

impl SvgFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &'static str {
        SVG_MIME_TYPE
    }

    /// UTF-8 bytes of the markup
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Size in bytes (not characters)
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn as_text(&self) -> &str {
        &self.content
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }

    /// Base64 data URI of the markup, suitable for `<img src>`
    pub fn data_uri(&self) -> String {
        encode_svg_to_base64(&self.content)
    }

    /// Writes the file into `dir` under its own name using an atomic write pattern.
    /// 1. Validates the name is a single path component.
    /// 2. Writes to a uniquely named temporary file in the same directory.
    /// 3. Atomically renames it over the target path.
    ///
    /// The temporary file is removed if any step fails, and concurrent saves
    /// of the same name never share a temporary file.
    ///
    /// Returns the final path.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let name = validate_file_name(&self.name)?;

        let path = dir.join(name);
        let dir = dir.to_path_buf();
        let target = path.clone();
        let content = self.content.clone().into_bytes();

        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &content))
            .await
            .map_err(std::io::Error::other)?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::StorageFull {
                    std::io::Error::new(
                        std::io::ErrorKind::StorageFull,
                        "Disk full: cannot save SVG file. Free up space and try again.",
                    )
                } else {
                    e
                }
            })?;

        tracing::info!(path = %path.display(), size = self.size(), "Saved SVG file");
        Ok(path)
    }
}

fn write_atomic(dir: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    // Dropped (and deleted) on every early return below
    let mut temp = tempfile::Builder::new()
        .prefix(".pagefmt-")
        .suffix(".svg.tmp")
        .tempfile_in(dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Wraps SVG markup in a file object with the `image/svg+xml` MIME type.
///
/// The name is kept as given; it is only checked when the file is saved.
///
/// # Examples
///
/// ```
/// use pagefmt::core::svg::svg_string_to_file;
///
/// let file = svg_string_to_file("<svg/>", "diagram.svg");
/// assert_eq!(file.name(), "diagram.svg");
/// assert_eq!(file.mime_type(), "image/svg+xml");
/// assert_eq!(file.bytes(), b"<svg/>");
/// ```
pub fn svg_string_to_file(svg: &str, file_name: &str) -> SvgFile {
    SvgFile {
        name: file_name.to_string(),
        content: svg.to_string(),
    }
}

/// Encodes SVG markup as a `data:image/svg+xml;base64,` URI.
pub fn encode_svg_to_base64(svg: &str) -> String {
    format!(
        "{SVG_DATA_URI_PREFIX}{}",
        general_purpose::STANDARD.encode(svg.as_bytes())
    )
}

/// Decodes a base64 SVG payload, with or without the data URI header.
///
/// The payload is decoded to bytes first and then read as UTF-8, so
/// multi-byte characters survive. Invalid UTF-8 sequences are replaced with
/// U+FFFD and a leading byte order mark is dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if the payload is not valid base64.
pub fn decode_base64_to_svg_string(data: &str) -> Result<String> {
    let payload = data.strip_prefix(SVG_DATA_URI_PREFIX).unwrap_or(data);
    decode_base64_utf8(payload)
}

fn decode_base64_utf8(payload: &str) -> Result<String> {
    // atob ignores ASCII whitespace, so wrapped payloads decode as well
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = FORGIVING.decode(compact).map_err(Error::InvalidEncoding)?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "Decoded SVG payload is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}
