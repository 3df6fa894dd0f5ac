//! Document text extraction boundary.
//!
//! Binary formats (PDF, Word) are parsed by external collaborators that
//! implement [`DocumentExtractor`]. Only plain text ships with this crate.

use crate::errors::ExtractError;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_MSWORD: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

/// Converts uploaded bytes into plain text.
pub trait DocumentExtractor: Send + Sync {
    /// True if this extractor understands `mime`.
    fn supports(&self, mime: &str) -> bool;

    fn extract(&self, name: &str, mime: &str, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// UTF-8 plain text extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn supports(&self, mime: &str) -> bool {
        mime == MIME_TEXT
    }

    fn extract(&self, name: &str, mime: &str, bytes: &[u8]) -> Result<String, ExtractError> {
        if !self.supports(mime) {
            return Err(ExtractError::Unsupported {
                name: name.to_string(),
                mime: mime.to_string(),
            });
        }
        let text = std::str::from_utf8(bytes).map_err(|source| ExtractError::Encoding {
            name: name.to_string(),
            source,
        })?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }
}

/// Guess a MIME type from a file name's extension.
pub fn mime_from_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(MIME_PDF),
        "doc" => Some(MIME_MSWORD),
        "docx" => Some(MIME_DOCX),
        "txt" | "text" | "md" => Some(MIME_TEXT),
        _ => None,
    }
}
