//! Error types.
//!
//! The summarization pipeline itself cannot fail; errors only arise while
//! loading configuration, extracting documents, or managing a session.

use serde::Serialize;
use thiserror::Error;

/// Stable, machine-readable identifiers for configuration diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The JSON document could not be parsed.
    InvalidJson,
    /// `v` is not a supported version.
    UnsupportedVersion,
    /// The requested percentage was outside `1..=100` and was clamped.
    PercentageClamped,
    /// A phrase-lexicon label has no phrases.
    EmptyPhraseList,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::UnsupportedVersion => "unsupported_version",
            Self::PercentageClamped => "percentage_clamped",
            Self::EmptyPhraseList => "empty_phrase_list",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration problem located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field (empty for the root).
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure turning an uploaded file into plain text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No extractor is registered for this MIME type.
    #[error("{name}: no text extractor for {mime}")]
    Unsupported { name: String, mime: String },

    /// Bytes are not valid text in the expected encoding.
    #[error("{name}: invalid text encoding: {source}")]
    Encoding {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Errors raised by [`crate::session::Session`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{name} is not a valid document type ({mime})")]
    UnsupportedType { name: String, mime: String },

    #[error("{name} is already uploaded")]
    DuplicateDocument { name: String },

    #[error("no document at index {index}")]
    NoSuchDocument { index: usize },

    #[error("please upload at least one document")]
    NoDocuments,

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
