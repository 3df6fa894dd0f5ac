//! Caller-owned summarization session.
//!
//! A [`Session`] holds the uploaded documents together with the current
//! percentage and keywords, and produces one [`SummaryResult`] per document.
//! Nothing here is global: front ends create and own as many sessions as
//! they need.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::SessionError;
use crate::extract::{DocumentExtractor, MIME_DOCX, MIME_MSWORD, MIME_PDF, MIME_TEXT};
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::{HeuristicPipeline, SummaryRequest};
use crate::pipeline::spec::SummarySpec;
use crate::types::{Document, KeywordSet, Percentage, SummaryResult};

/// MIME types accepted by default.
pub const DEFAULT_ACCEPTED_TYPES: [&str; 4] = [MIME_PDF, MIME_MSWORD, MIME_DOCX, MIME_TEXT];

/// A document's summary together with the keywords it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub keywords: KeywordSet,
    #[serde(flatten)]
    pub result: SummaryResult,
}

#[derive(Debug, Clone)]
struct Entry {
    document: Document,
    mime: String,
    summary: Option<SummaryResult>,
}

/// Uploaded documents plus the settings used to summarize them.
#[derive(Debug, Clone)]
pub struct Session {
    pipeline: HeuristicPipeline,
    accepted_types: Vec<String>,
    entries: Vec<Entry>,
    percentage: Percentage,
    keywords: KeywordSet,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session with the default pipeline, 50% and no keywords.
    pub fn new() -> Self {
        Self {
            pipeline: HeuristicPipeline::heuristic(),
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|s| s.to_string()).collect(),
            entries: Vec::new(),
            percentage: Percentage::default(),
            keywords: KeywordSet::empty(),
        }
    }

    /// Session configured from a spec (pipeline, percentage and keywords).
    pub fn from_spec(spec: &SummarySpec) -> Self {
        Self {
            pipeline: spec.build_pipeline(),
            percentage: spec.percentage(),
            keywords: spec.keywords(),
            ..Self::new()
        }
    }

    /// Replace the accepted MIME types.
    pub fn with_accepted_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_accepted(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|t| t == mime)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.document.name == name)
    }

    /// Add a document whose text is already extracted.
    pub fn add_document(
        &mut self,
        name: impl Into<String>,
        mime: &str,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        let name = name.into();
        self.check_upload(&name, mime)?;
        info!(document = %name, "document added");
        self.entries.push(Entry {
            document: Document::new(name, text),
            mime: mime.to_string(),
            summary: None,
        });
        Ok(())
    }

    /// Check type and name, extract the text, then add the document.
    pub fn upload(
        &mut self,
        extractor: &dyn DocumentExtractor,
        name: &str,
        mime: &str,
        bytes: &[u8],
    ) -> Result<(), SessionError> {
        self.check_upload(name, mime)?;
        debug!(document = name, mime, bytes = bytes.len(), "extracting text");
        let text = extractor.extract(name, mime, bytes)?;
        self.add_document(name, mime, text)
    }

    fn check_upload(&self, name: &str, mime: &str) -> Result<(), SessionError> {
        if !self.is_accepted(mime) {
            return Err(SessionError::UnsupportedType {
                name: name.to_string(),
                mime: mime.to_string(),
            });
        }
        if self.contains(name) {
            return Err(SessionError::DuplicateDocument {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Remove the document at `index`.
    pub fn remove_document(&mut self, index: usize) -> Result<Document, SessionError> {
        if index >= self.entries.len() {
            return Err(SessionError::NoSuchDocument { index });
        }
        let entry = self.entries.remove(index);
        info!(document = %entry.document.name, "document removed");
        Ok(entry.document)
    }

    /// Drop every document and reset keywords.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.keywords = KeywordSet::empty();
        info!("session cleared");
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.entries.iter().map(|e| &e.document)
    }

    /// MIME type recorded for the document named `name`.
    pub fn mime(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.document.name == name)
            .map(|e| e.mime.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn set_keywords(&mut self, keywords: KeywordSet) {
        self.keywords = keywords;
    }

    /// Change the percentage (clamped).
    ///
    /// When summaries already exist they are regenerated at the new
    /// percentage and returned.
    pub fn set_percentage(&mut self, percentage: i64) -> Option<Vec<DocumentSummary>> {
        if Percentage::is_out_of_range(percentage) {
            warn!(requested = percentage, "percentage clamped into 1..=100");
        }
        self.percentage = Percentage::new(percentage);
        if self.has_summaries() {
            self.summarize_all().ok()
        } else {
            None
        }
    }

    pub fn has_summaries(&self) -> bool {
        self.entries.iter().any(|e| e.summary.is_some())
    }

    /// Stored summary for the document named `name`.
    pub fn summary(&self, name: &str) -> Option<&SummaryResult> {
        self.entries
            .iter()
            .find(|e| e.document.name == name)
            .and_then(|e| e.summary.as_ref())
    }

    /// Summarize every document, one task per document.
    ///
    /// Results are stored on the session and returned in upload order.
    pub fn summarize_all(&mut self) -> Result<Vec<DocumentSummary>, SessionError> {
        if self.entries.is_empty() {
            return Err(SessionError::NoDocuments);
        }

        let request = SummaryRequest::new(self.keywords.clone(), self.percentage);
        let pipeline = &self.pipeline;
        let results: Vec<SummaryResult> = self
            .entries
            .par_iter()
            .map(|e| pipeline.run(&e.document.text, &request, &mut NoopObserver))
            .collect();

        let mut out = Vec::with_capacity(results.len());
        for (entry, result) in self.entries.iter_mut().zip(results) {
            debug!(
                document = %entry.document.name,
                sentences = result.original_sentence_count,
                selected = result.summary_sentence_count,
                "summarized"
            );
            entry.summary = Some(result.clone());
            out.push(DocumentSummary {
                name: entry.document.name.clone(),
                keywords: self.keywords.clone(),
                result,
            });
        }
        info!(documents = out.len(), percentage = self.percentage.get(), "summaries generated");
        Ok(out)
    }
}

/// File name used when saving a document's summary.
pub fn summary_file_name(document_name: &str) -> String {
    format!("summary_{document_name}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PlainTextExtractor;

    const REPORT: &str = "Revenue grew 12%. The team met weekly. \
                          Costs were reduced significantly. Therefore profit increased.";

    #[test]
    fn test_add_and_summarize() {
        let mut session = Session::new();
        session.add_document("report.txt", MIME_TEXT, REPORT).unwrap();
        session.add_document("empty.pdf", MIME_PDF, "").unwrap();

        let summaries = session.summarize_all().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "report.txt");
        assert_eq!(summaries[0].result.summary_sentence_count, 2);
        assert!(summaries[1].result.is_empty());
        assert!(session.summary("report.txt").is_some());
    }

    #[test]
    fn test_rejects_duplicates_and_bad_types() {
        let mut session = Session::new();
        session.add_document("a.txt", MIME_TEXT, REPORT).unwrap();

        let dup = session.add_document("a.txt", MIME_TEXT, "Other.").unwrap_err();
        assert!(matches!(dup, SessionError::DuplicateDocument { .. }));

        let bad = session.add_document("pic.png", "image/png", "").unwrap_err();
        assert!(matches!(bad, SessionError::UnsupportedType { .. }));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_upload_through_extractor() {
        let mut session = Session::new();
        session
            .upload(&PlainTextExtractor, "notes.txt", MIME_TEXT, REPORT.as_bytes())
            .unwrap();
        assert_eq!(session.mime("notes.txt"), Some(MIME_TEXT));

        // Accepted type without an extractor surfaces the extraction error.
        let err = session
            .upload(&PlainTextExtractor, "scan.pdf", MIME_PDF, b"%PDF-1.4")
            .unwrap_err();
        assert!(matches!(err, SessionError::Extract(_)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_summarize_without_documents() {
        let mut session = Session::new();
        assert!(matches!(session.summarize_all(), Err(SessionError::NoDocuments)));
    }

    #[test]
    fn test_set_percentage_regenerates() {
        let mut session = Session::new();
        session.add_document("r.txt", MIME_TEXT, REPORT).unwrap();

        assert!(session.set_percentage(25).is_none());
        session.summarize_all().unwrap();

        let redone = session.set_percentage(150).unwrap();
        assert_eq!(session.percentage().get(), 100);
        assert_eq!(redone[0].result.summary_sentence_count, 4);
        assert_eq!(session.summary("r.txt").unwrap().percentage, 100);
    }

    #[test]
    fn test_keywords_flow_into_results() {
        let mut session = Session::new();
        session.set_keywords(KeywordSet::parse("Team"));
        assert!(session.set_percentage(75).is_none());
        session.add_document("r.txt", MIME_TEXT, REPORT).unwrap();

        let summaries = session.summarize_all().unwrap();
        assert_eq!(summaries[0].keywords.display(), "team");
        assert!(summaries[0].result.summary_text.contains("The team met weekly."));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = Session::new();
        session.add_document("a.txt", MIME_TEXT, "A.").unwrap();
        session.add_document("b.txt", MIME_TEXT, "B.").unwrap();
        session.set_keywords(KeywordSet::parse("x"));

        let removed = session.remove_document(0).unwrap();
        assert_eq!(removed.name, "a.txt");
        assert!(matches!(
            session.remove_document(5),
            Err(SessionError::NoSuchDocument { index: 5 })
        ));

        session.clear();
        assert!(session.is_empty());
        assert!(session.keywords().is_empty());
    }

    #[test]
    fn test_from_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "percentage": 25, "keywords": "team" }"#)
            .unwrap();
        let mut session = Session::from_spec(&spec);
        session.add_document("r.txt", MIME_TEXT, REPORT).unwrap();

        let summaries = session.summarize_all().unwrap();
        assert_eq!(summaries[0].result.percentage, 25);
        assert_eq!(summaries[0].result.summary_sentence_count, 1);
    }

    #[test]
    fn test_summary_file_name() {
        assert_eq!(summary_file_name("report.pdf"), "summary_report.pdf.txt");
    }

    #[test]
    fn test_document_summary_serializes_flat() {
        let mut session = Session::new();
        session.add_document("r.txt", MIME_TEXT, REPORT).unwrap();
        let summaries = session.summarize_all().unwrap();

        let value = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(value["name"], "r.txt");
        assert_eq!(value["original_sentence_count"], 4);
        assert!(value["keywords"].as_array().unwrap().is_empty());
    }
}
