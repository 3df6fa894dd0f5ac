//! Summary specification types.
//!
//! A [`SummarySpec`] carries everything a caller may configure for a run:
//! the requested percentage, keywords, the trigger-phrase lexicon and the
//! currency markers. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "percentage": 30,
//!   "keywords": "revenue, profit",
//!   "phrases": { "en": ["therefore", "thus"], "id": ["kesimpulan"] },
//!   "currency_markers": ["Rp", "$"],
//!   "strict": false
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::runner::{HeuristicPipeline, Pipeline, SummaryRequest};
use super::traits::BucketAssembler;
use crate::errors::{ErrorCode, SpecError};
use crate::nlp::phrases::PhraseLexicon;
use crate::summarizer::scorer::HeuristicScorer;
use crate::types::{KeywordSet, Percentage};

/// The only spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Requested share of sentences; clamped into `1..=100`.
    #[serde(default)]
    pub percentage: Option<i64>,

    /// Keywords as a comma-separated string or a list.
    #[serde(default)]
    pub keywords: Option<KeywordsSpec>,

    /// Trigger phrases per language label. Omitted means the built-in list.
    #[serde(default)]
    pub phrases: Option<BTreeMap<String, Vec<String>>>,

    /// Case-sensitive currency markers. Omitted means `["Rp"]`.
    #[serde(default)]
    pub currency_markers: Option<Vec<String>>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Either form accepted for `keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordsSpec {
    Text(String),
    List(Vec<String>),
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            percentage: None,
            keywords: None,
            phrases: None,
            currency_markers: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarySpec {
    /// Parse a spec from JSON. Only syntax and types are checked here; run
    /// the validation engine for semantic checks.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|e| {
            SpecError::new(ErrorCode::InvalidJson, "", e.to_string())
                .with_hint("The spec must be a JSON object with at least \"v\": 1")
        })
    }

    /// Effective percentage (default 50, clamped).
    pub fn percentage(&self) -> Percentage {
        self.percentage.map(Percentage::new).unwrap_or_default()
    }

    /// Effective keyword set (empty when omitted).
    pub fn keywords(&self) -> KeywordSet {
        match &self.keywords {
            Some(KeywordsSpec::Text(text)) => KeywordSet::parse(text),
            Some(KeywordsSpec::List(list)) => KeywordSet::from_list(list),
            None => KeywordSet::empty(),
        }
    }

    /// Effective trigger-phrase lexicon.
    pub fn lexicon(&self) -> PhraseLexicon {
        match &self.phrases {
            Some(map) => PhraseLexicon::from_map(map.iter()),
            None => PhraseLexicon::default(),
        }
    }

    /// Scorer configured from this spec.
    pub fn scorer(&self) -> HeuristicScorer {
        let scorer = HeuristicScorer::new().with_lexicon(self.lexicon());
        match &self.currency_markers {
            Some(markers) => scorer.with_currency_markers(markers.iter().cloned()),
            None => scorer,
        }
    }

    /// Build the pipeline described by this spec.
    pub fn build_pipeline(&self) -> HeuristicPipeline {
        Pipeline {
            scorer: self.scorer(),
            assembler: BucketAssembler,
        }
    }

    /// Per-run inputs described by this spec.
    pub fn request(&self) -> SummaryRequest {
        SummaryRequest::new(self.keywords(), self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert_eq!(spec.percentage().get(), 50);
        assert!(spec.keywords().is_empty());
        assert_eq!(spec.lexicon(), PhraseLexicon::default());
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "percentage": 30,
            "keywords": "Revenue, profit",
            "phrases": { "en": ["Important"], "id": ["penting"] },
            "currency_markers": ["$"],
            "strict": true
        }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        assert_eq!(spec.percentage().get(), 30);
        assert_eq!(spec.keywords().iter().collect::<Vec<_>>(), vec!["revenue", "profit"]);
        assert_eq!(spec.lexicon().all_phrases(), vec!["important", "penting"]);
        assert!(spec.strict);
    }

    #[test]
    fn test_keywords_as_list() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "keywords": ["A", " b "] }"#).unwrap();
        assert_eq!(spec.keywords().iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_percentage_is_clamped() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "percentage": 0 }"#).unwrap();
        assert_eq!(spec.percentage().get(), 1);
        assert_eq!(spec.request().percentage.get(), 1);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "bogus_top_level": 42 }"#).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
    }

    #[test]
    fn test_invalid_json() {
        let err = SummarySpec::from_json("{ not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
        assert!(SummarySpec::from_json(r#"{ "percentage": 10 }"#).is_err());
    }

    #[test]
    fn test_build_pipeline_uses_spec_lexicon() {
        use crate::pipeline::observer::NoopObserver;

        let spec = SummarySpec::from_json(
            r#"{ "v": 1, "percentage": 1, "phrases": { "en": ["crucial"] } }"#,
        )
        .unwrap();
        let pipeline = spec.build_pipeline();
        let text = "Plain opener here. Middle one. A crucial point. Therefore the end. Tail.";
        let result = pipeline.run(text, &spec.request(), &mut NoopObserver);

        // Opener scores 3 + 2; "crucial" only adds 2, and "therefore" no longer counts.
        assert_eq!(result.summary_text, "Plain opener here.");
        assert_eq!(pipeline.scorer.lexicon().all_phrases(), vec!["crucial"]);
    }
}
