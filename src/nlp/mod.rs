//! Natural Language Processing components
//!
//! This module provides whitespace normalization, sentence segmentation and
//! the trigger-phrase lexicon used by the scorer.

pub mod normalize;
pub mod phrases;
pub mod segmenter;

pub use normalize::normalize;
pub use phrases::PhraseLexicon;
pub use segmenter::segment;
