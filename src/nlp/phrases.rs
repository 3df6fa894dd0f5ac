//! Trigger-phrase lexicon
//!
//! Signal phrases ("therefore", "kesimpulan", ...) are grouped under a
//! language label so new languages can be added as configuration instead of
//! touching the scorer. Matching is case-insensitive substring containment.

use rustc_hash::FxHashMap;

/// Built-in English signal phrases
const ENGLISH_PHRASES: &[&str] = &["concluding", "concluded", "therefore", "thus", "hence"];

/// Built-in Indonesian signal phrases
const INDONESIAN_PHRASES: &[&str] = &[
    "penting",
    "signifikan",
    "utama",
    "kunci",
    "kesimpulan",
    "hasil",
    "sehingga",
    "mengakibatkan",
    "menyebabkan",
    "berdampak",
    "menghasilkan",
];

/// Mapping from a language label to an ordered list of trigger phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseLexicon {
    /// Phrases per language label (lowercase)
    languages: FxHashMap<String, Vec<String>>,
    /// Labels in insertion order, so iteration is deterministic
    order: Vec<String>,
}

impl Default for PhraseLexicon {
    /// The built-in bilingual list (`en` and `id`)
    fn default() -> Self {
        let mut lexicon = Self::empty();
        lexicon.add_phrases("en", ENGLISH_PHRASES);
        lexicon.add_phrases("id", INDONESIAN_PHRASES);
        lexicon
    }
}

impl PhraseLexicon {
    /// Create an empty lexicon (phrase scoring contributes nothing)
    pub fn empty() -> Self {
        Self {
            languages: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Create a lexicon holding only the built-in list for `language`.
    ///
    /// Supported: en, id. Unknown labels yield an empty lexicon.
    pub fn builtin(language: &str) -> Self {
        let mut lexicon = Self::empty();
        match language.to_lowercase().as_str() {
            "en" | "english" => lexicon.add_phrases("en", ENGLISH_PHRASES),
            "id" | "indonesian" => lexicon.add_phrases("id", INDONESIAN_PHRASES),
            _ => {}
        }
        lexicon
    }

    /// Build a lexicon from `(label, phrases)` pairs
    pub fn from_map<I, L, P, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, P)>,
        L: AsRef<str>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::empty();
        for (label, phrases) in entries {
            let phrases: Vec<S> = phrases.into_iter().collect();
            lexicon.add_phrases(label.as_ref(), &phrases);
        }
        lexicon
    }

    /// Add phrases under `language`, creating the label if needed.
    ///
    /// Phrases are trimmed and lower-cased; blanks and repeats are skipped.
    pub fn add_phrases<S: AsRef<str>>(&mut self, language: &str, phrases: &[S]) {
        let label = language.trim().to_lowercase();
        if !self.languages.contains_key(&label) {
            self.order.push(label.clone());
        }
        let entry = self.languages.entry(label).or_default();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !entry.contains(&phrase) {
                entry.push(phrase);
            }
        }
    }

    /// Remove a whole language label
    pub fn remove_language(&mut self, language: &str) {
        let label = language.trim().to_lowercase();
        self.languages.remove(&label);
        self.order.retain(|l| l != &label);
    }

    /// Language labels in insertion order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Phrases registered under `language`
    pub fn phrases(&self, language: &str) -> &[String] {
        self.languages
            .get(&language.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every distinct phrase across all labels, first occurrence order
    pub fn all_phrases(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for label in &self.order {
            for phrase in &self.languages[label] {
                if !out.contains(&phrase.as_str()) {
                    out.push(phrase.as_str());
                }
            }
        }
        out
    }

    /// Count distinct phrases contained in `lowered` (already lower-cased)
    pub fn count_matches(&self, lowered: &str) -> usize {
        self.all_phrases()
            .into_iter()
            .filter(|phrase| lowered.contains(*phrase))
            .count()
    }

    /// Total number of distinct phrases
    pub fn len(&self) -> usize {
        self.all_phrases().len()
    }

    /// Check if the lexicon has no phrases
    pub fn is_empty(&self) -> bool {
        self.languages.values().all(Vec::is_empty)
    }
}
