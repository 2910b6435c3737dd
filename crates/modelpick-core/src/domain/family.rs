//! Known architecture families and best-effort family detection.

use super::raw::RawModelInfo;

/// Default vocabulary in priority order.
///
/// More specific names precede the names they contain (`qwen2` before
/// `qwen`, `gpt_neox` before `gpt_neo`) so substring matching on the
/// repository id picks the most specific family.
pub const DEFAULT_FAMILIES: &[&str] = &[
    "qwen3", "qwen2", "qwen", "llama", "mistral", "phi", "gpt2", "gpt_neox", "gpt_neo", "bloom",
    "opt", "falcon", "mpt", "stablelm",
];

/// Ordered, lower-case set of architecture family identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyVocabulary {
    families: Vec<String>,
}

impl Default for FamilyVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILIES.iter().copied())
    }
}

impl FamilyVocabulary {
    /// Build a vocabulary from names in priority order.
    ///
    /// Names are trimmed and lower-cased; empty names and duplicates are
    /// dropped, keeping the first occurrence.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self {
            families: Vec::new(),
        };
        vocabulary.extend(families);
        vocabulary
    }

    /// Append extra families after the existing ones.
    #[must_use]
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(extra);
        self
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !self.families.contains(&name) {
                self.families.push(name);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Exact lookup, returning the vocabulary's own spelling.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.iter().find(|family| *family == name)
    }

    /// Detect the family of a candidate.
    ///
    /// Tried in order: the config `model_type`, the first tag that is a
    /// known family, then the first family (in priority order) appearing as
    /// a substring of the lower-cased repository id.
    pub fn detect(&self, info: &RawModelInfo) -> Option<&str> {
        if let Some(family) = info.model_type.as_deref().and_then(|t| self.lookup(t)) {
            return Some(family);
        }

        if let Some(family) = info
            .tags
            .iter()
            .flatten()
            .find_map(|tag| self.lookup(tag))
        {
            return Some(family);
        }

        let id = info.id.to_lowercase();
        self.iter().find(|family| id.contains(family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_model_type_wins() {
        let vocab = FamilyVocabulary::default();
        let info = RawModelInfo::new("someone/llama-finetune")
            .with_model_type("mistral")
            .with_tags(["llama"]);
        assert_eq!(vocab.detect(&info), Some("mistral"));
    }

    #[test]
    fn test_unknown_model_type_falls_back_to_tags() {
        let vocab = FamilyVocabulary::default();
        let info = RawModelInfo::new("someone/model")
            .with_model_type("mamba")
            .with_tags(["text-generation", "falcon", "llama"]);
        assert_eq!(vocab.detect(&info), Some("falcon"));
    }

    #[test]
    fn test_id_substring_prefers_specific_family() {
        let vocab = FamilyVocabulary::default();
        let info = RawModelInfo::new("Qwen/Qwen2-0.5B-Instruct");
        assert_eq!(vocab.detect(&info), Some("qwen2"));

        let info = RawModelInfo::new("EleutherAI/gpt-neox-20b");
        assert_eq!(vocab.detect(&info), None);

        let info = RawModelInfo::new("EleutherAI/gpt_neox_20b");
        assert_eq!(vocab.detect(&info), Some("gpt_neox"));
    }

    #[test]
    fn test_no_match_is_none() {
        let vocab = FamilyVocabulary::default();
        let info = RawModelInfo::new("google/gemma-2b").with_tags(["gemma"]);
        assert_eq!(vocab.detect(&info), None);
    }

    #[test]
    fn test_extra_families_are_normalized_and_deduplicated() {
        let vocab = FamilyVocabulary::default().with_extra([" Gemma ", "llama", ""]);
        assert_eq!(vocab.len(), DEFAULT_FAMILIES.len() + 1);
        assert_eq!(vocab.iter().last(), Some("gemma"));

        let info = RawModelInfo::new("google/gemma-2b");
        assert_eq!(vocab.detect(&info), Some("gemma"));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let vocab = FamilyVocabulary::default();
        let info = RawModelInfo::new("someone/mistral-llama-phi-merge");
        let first = vocab.detect(&info);
        for _ in 0..10 {
            assert_eq!(vocab.detect(&info), first);
        }
        assert_eq!(first, Some("llama"));
    }
}
