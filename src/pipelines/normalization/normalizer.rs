use super::slang::SlangDictionary;

/// Switches for the normalization steps. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationConfig {
    /// Replace slang tokens with their dictionary entry.
    pub replace_slang: bool,
    /// Fold the result to lowercase.
    pub lowercase: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            replace_slang: true,
            lowercase: true,
        }
    }
}

/// Normalize a raw comment into the form the classifier was trained on.
///
/// The text is split on runs of whitespace and rejoined with single spaces.
/// When `config.replace_slang` is set and the dictionary is non-empty, every
/// token found in `dictionary` is replaced by its entry, once. Replacements are
/// never looked up again, so `a -> b, b -> c` turns `"a"` into `"b"`. Case
/// folding runs last, so dictionary keys match the original casing.
///
/// Total over all inputs: empty or whitespace-only text yields `""`.
///
/// ```rust
/// use comment_sentiment::normalization::{normalize, NormalizationConfig, SlangDictionary};
///
/// let dictionary: SlangDictionary = [("ko", "không")].into_iter().collect();
/// let config = NormalizationConfig::default();
///
/// assert_eq!(normalize("ko   thích ĐÂU", &dictionary, &config), "không thích đâu");
/// assert_eq!(normalize("   ", &dictionary, &config), "");
/// ```
pub fn normalize(raw: &str, dictionary: &SlangDictionary, config: &NormalizationConfig) -> String {
    let substitute = config.replace_slang && !dictionary.is_empty();

    let text = raw
        .split_whitespace()
        .map(|token| {
            if substitute {
                dictionary.get(token).unwrap_or(token)
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if config.lowercase {
        text.to_lowercase()
    } else {
        text
    }
}

/// A slang dictionary and a config, bundled once at startup.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    dictionary: SlangDictionary,
    config: NormalizationConfig,
}

impl TextNormalizer {
    pub fn new(dictionary: SlangDictionary, config: NormalizationConfig) -> Self {
        Self { dictionary, config }
    }

    /// See [`normalize`].
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, &self.dictionary, &self.config)
    }

    pub fn dictionary(&self) -> &SlangDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teencode() -> SlangDictionary {
        [("ko", "không"), ("dc", "được"), ("j", "gì")]
            .into_iter()
            .collect()
    }

    #[test]
    fn empty_input_stays_empty() {
        let config = NormalizationConfig::default();
        assert_eq!(normalize("", &teencode(), &config), "");
        assert_eq!(normalize("", &SlangDictionary::default(), &config), "");
        assert_eq!(normalize(" \t\n ", &teencode(), &config), "");
    }

    #[test]
    fn lowercases_without_dictionary() {
        let config = NormalizationConfig::default();
        assert_eq!(
            normalize("HELLO world", &SlangDictionary::default(), &config),
            "hello world"
        );
    }

    #[test]
    fn replaces_slang_tokens() {
        let config = NormalizationConfig::default();
        assert_eq!(
            normalize("ko thích đâu", &teencode(), &config),
            "không thích đâu"
        );
        assert_eq!(
            normalize("làm j dc", &teencode(), &config),
            "làm gì được"
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        let config = NormalizationConfig::default();
        assert_eq!(normalize("a   b", &SlangDictionary::default(), &config), "a b");
        assert_eq!(normalize("  ko\t\tdc  ", &teencode(), &config), "không được");
    }

    #[test]
    fn substitutes_once_per_token() {
        let dictionary: SlangDictionary = [("a", "b"), ("b", "c")].into_iter().collect();
        let config = NormalizationConfig::default();

        let once = normalize("a b", &dictionary, &config);
        assert_eq!(once, "b c");
        // A second pass is allowed to change it further.
        assert_eq!(normalize(&once, &dictionary, &config), "c c");
    }

    #[test]
    fn lookup_happens_before_case_folding() {
        let config = NormalizationConfig::default();
        assert_eq!(normalize("KO ko", &teencode(), &config), "ko không");
    }

    #[test]
    fn folds_vietnamese_case() {
        let config = NormalizationConfig::default();
        assert_eq!(
            normalize("ĐẸP QUÁ", &SlangDictionary::default(), &config),
            "đẹp quá"
        );
    }

    #[test]
    fn switches_disable_steps() {
        let keep_case = NormalizationConfig {
            replace_slang: true,
            lowercase: false,
        };
        assert_eq!(normalize("KO ko", &teencode(), &keep_case), "KO không");

        let keep_slang = NormalizationConfig {
            replace_slang: false,
            lowercase: true,
        };
        assert_eq!(normalize("KO ko", &teencode(), &keep_slang), "ko ko");
    }

    #[test]
    fn replacement_may_contain_spaces() {
        let dictionary: SlangDictionary = [("bn", "bao nhiêu")].into_iter().collect();
        let normalizer = TextNormalizer::new(dictionary, NormalizationConfig::default());
        assert_eq!(normalizer.normalize("giá bn"), "giá bao nhiêu");
    }
}
