use std::io::Write;

use comment_sentiment::normalization::{
    normalize, NormalizationConfig, SlangDictionary, TextNormalizer,
};
use proptest::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn loads_dictionary_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ko\tkhông").unwrap();
    writeln!(file, "thik\tthích").unwrap();
    writeln!(file, "ko\tkhông hề").unwrap();

    let dictionary = SlangDictionary::from_path(file.path()).unwrap();
    let normalizer = TextNormalizer::new(dictionary, NormalizationConfig::default());

    assert_eq!(normalizer.dictionary().len(), 2);
    assert_eq!(normalizer.normalize("ko thik"), "không hề thích");
}

#[test]
fn invalid_utf8_dictionary_is_a_startup_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"ko\t\xff\xfe\n").unwrap();

    let err = SlangDictionary::from_path(file.path()).unwrap_err();

    assert!(err.is_startup());
}

#[test]
fn examples_from_the_contract() {
    let config = NormalizationConfig::default();
    let empty = SlangDictionary::default();
    let ko: SlangDictionary = [("ko", "không")].into_iter().collect();

    assert_eq!(normalize("", &ko, &config), "");
    assert_eq!(normalize("HELLO world", &empty, &config), "hello world");
    assert_eq!(normalize("ko thích đâu", &ko, &config), "không thích đâu");
    assert_eq!(normalize("a   b", &empty, &config), "a b");
}

fn chain() -> SlangDictionary {
    [("a", "b"), ("b", "c"), ("c", "a")].into_iter().collect()
}

proptest! {
    #[test]
    fn output_is_single_spaced(text in "\\PC*") {
        let out = normalize(&text, &chain(), &NormalizationConfig::default());
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains(['\t', '\n', '\r']));
    }

    #[test]
    fn whitespace_only_normalizes_to_empty(text in "[ \t\n\r]*") {
        prop_assert_eq!(normalize(&text, &chain(), &NormalizationConfig::default()), "");
    }

    #[test]
    fn each_token_is_substituted_once(tokens in prop::collection::vec("[abcd]", 0..20)) {
        let text = tokens.join("  ");
        let expected: Vec<&str> = tokens
            .iter()
            .map(|t| match t.as_str() {
                "a" => "b",
                "b" => "c",
                "c" => "a",
                other => other,
            })
            .collect();

        prop_assert_eq!(
            normalize(&text, &chain(), &NormalizationConfig::default()),
            expected.join(" ")
        );
    }

    #[test]
    fn empty_dictionary_only_folds_case_and_spacing(text in "\\PC*") {
        let out = normalize(&text, &SlangDictionary::default(), &NormalizationConfig::default());
        let expected = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn normalization_is_deterministic(text in "\\PC*") {
        let config = NormalizationConfig::default();
        prop_assert_eq!(normalize(&text, &chain(), &config), normalize(&text, &chain(), &config));
    }
}
