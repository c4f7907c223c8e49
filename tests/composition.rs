// Composition tests — the full pipeline from document source to score.
//
// These exercise the dispatcher end to end through an in-memory document
// source (and the filesystem source for the missing-file path), without any
// terminal output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use graphite::compare::{compare_paths, compare_texts, profile_text, run, Comparison, Feature};
use graphite::source::{DocumentSource, FsDocumentSource};

/// A document source backed by a map, for tests.
struct MemorySource(HashMap<PathBuf, String>);

impl MemorySource {
    fn new(docs: &[(&str, &str)]) -> Self {
        Self(
            docs.iter()
                .map(|(path, text)| (PathBuf::from(path), text.to_string()))
                .collect(),
        )
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, path: &Path) -> Result<String> {
        match self.0.get(path) {
            Some(text) => Ok(text.clone()),
            None => bail!("no such document: {}", path.display()),
        }
    }
}

// ============================================================
// Feature parsing
// ============================================================

#[test]
fn feature_names_parse_case_insensitively() {
    assert_eq!("conjunctions".parse::<Feature>().unwrap(), Feature::Conjunctions);
    assert_eq!("Conjunctions".parse::<Feature>().unwrap(), Feature::Conjunctions);
    assert_eq!("UNIGRAMS".parse::<Feature>().unwrap(), Feature::Unigrams);
    assert_eq!("Composite".parse::<Feature>().unwrap(), Feature::Composite);
}

#[test]
fn unknown_feature_name_fails_to_parse() {
    assert!("bigrams".parse::<Feature>().is_err());
    assert!("".parse::<Feature>().is_err());
}

// ============================================================
// compare_texts — scenario scores
// ============================================================

#[test]
fn conjunction_comparison_scores_one() {
    let comparison = compare_texts(
        "I like cats and dogs.",
        "I like cats and dogs and birds.",
        Feature::Conjunctions,
    )
    .unwrap();
    assert_eq!(comparison.score, 1.0);
    assert_eq!(comparison.profile1.get("and"), Some(1.0));
    assert_eq!(comparison.profile2.get("and"), Some(2.0));
}

#[test]
fn punctuation_comparison_scores_root_three() {
    let comparison = compare_texts(
        "It's a test-case, maybe.",
        "Its a testcase maybe",
        Feature::Punctuation,
    )
    .unwrap();
    assert_eq!(comparison.score, 1.7321);
}

#[test]
fn composite_of_identical_texts_scores_zero() {
    let text = "Cats and dogs; also birds. Fish, too!\n\nA second paragraph.";
    let comparison = compare_texts(text, text, Feature::Composite).unwrap();
    assert_eq!(comparison.score, 0.0);
    assert_eq!(comparison.profile1, comparison.profile2);
}

#[test]
fn unigram_profiles_share_keys_end_to_end() {
    let comparison = compare_texts(
        "completely different words here",
        "nothing in common at all",
        Feature::Unigrams,
    )
    .unwrap();
    assert!(comparison.profile1.same_keys(&comparison.profile2));
    assert!(comparison.score > 0.0);
}

#[test]
fn degenerate_empty_documents_compare_without_panicking() {
    for feature in Feature::ALL {
        let comparison = compare_texts("", "", feature).unwrap();
        assert_eq!(comparison.score, 0.0, "feature {feature} on empty input");
    }
}

// ============================================================
// run — the lenient entry contract
// ============================================================

#[test]
fn missing_document_collapses_to_none() {
    let source = MemorySource::new(&[("a.txt", "some text.")]);
    assert!(run(&source, Path::new("a.txt"), Path::new("missing.txt"), "conjunctions").is_none());
    assert!(run(&source, Path::new("missing.txt"), Path::new("a.txt"), "conjunctions").is_none());
}

#[test]
fn missing_file_on_disk_collapses_to_none() {
    let source = FsDocumentSource;
    let ghost = std::env::temp_dir().join("graphite-no-such-document.txt");
    assert!(run(&source, &ghost, &ghost, "punctuation").is_none());
}

#[test]
fn unknown_feature_collapses_to_none() {
    let source = MemorySource::new(&[("a.txt", "text."), ("b.txt", "more text.")]);
    assert!(run(&source, Path::new("a.txt"), Path::new("b.txt"), "bigrams").is_none());
}

#[test]
fn mixed_case_feature_name_is_accepted() {
    let source = MemorySource::new(&[
        ("a.txt", "I like cats and dogs."),
        ("b.txt", "I like cats and dogs and birds."),
    ]);
    let comparison = run(&source, Path::new("a.txt"), Path::new("b.txt"), "Conjunctions")
        .expect("mixed-case feature name should dispatch");
    assert_eq!(comparison.feature, Feature::Conjunctions);
    assert_eq!(comparison.score, 1.0);
}

// ============================================================
// compare_paths — filesystem round trip
// ============================================================

#[test]
fn compare_paths_reads_real_files() {
    let dir = std::env::temp_dir();
    let path_a = dir.join(format!("graphite-test-a-{}.txt", std::process::id()));
    let path_b = dir.join(format!("graphite-test-b-{}.txt", std::process::id()));
    std::fs::write(&path_a, "It's a test-case, maybe.").unwrap();
    std::fs::write(&path_b, "Its a testcase maybe").unwrap();

    let comparison =
        compare_paths(&FsDocumentSource, &path_a, &path_b, "punctuation").unwrap();
    assert_eq!(comparison.score, 1.7321);

    let _ = std::fs::remove_file(&path_a);
    let _ = std::fs::remove_file(&path_b);
}

// ============================================================
// profile_text + serde round trips
// ============================================================

#[test]
fn single_document_profile_rejects_unigrams() {
    assert!(profile_text("some text", Feature::Unigrams).is_err());
    assert!(profile_text("some text", Feature::Conjunctions).is_ok());
}

#[test]
fn comparison_round_trips_through_json() {
    let comparison = compare_texts(
        "Cats, dogs; and it's fine.",
        "Birds and fish--no cats.",
        Feature::Composite,
    )
    .unwrap();

    let json = serde_json::to_string(&comparison).unwrap();
    let restored: Comparison = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.feature, comparison.feature);
    assert_eq!(restored.score, comparison.score);
    assert_eq!(restored.profile1, comparison.profile1);
    assert_eq!(restored.profile2, comparison.profile2);
}
