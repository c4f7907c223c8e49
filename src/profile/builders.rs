// The four profile builders. Each one guarantees its profile's key set
// matches its partner's: conjunctions and punctuation use fixed
// vocabularies, unigrams seeds both sides over the shared word union, and
// composite merges two fixed vocabularies plus two named metrics.

use crate::analysis::{metrics, tokenizer};

use super::Profile;

/// The fixed conjunction vocabulary. "thought" is the literal entry carried
/// from the reference word list, not a typo for "though".
pub const CONJUNCTION_WORDS: [&str; 22] = [
    "also", "although", "and", "as", "because", "before", "but", "for", "if", "nor", "of", "or",
    "since", "that", "thought", "until", "when", "whenever", "whereas", "which", "while", "yet",
];

/// Profile key for the average-words-per-sentence metric.
pub const WORDS_PER_SENTENCE_KEY: &str = "words_per_sentence";
/// Profile key for the average-sentences-per-paragraph metric.
pub const SENTENCE_PER_PARAGRAPH_KEY: &str = "sentence_per_paragraph";

/// Count the fixed conjunction words in a document. Tokens outside the
/// vocabulary never become keys.
pub fn conjunctions(text: &str) -> Profile {
    let mut profile = Profile::zeroed(CONJUNCTION_WORDS);
    for token in tokenizer::tokenize(text) {
        profile.bump_existing(&token);
    }
    profile
}

/// Build word-frequency profiles for both documents over a shared key set:
/// the union of every distinct word in either document, zero-filled on the
/// side a word never appears in. The distance scorer relies on this parity.
pub fn unigrams(text_a: &str, text_b: &str) -> (Profile, Profile) {
    let words_a = tokenizer::tokenize(text_a);
    let words_b = tokenizer::tokenize(text_b);

    let mut profile_a = Profile::zeroed(words_a.iter().chain(words_b.iter()).cloned());
    let mut profile_b = profile_a.clone();

    for word in &words_a {
        profile_a.bump_existing(word);
    }
    for word in &words_b {
        profile_b.bump_existing(word);
    }

    (profile_a, profile_b)
}

/// Count the four tracked punctuation marks.
pub fn punctuation(text: &str) -> Profile {
    let counts = crate::analysis::punctuation::scan(text);

    let mut profile = Profile::new();
    profile.set(",", counts.comma as f64);
    profile.set(";", counts.semicolon as f64);
    profile.set("'", counts.apostrophe as f64);
    profile.set("-", counts.hyphen as f64);
    profile
}

/// Merge a document's conjunction and punctuation profiles with its two
/// sentence-shape metrics into a fresh profile.
///
/// The inputs are read, never mutated or returned, so the composites of two
/// documents can never alias each other. Conjunction and punctuation keys
/// are disjoint (words vs single marks), so the merge never collides.
pub fn composite(text: &str, conjunctions: &Profile, punctuation: &Profile) -> Profile {
    let mut profile = Profile::new();
    for (key, value) in conjunctions.iter() {
        profile.set(key, value);
    }
    for (key, value) in punctuation.iter() {
        profile.set(key, value);
    }
    profile.set(WORDS_PER_SENTENCE_KEY, metrics::words_per_sentence(text));
    profile.set(
        SENTENCE_PER_PARAGRAPH_KEY,
        metrics::sentences_per_paragraph(text),
    );
    profile
}
