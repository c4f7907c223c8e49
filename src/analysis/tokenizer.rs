// Word tokenization for the frequency profiles.
//
// The rules are deliberately blunt: em-dash runs and newlines become spaces,
// a fixed punctuation set is deleted outright, and whatever survives is
// lowercased. Deleting the apostrophe (rather than splitting on it) means
// contractions collapse — "don't" tokenizes as "dont". The lone hyphen is
// not in the set, so "test-case" stays a single token.

/// Punctuation characters removed before splitting. The lone hyphen is
/// intentionally absent; "--" is handled as a word separator beforehand.
const STRIPPED: &str = "!@#$%^&*()_=+`~[]{}|\"';:<,>.?/\\";

/// Split raw text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let spaced = text.replace("--", " ").replace('\n', " ");
    let cleaned: String = spaced.chars().filter(|c| !STRIPPED.contains(*c)).collect();

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}
