// Sentence and paragraph shape metrics for the composite profile.
//
// These scan the raw text, not the tokenizer output: punctuation attached to
// a word ("test-case," say) still counts as a single word here. "!" and "?"
// are folded into "." so every sentence terminator looks the same.

use crate::scoring::round4;

/// Average number of words per sentence, rounded to 4 decimals.
///
/// Sentences are the "."-separated segments after terminator folding, with
/// trailing empty or newline-only fragments dropped. Words are the non-empty
/// space-separated chunks of each sentence after em-dash/newline
/// normalization and trimming.
///
/// Text with no sentences at all (empty input) yields 0.0.
pub fn words_per_sentence(text: &str) -> f64 {
    let unified = text.replace('!', ".").replace('?', ".");
    let mut sentences: Vec<&str> = unified.split('.').collect();

    // The split leaves an artifact after the final terminator — usually ""
    // or a bare newline. Those are not sentences.
    while matches!(sentences.last(), Some(s) if s.chars().all(|c| c == '\n')) {
        sentences.pop();
    }

    if sentences.is_empty() {
        return 0.0;
    }

    let total_words: usize = sentences
        .iter()
        .map(|sentence| {
            sentence
                .replace("--", " ")
                .replace('\n', " ")
                .trim_matches(' ')
                .split(' ')
                .filter(|word| !word.is_empty())
                .count()
        })
        .sum();

    round4(total_words as f64 / sentences.len() as f64)
}

/// Average number of sentences per paragraph, rounded to 4 decimals.
///
/// Paragraphs are separated by a blank line; even text without one is a
/// single paragraph, so the denominator is never zero. A paragraph's
/// sentence count is the number of terminators in it — trailing text after
/// the last "." is not counted as a sentence.
pub fn sentences_per_paragraph(text: &str) -> f64 {
    let paragraphs: Vec<&str> = text.split("\n\n").collect();

    let total_sentences: usize = paragraphs
        .iter()
        .map(|paragraph| {
            let unified = paragraph.replace('!', ".").replace('?', ".");
            unified.split('.').count() - 1
        })
        .sum();

    round4(total_sentences as f64 / paragraphs.len() as f64)
}
