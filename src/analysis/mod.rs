// Text analysis primitives — tokenization, punctuation scanning, and
// sentence/paragraph shape metrics. Everything here is a pure function
// over the raw document text; no state survives between calls.

pub mod metrics;
pub mod punctuation;
pub mod tokenizer;
