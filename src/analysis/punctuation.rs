// Context-sensitive punctuation counting.
//
// Comma and semicolon count wherever they appear. Apostrophe and hyphen only
// count when flanked by alphanumeric characters on both sides, so
// possessives and intra-word hyphens register while quote marks and dashes
// at word boundaries do not. A mark at the very start or end of the text has
// a missing neighbor and never counts.

/// Counts for the four tracked marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkCounts {
    pub comma: u32,
    pub semicolon: u32,
    pub apostrophe: u32,
    pub hyphen: u32,
}

/// Scan raw text and count the tracked marks.
///
/// Em-dash runs and newlines are normalized to spaces first, so "--" never
/// registers as a pair of intra-word hyphens.
pub fn scan(text: &str) -> MarkCounts {
    let normalized = text.replace("--", " ").replace('\n', " ");
    let chars: Vec<char> = normalized.chars().collect();

    let mut counts = MarkCounts::default();

    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            ',' => counts.comma += 1,
            ';' => counts.semicolon += 1,
            '\'' | '-' => {
                if flanked_by_alphanumerics(&chars, i) {
                    if ch == '\'' {
                        counts.apostrophe += 1;
                    } else {
                        counts.hyphen += 1;
                    }
                }
            }
            _ => {}
        }
    }

    counts
}

/// True when the characters immediately before and after `i` both exist and
/// are ASCII letters or digits.
fn flanked_by_alphanumerics(chars: &[char], i: usize) -> bool {
    let before = i.checked_sub(1).and_then(|j| chars.get(j));
    let after = chars.get(i + 1);
    matches!(
        (before, after),
        (Some(b), Some(a)) if b.is_ascii_alphanumeric() && a.is_ascii_alphanumeric()
    )
}
