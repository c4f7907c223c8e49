// Feature dispatch — ties the profile builders and the distance scorer
// together for the four supported features.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::profile::{builders, Profile};
use crate::scoring;
use crate::source::DocumentSource;

/// The stylometric features a comparison can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// Frequencies of a fixed 22-word conjunction vocabulary
    Conjunctions,
    /// Word frequencies over the union of both documents' vocabularies
    Unigrams,
    /// Counts of four punctuation marks with context-sensitive rules
    Punctuation,
    /// Conjunctions + punctuation + sentence-shape metrics in one profile
    Composite,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Conjunctions,
        Feature::Unigrams,
        Feature::Punctuation,
        Feature::Composite,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Conjunctions => "conjunctions",
            Feature::Unigrams => "unigrams",
            Feature::Punctuation => "punctuation",
            Feature::Composite => "composite",
        }
    }

    /// One-line description for `graphite features`.
    pub fn describe(self) -> &'static str {
        match self {
            Feature::Conjunctions => "frequencies of a fixed 22-word conjunction vocabulary",
            Feature::Unigrams => "word frequencies over both documents' combined vocabulary",
            Feature::Punctuation => "comma, semicolon, and intra-word apostrophe/hyphen counts",
            Feature::Composite => "conjunctions + punctuation + sentence-shape metrics",
        }
    }

    /// Whether a profile can be built from a single document. Unigrams is
    /// pairwise: its key set depends on both documents.
    pub fn single_document(self) -> bool {
        !matches!(self, Feature::Unigrams)
    }
}

impl FromStr for Feature {
    type Err = anyhow::Error;

    /// Case-insensitive: "Conjunctions" and "conjunctions" name the same
    /// feature.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "conjunctions" => Ok(Feature::Conjunctions),
            "unigrams" => Ok(Feature::Unigrams),
            "punctuation" => Ok(Feature::Punctuation),
            "composite" => Ok(Feature::Composite),
            other => bail!(
                "unknown feature '{other}' — expected one of: conjunctions, unigrams, punctuation, composite"
            ),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of comparing two documents under one feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub feature: Feature,
    /// Euclidean distance between the two profiles; lower = more similar
    pub score: f64,
    pub profile1: Profile,
    pub profile2: Profile,
}

/// Compare two already-loaded document texts under `feature`.
pub fn compare_texts(text1: &str, text2: &str, feature: Feature) -> Result<Comparison> {
    let (profile1, profile2) = match feature {
        Feature::Conjunctions => (builders::conjunctions(text1), builders::conjunctions(text2)),
        Feature::Unigrams => builders::unigrams(text1, text2),
        Feature::Punctuation => (builders::punctuation(text1), builders::punctuation(text2)),
        Feature::Composite => (composite_profile(text1), composite_profile(text2)),
    };

    let score = scoring::euclidean(&profile1, &profile2)?;
    debug!(%feature, score, keys = profile1.len(), "computed comparison");

    Ok(Comparison {
        feature,
        score,
        profile1,
        profile2,
    })
}

/// Build one document's profile for the features that support it.
pub fn profile_text(text: &str, feature: Feature) -> Result<Profile> {
    match feature {
        Feature::Conjunctions => Ok(builders::conjunctions(text)),
        Feature::Punctuation => Ok(builders::punctuation(text)),
        Feature::Composite => Ok(composite_profile(text)),
        Feature::Unigrams => {
            bail!("the unigrams feature is pairwise — its key set depends on both documents")
        }
    }
}

/// Each document gets freshly built conjunction and punctuation profiles so
/// the two composites share nothing.
fn composite_profile(text: &str) -> Profile {
    builders::composite(
        text,
        &builders::conjunctions(text),
        &builders::punctuation(text),
    )
}

/// Load both documents through `source` and compare them. The feature name
/// is parsed case-insensitively; an unreadable document or unknown name is
/// an error.
pub fn compare_paths(
    source: &dyn DocumentSource,
    path1: &Path,
    path2: &Path,
    feature_name: &str,
) -> Result<Comparison> {
    let text1 = source.load(path1)?;
    let text2 = source.load(path2)?;
    let feature: Feature = feature_name.parse()?;
    compare_texts(&text1, &text2, feature)
}

/// Lenient entry point: any failure (missing document, unknown feature)
/// is logged and collapses to `None` — score and both profiles are absent
/// together. Callers that want the cause should use `compare_paths`.
pub fn run(
    source: &dyn DocumentSource,
    path1: &Path,
    path2: &Path,
    feature_name: &str,
) -> Option<Comparison> {
    match compare_paths(source, path1, path2, feature_name) {
        Ok(comparison) => Some(comparison),
        Err(e) => {
            warn!(error = %e, "comparison failed");
            None
        }
    }
}
