// Distance scoring — one Euclidean metric shared by every feature.

use anyhow::{bail, Result};

use crate::profile::Profile;

/// Round to 4 decimal places, the precision of every reported score and
/// metric.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Euclidean distance between two profiles with identical key sets, rounded
/// to 4 decimals. Symmetric, and 0.0 exactly when the profiles agree on
/// every key.
///
/// Key-set parity is the caller's contract — the builders construct it. A
/// mismatch is reported as an error rather than treating missing keys as
/// zero, since it means the profiles came from different features.
pub fn euclidean(a: &Profile, b: &Profile) -> Result<f64> {
    if !a.same_keys(b) {
        bail!(
            "profile key sets differ ({} vs {} keys) — both profiles must come from the same feature",
            a.len(),
            b.len()
        );
    }

    let sum: f64 = a
        .iter()
        .map(|(key, value_a)| {
            let value_b = b.get(key).unwrap_or(0.0);
            (value_a - value_b) * (value_a - value_b)
        })
        .sum();

    Ok(round4(sum.sqrt()))
}
