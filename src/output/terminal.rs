// Colored terminal output for comparisons and single-document profiles.
//
// All terminal-specific formatting lives here: colors, tables, the feature
// listing. The main.rs subcommand handlers delegate to these functions.

use colored::Colorize;

use crate::compare::{Comparison, Feature};
use crate::profile::Profile;

/// Display a full comparison: side-by-side profile table plus the score.
pub fn display_comparison(comparison: &Comparison, path1: &str, path2: &str) {
    println!(
        "\n{}",
        format!("=== {} comparison ===", comparison.feature).bold()
    );
    println!("  Document 1: {path1}");
    println!("  Document 2: {path2}");
    println!();

    // Header
    println!(
        "  {:<26} {:>10} {:>10} {:>10}",
        "Key".dimmed(),
        "Doc 1".dimmed(),
        "Doc 2".dimmed(),
        "Delta".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for (key, value1) in comparison.profile1.iter() {
        let value2 = comparison.profile2.get(key).unwrap_or(0.0);
        let delta = value1 - value2;

        let delta_str = if delta == 0.0 {
            format!("{delta:>10.4}").dimmed()
        } else {
            format!("{delta:>10.4}").yellow()
        };

        println!(
            "  {:<26} {:>10} {:>10} {}",
            label_for(key),
            format_value(value1),
            format_value(value2),
            delta_str,
        );
    }

    println!();
    println!(
        "  {} {}",
        "Distance score:".bold(),
        format!("{:.4}", comparison.score).bold()
    );
    println!(
        "  {}",
        "Lower scores mean more similar writing styles.".dimmed()
    );
}

/// Display a single document's profile.
pub fn display_profile(profile: &Profile, feature: Feature, path: &str) {
    println!("\n{}", format!("=== {feature} profile ===").bold());
    println!("  Document: {path}");
    println!();

    for (key, value) in profile.iter() {
        println!("  {:<26} {}", label_for(key), format_value(value));
    }
    println!();
}

/// List the recognized features with one-line descriptions.
pub fn display_features() {
    println!("\n{}", "=== Features ===".bold());
    println!();
    for feature in Feature::ALL {
        let pairwise = if feature.single_document() {
            "".normal()
        } else {
            "  (pairwise only)".dimmed()
        };
        println!(
            "  {:<14} {}{}",
            feature.name().bold(),
            feature.describe(),
            pairwise,
        );
    }
    println!();
}

/// Spell out the single-character punctuation keys; pass words and metric
/// names through unchanged.
fn label_for(key: &str) -> String {
    match key {
        "," => "comma (,)".to_string(),
        ";" => "semicolon (;)".to_string(),
        "'" => "apostrophe (')".to_string(),
        "-" => "hyphen (-)".to_string(),
        other => other.to_string(),
    }
}

/// Counts print as whole numbers; the derived metrics keep their decimals.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:>10.0}")
    } else {
        format!("{value:>10.4}")
    }
}
