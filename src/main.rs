use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use graphite::compare::{self, Feature};
use graphite::config::Config;
use graphite::output::terminal;
use graphite::source::{DocumentSource, FsDocumentSource};

/// Graphite: stylometric authorship verification.
///
/// Extracts a frequency profile from each of two documents under a chosen
/// stylometric feature and reports the Euclidean distance between the
/// profiles — lower means more stylistically similar.
#[derive(Parser)]
#[command(name = "graphite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and print their profiles and distance score
    Compare {
        /// First document
        file1: PathBuf,

        /// Second document
        file2: PathBuf,

        /// Feature to compare on: conjunctions, unigrams, punctuation,
        /// composite (default: GRAPHITE_FEATURE or composite)
        #[arg(long)]
        feature: Option<String>,

        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single document's profile (not available for unigrams)
    Profile {
        /// The document to profile
        file: PathBuf,

        /// Feature to profile: conjunctions, punctuation, composite
        #[arg(long)]
        feature: Option<String>,

        /// Emit the profile as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the recognized features
    Features,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graphite=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let source = FsDocumentSource;

    match cli.command {
        Commands::Compare {
            file1,
            file2,
            feature,
            json,
        } => {
            let feature_name =
                feature.unwrap_or_else(|| config.default_feature.name().to_string());
            let comparison = compare::compare_paths(&source, &file1, &file2, &feature_name)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(
                    &comparison,
                    &file1.display().to_string(),
                    &file2.display().to_string(),
                );
            }
        }

        Commands::Profile {
            file,
            feature,
            json,
        } => {
            let feature = match feature {
                Some(name) => name.parse::<Feature>()?,
                None => config.default_feature,
            };
            let text = source.load(&file)?;
            let profile = compare::profile_text(&text, feature)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                terminal::display_profile(&profile, feature, &file.display().to_string());
            }
        }

        Commands::Features => {
            terminal::display_features();
        }
    }

    Ok(())
}
