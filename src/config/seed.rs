//! Seed dataset loading.
//!
//! The store is populated once from a seed file. Two formats are accepted,
//! chosen by file extension:
//! - `.toml`: the relational seed (goals, mixes with ingredients, goal links
//!   carrying relevance, and warnings)
//! - `.json`: the legacy list of mixes (`nom`, `objectifs`, ...), converted by
//!   [`crate::core::legacy::into_seed`]
//!
//! Every record is checked here, at the load boundary. Nothing downstream
//! re-validates the shape of the data.

use crate::core::legacy;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Whole seed file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    /// Health goals to create
    #[serde(default)]
    pub goals: Vec<GoalSeed>,
    /// Mixes to create, with their associations
    #[serde(default)]
    pub mixes: Vec<MixSeed>,
}

/// A single health goal
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GoalSeed {
    /// Stable goal code
    pub code: String,
    /// Display name
    pub name: String,
}

/// A single mix and everything attached to it
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MixSeed {
    /// Display name
    pub name: String,
    /// Preparation category (e.g., "infusion")
    pub prep_type: String,
    /// Description / preparation steps
    #[serde(default)]
    pub description: String,
    /// Public handle used in shareable links
    pub share_slug: String,
    /// Ingredient names; shared ingredients are deduplicated by name
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Goals this mix is recommended for
    #[serde(default)]
    pub goals: Vec<GoalLinkSeed>,
    /// Precautions, in insertion order
    #[serde(default)]
    pub warnings: Vec<WarningSeed>,
}

/// Link from a mix to a goal
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GoalLinkSeed {
    /// Code of an existing goal
    pub code: String,
    /// Ranking score, higher sorts first
    pub relevance: i32,
}

/// A precaution attached to a mix
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WarningSeed {
    /// `"alerte"`, `"prudence"`, or any informational level
    pub level: String,
    /// Text shown to the visitor
    pub message: String,
}

impl SeedData {
    /// Checks the structural invariants the store relies on.
    ///
    /// # Errors
    /// Returns [`Error::MalformedDataset`] if:
    /// - a goal code, goal name, mix name, or share slug is blank
    /// - a goal code or share slug appears twice
    /// - a mix links to an unknown goal code, or twice to the same goal
    /// - a relevance is negative
    pub fn validate(&self) -> Result<()> {
        let mut codes = HashSet::new();
        for goal in &self.goals {
            if goal.code.trim().is_empty() || goal.name.trim().is_empty() {
                return Err(Error::malformed("goal with a blank code or name"));
            }
            if !codes.insert(goal.code.as_str()) {
                return Err(Error::malformed(format!(
                    "duplicate goal code {:?}",
                    goal.code
                )));
            }
        }

        let mut slugs = HashSet::new();
        for mix in &self.mixes {
            if mix.name.trim().is_empty() {
                return Err(Error::malformed("mix with a blank name"));
            }
            if mix.share_slug.trim().is_empty() {
                return Err(Error::malformed(format!(
                    "mix {:?} has a blank share slug",
                    mix.name
                )));
            }
            if !slugs.insert(mix.share_slug.as_str()) {
                return Err(Error::malformed(format!(
                    "duplicate share slug {:?}",
                    mix.share_slug
                )));
            }

            let mut linked = HashSet::new();
            for link in &mix.goals {
                if !codes.contains(link.code.as_str()) {
                    return Err(Error::malformed(format!(
                        "mix {:?} references unknown goal {:?}",
                        mix.name, link.code
                    )));
                }
                if !linked.insert(link.code.as_str()) {
                    return Err(Error::malformed(format!(
                        "mix {:?} links goal {:?} twice",
                        mix.name, link.code
                    )));
                }
                if link.relevance < 0 {
                    return Err(Error::malformed(format!(
                        "mix {:?} has negative relevance for {:?}",
                        mix.name, link.code
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Parses a relational seed from TOML text and validates it.
pub fn parse_seed_toml(contents: &str) -> Result<SeedData> {
    let seed: SeedData = toml::from_str(contents)
        .map_err(|e| Error::malformed(format!("Failed to parse seed TOML: {e}")))?;
    seed.validate()?;
    Ok(seed)
}

/// Reads a dataset file, reporting an absent file as [`Error::MissingDataset`].
pub(crate) fn read_dataset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::MissingDataset {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}

/// Loads and validates the seed dataset at `path`.
///
/// # Errors
/// - [`Error::MissingDataset`] if the file does not exist
/// - [`Error::MalformedDataset`] if it cannot be parsed or fails validation
/// - [`Error::Io`] for any other read failure
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed dataset from: {:?}", path_ref);
    let contents = read_dataset(path_ref)?;

    let is_json = path_ref
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let mixes = legacy::parse_legacy_mixes(&contents)?;
        let seed = legacy::into_seed(&mixes);
        seed.validate()?;
        Ok(seed)
    } else {
        parse_seed_toml(&contents)
    }
}
