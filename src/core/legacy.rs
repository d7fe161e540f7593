//! Legacy flat dataset (`melanges.json`).
//!
//! Earlier revisions stored every mix in a single JSON list:
//!
//! ```json
//! [{"nom": "...", "objectifs": ["..."], "ingredients": ["..."],
//!   "preparation": ["step", "..."], "precautions": "..."}]
//! ```
//!
//! Goals are not stored separately; they are the union of every `objectifs`
//! value. There is no relevance and no severity, so filtering is plain
//! membership. [`into_seed`] maps the format onto the relational seed.

use crate::{
    config::seed::{GoalLinkSeed, GoalSeed, MixSeed, SeedData, WarningSeed, read_dataset},
    core::share::slugify,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

/// One entry of the legacy dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyMix {
    /// Mix name
    pub nom: String,
    /// Goal display names
    #[serde(default)]
    pub objectifs: Vec<String>,
    /// Ingredient names, display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps, in order
    #[serde(default)]
    pub preparation: Vec<String>,
    /// Free-text precautions
    #[serde(default)]
    pub precautions: Option<String>,
}

/// Parses the legacy JSON text.
///
/// # Errors
/// [`Error::MalformedDataset`] if the text is not a list of mix objects or an
/// entry has a blank `nom`.
pub fn parse_legacy_mixes(contents: &str) -> Result<Vec<LegacyMix>> {
    let mixes: Vec<LegacyMix> = serde_json::from_str(contents)
        .map_err(|e| Error::malformed(format!("legacy dataset is not a list of mixes: {e}")))?;

    if let Some(index) = mixes.iter().position(|m| m.nom.trim().is_empty()) {
        return Err(Error::malformed(format!("legacy entry {index} has a blank nom")));
    }
    Ok(mixes)
}

/// Reads and parses a legacy dataset file.
///
/// # Errors
/// [`Error::MissingDataset`] if the file is absent, otherwise as [`parse_legacy_mixes`].
pub fn load_legacy_mixes<P: AsRef<Path>>(path: P) -> Result<Vec<LegacyMix>> {
    let contents = read_dataset(path.as_ref())?;
    parse_legacy_mixes(&contents)
}

/// Sorted union of every non-blank objective.
#[must_use]
pub fn derive_objectives(mixes: &[LegacyMix]) -> Vec<String> {
    mixes
        .iter()
        .flat_map(|m| m.objectifs.iter())
        .filter(|o| !o.trim().is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Mixes listing `objective` exactly, in dataset order.
#[must_use]
pub fn filter_by_objective<'a>(mixes: &'a [LegacyMix], objective: &str) -> Vec<&'a LegacyMix> {
    mixes
        .iter()
        .filter(|m| m.objectifs.iter().any(|o| o == objective))
        .collect()
}

/// Converts legacy entries into a relational seed.
///
/// - goal code is the slug of the objective; objectives with the same slug merge
/// - every link gets relevance 1, so ranking falls back to name order
/// - preparation steps become a numbered description
/// - the share slug is the slug of `nom`, suffixed `-2`, `-3`, ... on collision
/// - non-blank precautions become a single `prudence` warning
#[must_use]
pub fn into_seed(mixes: &[LegacyMix]) -> SeedData {
    let mut goals: BTreeMap<String, String> = BTreeMap::new();
    for objective in derive_objectives(mixes) {
        goals.entry(slugify(&objective)).or_insert(objective);
    }

    let mut used_slugs = HashSet::new();
    let mixes = mixes
        .iter()
        .map(|legacy| {
            let mut links: Vec<GoalLinkSeed> = Vec::new();
            for objective in legacy.objectifs.iter().filter(|o| !o.trim().is_empty()) {
                let code = slugify(objective);
                if !links.iter().any(|l| l.code == code) {
                    links.push(GoalLinkSeed { code, relevance: 1 });
                }
            }

            let description = legacy
                .preparation
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step))
                .collect::<Vec<_>>()
                .join("\n");

            let warnings = legacy
                .precautions
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| WarningSeed {
                    level: "prudence".to_string(),
                    message: p.to_string(),
                })
                .into_iter()
                .collect();

            MixSeed {
                name: legacy.nom.trim().to_string(),
                prep_type: "preparation".to_string(),
                description,
                share_slug: unique_slug(&legacy.nom, &mut used_slugs),
                ingredients: legacy.ingredients.clone(),
                goals: links,
                warnings,
            }
        })
        .collect();

    SeedData {
        goals: goals
            .into_iter()
            .map(|(code, name)| GoalSeed { code, name })
            .collect(),
        mixes,
    }
}

fn unique_slug(name: &str, used: &mut HashSet<String>) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base = "melange".to_string();
    }

    let mut candidate = base.clone();
    let mut suffix = 2;
    while used.contains(&candidate) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }
    used.insert(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const DATASET: &str = r#"[
        {
            "nom": "Tisane du soir",
            "objectifs": ["Sommeil", "Stress"],
            "ingredients": ["Camomille", "Tilleul"],
            "preparation": ["Faire bouillir l'eau", "Infuser 10 minutes"],
            "precautions": "Déconseillé pendant la grossesse."
        },
        {
            "nom": "Jus vert",
            "objectifs": ["Énergie"],
            "ingredients": ["Épinard", "Pomme"]
        },
        {
            "nom": "Tisane du soir",
            "objectifs": ["Sommeil"],
            "precautions": ""
        }
    ]"#;

    #[test]
    fn test_parse_and_derive_objectives() {
        let mixes = parse_legacy_mixes(DATASET).unwrap();
        assert_eq!(mixes.len(), 3);
        assert!(mixes[1].preparation.is_empty());
        assert_eq!(
            derive_objectives(&mixes),
            vec!["Sommeil", "Stress", "Énergie"]
        );
    }

    #[test]
    fn test_filter_is_exact_membership() {
        let mixes = parse_legacy_mixes(DATASET).unwrap();
        let sommeil = filter_by_objective(&mixes, "Sommeil");
        assert_eq!(sommeil.len(), 2);
        assert!(filter_by_objective(&mixes, "sommeil").is_empty());
        assert!(filter_by_objective(&mixes, "Digestion").is_empty());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(matches!(
            parse_legacy_mixes(r#"{"nom": "not a list"}"#),
            Err(Error::MalformedDataset { .. })
        ));
        assert!(matches!(
            parse_legacy_mixes(r#"[{"objectifs": ["Sommeil"]}]"#),
            Err(Error::MalformedDataset { .. })
        ));
        assert!(matches!(
            parse_legacy_mixes(r#"[{"nom": "  "}]"#),
            Err(Error::MalformedDataset { .. })
        ));
    }

    #[test]
    fn test_into_seed() {
        let mixes = parse_legacy_mixes(DATASET).unwrap();
        let seed = into_seed(&mixes);
        seed.validate().unwrap();

        let codes: Vec<&str> = seed.goals.iter().map(|g| g.code.as_str()).collect();
        assert_eq!(codes, vec!["energie", "sommeil", "stress"]);

        let first = &seed.mixes[0];
        assert_eq!(first.share_slug, "tisane-du-soir");
        assert_eq!(
            first.description,
            "1. Faire bouillir l'eau\n2. Infuser 10 minutes"
        );
        assert_eq!(first.warnings.len(), 1);
        assert_eq!(first.warnings[0].level, "prudence");
        assert_eq!(first.goals.len(), 2);

        // Same name gets a suffixed slug, blank precautions give no warning
        assert_eq!(seed.mixes[2].share_slug, "tisane-du-soir-2");
        assert!(seed.mixes[2].warnings.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_legacy_mixes("no/such/melanges.json"),
            Err(Error::MissingDataset { .. })
        ));
    }
}
