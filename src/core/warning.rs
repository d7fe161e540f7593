//! Warning severity ordering.
//!
//! Levels are stored as free text. `alerte` always comes first, then
//! `prudence`, then every other level. Within a tier, warnings keep their
//! insertion order.

use crate::entities::warning;
use serde::{Serialize, Serializer};
use std::fmt;

/// Severity tier of a warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningLevel {
    /// Most severe: contraindication
    Alerte,
    /// Use with care
    Prudence,
    /// Any other (informational) level, kept verbatim
    Other(String),
}

impl WarningLevel {
    /// Parses a stored level; matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "alerte" => Self::Alerte,
            "prudence" => Self::Prudence,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Sort key, lower is more severe.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Alerte => 0,
            Self::Prudence => 1,
            Self::Other(_) => 2,
        }
    }

    /// Level as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alerte => "alerte",
            Self::Prudence => "prudence",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WarningLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A warning as returned with a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixWarning {
    /// Severity tier
    pub level: WarningLevel,
    /// Text shown to the visitor
    pub message: String,
}

impl From<warning::Model> for MixWarning {
    fn from(model: warning::Model) -> Self {
        Self {
            level: WarningLevel::parse(&model.level),
            message: model.message,
        }
    }
}

/// Orders warnings most severe first. The sort is stable, so callers that
/// pass warnings in insertion order keep that order inside each tier.
pub fn sort_by_severity(warnings: &mut [MixWarning]) {
    warnings.sort_by_key(|w| w.level.rank());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(level: &str, message: &str) -> MixWarning {
        MixWarning {
            level: WarningLevel::parse(level),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(WarningLevel::parse("alerte"), WarningLevel::Alerte);
        assert_eq!(WarningLevel::parse(" Prudence "), WarningLevel::Prudence);
        assert_eq!(
            WarningLevel::parse("info"),
            WarningLevel::Other("info".to_string())
        );
    }

    #[test]
    fn test_sort_puts_alerte_before_prudence() {
        let mut warnings = vec![warning("prudence", "mild"), warning("alerte", "severe")];
        sort_by_severity(&mut warnings);
        assert_eq!(warnings[0], warning("alerte", "severe"));
        assert_eq!(warnings[1], warning("prudence", "mild"));
    }

    #[test]
    fn test_sort_is_stable_within_tier() {
        let mut warnings = vec![
            warning("info", "first info"),
            warning("prudence", "first prudence"),
            warning("note", "second info"),
            warning("alerte", "only alerte"),
            warning("prudence", "second prudence"),
        ];
        sort_by_severity(&mut warnings);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "only alerte",
                "first prudence",
                "second prudence",
                "first info",
                "second info"
            ]
        );
    }
}
