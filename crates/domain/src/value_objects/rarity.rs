//! Rarity tiers for item entities
//!
//! An ordinal quality tier with a fixed display color per tier. Items default
//! to common; the color lookup likewise falls back to the common color.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six rarity tiers, lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
}

impl Rarity {
    /// Every tier, lowest to highest.
    pub const ALL: [Rarity; 6] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Artifact,
    ];

    /// The string choices accepted by item schemas.
    pub const CHOICES: &'static [&'static str] = &[
        "common",
        "uncommon",
        "rare",
        "epic",
        "legendary",
        "artifact",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Artifact => "artifact",
        }
    }

    /// Display color for the tier, as a CSS hex value.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Common => "#ffffff",
            Self::Uncommon => "#1eff00",
            Self::Rare => "#0070dd",
            Self::Epic => "#a335ee",
            Self::Legendary => "#ff8000",
            Self::Artifact => "#e6cc80",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_common() {
        assert_eq!(Rarity::default(), Rarity::Common);
        assert_eq!(Rarity::default().color(), "#ffffff");
    }

    #[test]
    fn every_tier_has_a_distinct_color() {
        let mut colors: Vec<&str> = Rarity::ALL.iter().map(Rarity::color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Legendary < Rarity::Artifact);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Rarity::Epic).expect("serialize");
        assert_eq!(json, "\"epic\"");
        let parsed: Rarity = serde_json::from_str("\"artifact\"").expect("parse");
        assert_eq!(parsed, Rarity::Artifact);
        assert!(serde_json::from_str::<Rarity>("\"mythic\"").is_err());
    }
}
