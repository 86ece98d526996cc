//! Creature size categories

use serde::{Deserialize, Serialize};

/// Size category for actors and races.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl SizeCategory {
    /// The string choices accepted by actor and race schemas.
    pub const CHOICES: &'static [&'static str] =
        &["tiny", "small", "medium", "large", "huge", "gargantuan"];
}
