use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Actor IDs. Characters and NPCs share one id space so that an item's
// owner back-reference can point at either kind of actor.
define_id!(ActorId);

// Item IDs (weapons, armor, equipment, consumables)
define_id!(ItemId);

// Independently-leveling skill IDs
define_id!(SkillId);

// Achievement IDs
define_id!(AchievementId);

// Definition-entity IDs (referenced by id, never owned)
define_id!(ClassId);
define_id!(RaceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_through_uuid() {
        let id = ItemId::new();
        let uuid = id.to_uuid();
        assert_eq!(ItemId::from_uuid(uuid), id);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_id_display_matches_uuid() {
        let id = ActorId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
