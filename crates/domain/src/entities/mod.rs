//! Domain entities - the ten record types of the ruleset

mod achievement;
mod armor;
mod character;
mod class;
mod consumable;
mod equipment;
mod npc;
mod race;
mod skill;
mod weapon;

pub use achievement::{Achievement, AchievementCategory, AchievementRewards};
pub use armor::{Armor, ArmorBlock, ArmorKind};
pub use character::{
    ActorResources, ArmorStat, Character, CharacterDetails, CombatStats, CrawlerBlock, Initiative,
    PhysicalTraits,
};
pub use class::{Class, HitDie};
pub use consumable::{Consumable, ConsumableKind, Uses};
pub use equipment::{EquipSlot, Equipment, EquipmentBonuses};
pub use npc::{Npc, NpcCombatStats, NpcDetails, NpcTraits};
pub use race::{Race, RaceBonuses};
pub use skill::{Skill, SkillCost, SkillKind, SkillRequirements};
pub use weapon::{Weapon, WeaponRange};

use crate::schema::{EntityModel, EntitySchema};

/// Resolve an entity type tag to its schema descriptor.
///
/// The tag set mirrors the host's model registry: "character" and "npc" for
/// actors, the rest for item-style records. Unknown tags resolve to `None`.
pub fn schema_for(kind: &str) -> Option<EntitySchema> {
    match kind {
        Character::KIND => Some(Character::schema()),
        Npc::KIND => Some(Npc::schema()),
        Weapon::KIND => Some(Weapon::schema()),
        Armor::KIND => Some(Armor::schema()),
        Equipment::KIND => Some(Equipment::schema()),
        Consumable::KIND => Some(Consumable::schema()),
        Skill::KIND => Some(Skill::schema()),
        Achievement::KIND => Some(Achievement::schema()),
        Class::KIND => Some(Class::schema()),
        Race::KIND => Some(Race::schema()),
        _ => None,
    }
}
