//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod damage;
mod dice;
mod rarity;
mod requirements;
mod resource;
mod size;

pub use attribute::{attribute_modifier, Attribute, AttributeBlock, AttributeName};
pub use damage::{Damage, DamageType};
pub use dice::{DiceFormula, DiceParseError};
pub use rarity::Rarity;
pub use requirements::Requirements;
pub use resource::{Capacity, Pool, ResourcePool};
pub use size::SizeCategory;

pub(crate) use attribute::attribute_block_schema;
pub(crate) use requirements::requirements_schema;
pub(crate) use resource::{pool_schema, resource_schema};
