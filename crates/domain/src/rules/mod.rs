//! Cross-entity rule functions
//!
//! Pure computations that combine two or more records: carried weight and
//! encumbrance over an actor's item collection. Rules that belong to a
//! single record (hit-point growth, race bonuses, skill predicates,
//! achievement completion) live on their entity types.

mod inventory;

pub use inventory::{is_encumbered, total_carried_weight, Carryable, InventoryIndex};
