//! Resource pools and progress meters
//!
//! Three shapes cover every current/maximum pair in the system:
//! `Pool` for xp, skill level, and cooldown meters; `ResourcePool` for
//! hp/stamina/mana (hp additionally carries temporary points); `Capacity`
//! for the fractional carrying-weight budget.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::schema::{check_min, check_min_f64, SchemaField};

/// A simple value/maximum meter (xp, cooldown, skill level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pool {
    pub value: i32,
    pub max: i32,
}

impl Pool {
    pub const fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }

    /// Check that both sides are non-negative.
    pub(crate) fn validate_non_negative(
        &self,
        path: &str,
    ) -> Result<(), SchemaValidationError> {
        check_min(&format!("{path}.value"), self.value, 0)?;
        check_min(&format!("{path}.max"), self.max, 0)?;
        Ok(())
    }
}

/// A spendable resource pool (hit points, stamina, mana).
///
/// `temp` is only present on pools that support temporary points (hp); it is
/// absent, not zero, everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub max: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<i32>,
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self {
            value: 0,
            max: 0,
            temp: None,
        }
    }
}

impl ResourcePool {
    pub const fn new(value: i32, max: i32) -> Self {
        Self {
            value,
            max,
            temp: None,
        }
    }

    pub const fn with_temp(value: i32, max: i32, temp: i32) -> Self {
        Self {
            value,
            max,
            temp: Some(temp),
        }
    }

    /// The spend ceiling: maximum plus any temporary points.
    pub fn ceiling(&self) -> i32 {
        self.max + self.temp.unwrap_or(0)
    }

    /// Clamp the current value into `[0, max + temp]`.
    pub fn clamp_value(&mut self) {
        self.value = self.value.clamp(0, self.ceiling().max(0));
    }

    pub(crate) fn validate_non_negative(
        &self,
        path: &str,
    ) -> Result<(), SchemaValidationError> {
        check_min(&format!("{path}.value"), self.value, 0)?;
        check_min(&format!("{path}.max"), self.max, 0)?;
        if let Some(temp) = self.temp {
            check_min(&format!("{path}.temp"), temp, 0)?;
        }
        Ok(())
    }
}

/// Fractional weight budget (carried load vs. carrying capacity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capacity {
    pub value: f64,
    pub max: f64,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            value: 0.0,
            max: 150.0,
        }
    }
}

impl Capacity {
    pub(crate) fn validate_non_negative(
        &self,
        path: &str,
    ) -> Result<(), SchemaValidationError> {
        check_min_f64(&format!("{path}.value"), self.value, 0.0)?;
        check_min_f64(&format!("{path}.max"), self.max, 0.0)?;
        Ok(())
    }
}

/// Schema descriptor for a `{ value, max }` meter.
pub(crate) fn pool_schema(name: &'static str, value: i64, max: i64) -> SchemaField {
    SchemaField::object(
        name,
        vec![
            SchemaField::integer("value").min(0).default(value),
            SchemaField::integer("max").min(0).default(max),
        ],
    )
}

/// Schema descriptor for a resource pool, optionally with temporary points.
pub(crate) fn resource_schema(
    name: &'static str,
    value: i64,
    max: i64,
    with_temp: bool,
) -> SchemaField {
    let mut fields = vec![
        SchemaField::integer("value").min(0).default(value),
        SchemaField::integer("max").min(0).default(max),
    ];
    if with_temp {
        fields.push(SchemaField::integer("temp").min(0).default(0));
    }
    SchemaField::object(name, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_temp_ceiling() {
        let mut hp = ResourcePool::with_temp(25, 20, 3);
        hp.clamp_value();
        assert_eq!(hp.value, 23);

        let mut hp = ResourcePool::with_temp(-4, 20, 3);
        hp.clamp_value();
        assert_eq!(hp.value, 0);
    }

    #[test]
    fn clamp_without_temp_uses_max() {
        let mut stamina = ResourcePool::new(15, 10);
        stamina.clamp_value();
        assert_eq!(stamina.value, 10);

        // Already in range: untouched.
        let mut mana = ResourcePool::new(3, 10);
        mana.clamp_value();
        assert_eq!(mana.value, 3);
    }

    #[test]
    fn validate_rejects_negative_sides() {
        let pool = Pool::new(-1, 10);
        assert!(pool.validate_non_negative("xp").is_err());

        let hp = ResourcePool::with_temp(1, 1, -1);
        let err = hp.validate_non_negative("resources.hp").unwrap_err();
        assert_eq!(err.path(), Some("resources.hp.temp"));
    }

    #[test]
    fn temp_is_absent_unless_granted() {
        let mana = ResourcePool::new(0, 0);
        let json = serde_json::to_value(mana).expect("serialize");
        assert!(json.get("temp").is_none());
    }
}
