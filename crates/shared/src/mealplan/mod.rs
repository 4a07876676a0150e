use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

pub const DEFAULT_SERVINGS: u32 = 1;

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

/// One recipe scheduled into a (day, meal type) slot of a meal plan.
#[derive(Clone, Debug, PartialEq)]
pub struct MealPlanEntry {
    recipe_id: String,
    day: u8,
    meal_type: MealType,
    servings: u32,
}

impl MealPlanEntry {
    /// `day` counts from Monday (0) to Sunday (6).
    pub fn new(
        recipe_id: impl Into<String>,
        day: u8,
        meal_type: MealType,
        servings: u32,
    ) -> crate::Result<Self> {
        if day > 6 {
            crate::invalid!("day", "{day} is outside 0..=6");
        }

        if servings == 0 {
            crate::invalid!("servings", "must be at least 1");
        }

        Ok(Self {
            recipe_id: recipe_id.into(),
            day,
            meal_type,
            servings,
        })
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_entry_validation() {
        assert!(MealPlanEntry::new("r1", 7, MealType::Lunch, 1).is_err());
        assert!(MealPlanEntry::new("r1", 0, MealType::Lunch, 0).is_err());

        let entry = MealPlanEntry::new("r1", 6, MealType::Snack, DEFAULT_SERVINGS).unwrap();
        assert_eq!(entry.day(), 6);
        assert_eq!(entry.servings(), 1);
    }

    #[test]
    fn test_meal_type_from_str() {
        assert_eq!(MealType::from_str("breakfast").unwrap(), MealType::Breakfast);
        assert_eq!(MealType::from_str("Dinner").unwrap(), MealType::Dinner);
        assert_eq!(MealType::Snack.as_ref(), "snack");
    }
}
