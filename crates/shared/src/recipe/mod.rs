use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

use crate::Quantity;

/// Measurement unit of an ingredient line.
///
/// Parsing accepts the usual spellings and plurals, so "cup", "cups" and "C"
/// are the same unit. Distinct units are never converted into each other.
#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(ascii_case_insensitive)]
pub enum Unit {
    #[strum(to_string = "mg", serialize = "milligram", serialize = "milligrams")]
    Milligram,
    #[strum(to_string = "g", serialize = "gram", serialize = "grams")]
    Gram,
    #[strum(to_string = "kg", serialize = "kilogram", serialize = "kilograms")]
    Kilogram,
    #[strum(to_string = "oz", serialize = "ounce", serialize = "ounces")]
    Ounce,
    #[strum(to_string = "lb", serialize = "lbs", serialize = "pound", serialize = "pounds")]
    Pound,
    #[strum(
        to_string = "ml",
        serialize = "milliliter",
        serialize = "milliliters",
        serialize = "millilitre",
        serialize = "millilitres"
    )]
    Milliliter,
    #[strum(
        to_string = "l",
        serialize = "liter",
        serialize = "liters",
        serialize = "litre",
        serialize = "litres"
    )]
    Liter,
    #[strum(to_string = "tsp", serialize = "teaspoon", serialize = "teaspoons")]
    Teaspoon,
    #[strum(
        to_string = "tbsp",
        serialize = "tablespoon",
        serialize = "tablespoons",
        serialize = "tbs"
    )]
    Tablespoon,
    #[strum(to_string = "cup", serialize = "cups", serialize = "c")]
    Cup,
    #[strum(to_string = "fl oz", serialize = "fluid ounce", serialize = "fluid ounces")]
    FluidOunce,
    #[strum(to_string = "pint", serialize = "pints", serialize = "pt")]
    Pint,
    #[strum(to_string = "quart", serialize = "quarts", serialize = "qt")]
    Quart,
    #[strum(to_string = "gallon", serialize = "gallons", serialize = "gal")]
    Gallon,
    #[strum(
        to_string = "pc",
        serialize = "piece",
        serialize = "pieces",
        serialize = "pcs",
        serialize = "item",
        serialize = "items",
        serialize = "whole"
    )]
    Piece,
    #[strum(to_string = "clove", serialize = "cloves")]
    Clove,
    #[strum(to_string = "slice", serialize = "slices")]
    Slice,
    #[strum(to_string = "can", serialize = "cans")]
    Can,
    #[strum(to_string = "pack", serialize = "packs", serialize = "package", serialize = "packages")]
    Pack,
    #[strum(to_string = "bunch", serialize = "bunches")]
    Bunch,
    #[strum(to_string = "pinch", serialize = "pinches")]
    Pinch,
    #[strum(to_string = "dozen", serialize = "dozens")]
    Dozen,
}

impl Unit {
    /// Parses a free-text unit. An empty unit means a plain count ("2 eggs").
    pub fn parse(value: &str) -> crate::Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Unit::Piece);
        }

        match Unit::from_str(value) {
            Ok(unit) => Ok(unit),
            Err(_) => crate::invalid!("unit", "unknown unit '{value}'"),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Grocery store section, declared in the order a shopper walks the aisles.
#[derive(
    EnumString,
    Display,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum IngredientCategory {
    /// Fresh fruits, vegetables and herbs
    FruitsAndVegetables,
    /// Bread, pastries, tortillas
    Bakery,
    /// Red meat, poultry, ground meat
    Butcher,
    /// Fish and seafood
    Seafood,
    /// Milk, butter, cream, yogurt, eggs
    DairyAndEggs,
    /// Deli meats, fresh pasta, prepared meals
    Refrigerated,
    /// Canned goods, pasta, rice, oils, spices
    Grocery,
    /// Cookies, chocolate, chips
    SnacksAndConfectionery,
    /// Water, juice, coffee, tea
    Beverages,
    /// Frozen vegetables, ready meals, ice cream
    Frozen,
    #[default]
    Other,
}

/// Identity of an ingredient line: trimmed lowercase name plus unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientKey {
    pub name: String,
    pub unit: Unit,
}

impl IngredientKey {
    pub fn new(name: &str, unit: Unit) -> Self {
        Self {
            name: normalize_name(name),
            unit,
        }
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeIngredient {
    name: String,
    quantity: Quantity,
    unit: Unit,
    category: Option<IngredientCategory>,
    note: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity: Quantity, unit: Unit) -> crate::Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            crate::invalid!("ingredient name", "must not be empty");
        }

        if quantity.is_zero() {
            crate::invalid!("quantity", "'{name}' must have a positive quantity");
        }

        Ok(Self {
            name: name.trim().to_owned(),
            quantity,
            unit,
            category: None,
            note: None,
        })
    }

    pub fn with_category(mut self, category: IngredientCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn category(&self) -> Option<IngredientCategory> {
        self.category
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name, self.unit)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    id: String,
    name: String,
    servings: Option<u32>,
    ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        servings: Option<u32>,
        ingredients: Vec<RecipeIngredient>,
    ) -> crate::Result<Self> {
        let id = id.into();
        let name = name.into();

        if name.trim().is_empty() {
            crate::invalid!("recipe name", "recipe {id} has no name");
        }

        if servings == Some(0) {
            crate::invalid!("servings", "recipe {id} declares zero servings");
        }

        Ok(Self {
            id,
            name,
            servings,
            ingredients,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn servings(&self) -> Option<u32> {
        self.servings
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }
}
