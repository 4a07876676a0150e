use time::Date;

use crate::{IngredientCategory, IngredientKey, Quantity, Unit};

/// Something the user already has on hand.
#[derive(Clone, Debug, PartialEq)]
pub struct PantryItem {
    name: String,
    category: IngredientCategory,
    quantity: Quantity,
    unit: Unit,
    expires_on: Option<Date>,
    location: Option<String>,
}

impl PantryItem {
    pub fn new(
        name: impl Into<String>,
        category: IngredientCategory,
        quantity: Quantity,
        unit: Unit,
    ) -> crate::Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            crate::invalid!("pantry item name", "must not be empty");
        }

        Ok(Self {
            name: name.trim().to_owned(),
            category,
            quantity,
            unit,
            expires_on: None,
            location: None,
        })
    }

    pub fn with_expiry(mut self, expires_on: Date) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> IngredientCategory {
        self.category
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn expires_on(&self) -> Option<Date> {
        self.expires_on
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name, self.unit)
    }
}
