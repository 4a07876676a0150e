use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::Serialize;

/// Exact, non-negative ingredient amount.
///
/// Backed by a decimal so summing scaled recipe quantities never drifts the way
/// binary floats do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Quantity = Quantity(Decimal::ZERO);

    pub fn new(value: Decimal) -> crate::Result<Self> {
        if value < Decimal::ZERO {
            crate::invalid!("quantity", "{value} is negative");
        }

        Ok(Self(value.normalize()))
    }

    /// Same as [`Quantity::new`] but also rejects zero.
    pub fn positive(value: Decimal) -> crate::Result<Self> {
        if value <= Decimal::ZERO {
            crate::invalid!("quantity", "{value} must be greater than zero");
        }

        Ok(Self(value.normalize()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Scales a per-recipe amount to the servings requested by a meal plan entry.
    ///
    /// With a base serving count the result is `self * servings / base`, otherwise
    /// the servings act as a plain multiplier.
    pub fn scale(self, servings: u32, base_servings: Option<u32>) -> Self {
        let scaled = self.0.saturating_mul(Decimal::from(servings));
        let scaled = match base_servings {
            Some(base) if base > 0 => scaled / Decimal::from(base),
            _ => scaled,
        };

        Self(scaled.normalize())
    }

    pub fn saturating_sub(self, other: Quantity) -> Self {
        if other.0 >= self.0 {
            return Self::ZERO;
        }

        Self((self.0 - other.0).normalize())
    }
}

impl FromStr for Quantity {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())?;

        Self::new(value)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0).normalize())
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, |acc, q| acc + q)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
