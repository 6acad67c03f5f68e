use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Measurement unit for an ingredient quantity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    Mg,
    L,
    Ml,
    /// Count of whole items ("numbers").
    #[default]
    Nos,
}

/// A single line of a recipe's ingredient list.
///
/// Ingredients have no identity of their own; they belong to exactly one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Always >= 1.
    pub quantity: f64,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
        }
    }
}
