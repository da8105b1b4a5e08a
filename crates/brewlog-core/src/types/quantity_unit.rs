//! Quantity unit type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit for a purchase quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    /// Grams.
    #[default]
    G,
    /// Kilograms.
    Kg,
}

impl QuantityUnit {
    /// Returns the wire name of this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::G => "g",
            QuantityUnit::Kg => "kg",
        }
    }

    /// Parse a stored unit, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("g") {
            Some(QuantityUnit::G)
        } else if s.eq_ignore_ascii_case("kg") {
            Some(QuantityUnit::Kg)
        } else {
            None
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
