//! Sort key for listing records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Field a record listing is ordered by. Both keys sort descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Most recent order first.
    #[default]
    OrderDate,
    /// Highest canonical overall taste rating first.
    OverallTasteRating,
}

impl SortKey {
    /// Returns the wire name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::OrderDate => "orderDate",
            SortKey::OverallTasteRating => "overallTasteRating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orderDate" => Ok(SortKey::OrderDate),
            "overallTasteRating" => Ok(SortKey::OverallTasteRating),
            other => Err(InvalidInputError::SortKey {
                value: other.to_string(),
            }
            .into()),
        }
    }
}
