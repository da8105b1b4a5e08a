//! The canonical record shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::fields;
use super::{Document, DocumentBody};
use crate::types::{OwnerId, QuantityUnit, RecordId};

/// A purchase/tasting record after normalization.
///
/// Fields that legacy documents may lack are optional. `overall_taste_rating`
/// is on the canonical 5-point scale; the other ratings are on the 10-point
/// scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub owner_id: OwnerId,
    pub brand_name: String,
    pub roast: String,
    pub form_factor: String,
    pub notes: String,
    pub quantity: Option<f64>,
    pub quantity_unit: QuantityUnit,
    pub order_date: Option<NaiveDate>,
    pub bitterness_rating: Option<f64>,
    pub acidity_rating: Option<f64>,
    pub note_clarity_rating: Option<f64>,
    pub overall_taste_rating: Option<f64>,
    #[serde(with = "bool_as_int")]
    pub worth_reordering: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Overall taste rating used for ordering; missing counts as `0`.
    pub fn taste_sort_value(&self) -> f64 {
        self.overall_taste_rating.unwrap_or(0.0)
    }

    /// Convert back to the stored document shape.
    ///
    /// Normalizing the result yields this record again.
    pub fn to_document(&self) -> Document {
        let mut map = Map::new();
        map.insert(fields::OWNER_ID.into(), json!(self.owner_id.as_str()));
        map.insert(fields::BRAND_NAME.into(), json!(self.brand_name));
        map.insert(fields::ROAST.into(), json!(self.roast));
        map.insert(fields::FORM_FACTOR.into(), json!(self.form_factor));
        map.insert(fields::NOTES.into(), json!(self.notes));
        map.insert(fields::QUANTITY_UNIT.into(), json!(self.quantity_unit.as_str()));
        map.insert(
            fields::WORTH_REORDERING.into(),
            json!(u8::from(self.worth_reordering)),
        );

        let optional = [
            (fields::QUANTITY, self.quantity),
            (fields::BITTERNESS_RATING, self.bitterness_rating),
            (fields::ACIDITY_RATING, self.acidity_rating),
            (fields::NOTE_CLARITY_RATING, self.note_clarity_rating),
            (fields::OVERALL_TASTE_RATING, self.overall_taste_rating),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key.into(), json!(value));
            }
        }

        if let Some(date) = self.order_date {
            map.insert(
                fields::ORDER_DATE.into(),
                Value::String(date.format("%Y-%m-%d").to_string()),
            );
        }
        if let Some(ts) = self.created_at {
            map.insert(fields::CREATED_AT.into(), Value::String(ts.to_rfc3339()));
        }
        if let Some(ts) = self.updated_at {
            map.insert(fields::UPDATED_AT.into(), Value::String(ts.to_rfc3339()));
        }

        Document::new(self.id.clone(), DocumentBody::from_map(map))
    }
}

/// Serialize a bool as `0`/`1`; accept either integers or booleans.
pub(crate) mod bool_as_int {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Int(i64),
            Bool(bool),
        }

        match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => Ok(b),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(n) => Err(de::Error::invalid_value(
                Unexpected::Signed(n),
                &"0 or 1",
            )),
        }
    }
}
