//! Caller-supplied record fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::DocumentBody;
use super::fields;
use super::record::bool_as_int;
use crate::error::{FieldError, ValidationError};
use crate::types::{OwnerId, QuantityUnit};

/// Lowest accepted rating on input.
pub const RATING_MIN: f64 = 1.0;
/// Highest accepted rating on input.
pub const RATING_MAX: f64 = 10.0;

/// Every mutable field of a record.
///
/// Used for both create and update. Update is a full replacement, so all
/// fields are required. Identity and timestamp fields are not part of the
/// input; if a payload carries `ownerId`, `id`, `createdAt` or `updatedAt`
/// they are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    pub brand_name: String,
    pub roast: String,
    pub form_factor: String,
    pub notes: String,
    pub quantity: f64,
    pub quantity_unit: QuantityUnit,
    pub order_date: NaiveDate,
    pub bitterness_rating: f64,
    pub acidity_rating: f64,
    pub note_clarity_rating: f64,
    /// Submitted on the 10-point scale.
    pub overall_taste_rating: f64,
    #[serde(with = "bool_as_int")]
    pub worth_reordering: bool,
}

impl RecordInput {
    /// Check text fields are non-empty, quantity is positive and every rating
    /// is within `[1,10]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        let text = [
            (fields::BRAND_NAME, &self.brand_name),
            (fields::ROAST, &self.roast),
            (fields::FORM_FACTOR, &self.form_factor),
            (fields::NOTES, &self.notes),
        ];
        for (field, value) in text {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            errors.push(FieldError {
                field: fields::QUANTITY,
                reason: "must be a positive number".to_string(),
            });
        }

        let ratings = [
            (fields::BITTERNESS_RATING, self.bitterness_rating),
            (fields::ACIDITY_RATING, self.acidity_rating),
            (fields::NOTE_CLARITY_RATING, self.note_clarity_rating),
            (fields::OVERALL_TASTE_RATING, self.overall_taste_rating),
        ];
        for (field, value) in ratings {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                errors.push(FieldError {
                    field,
                    reason: format!("must be between {} and {}", RATING_MIN, RATING_MAX),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields: errors })
        }
    }

    /// Build the stored body for this input.
    ///
    /// The body holds exactly these fields plus identity and timestamps;
    /// nothing from a previous version of the document survives.
    pub fn to_body(
        &self,
        owner: &OwnerId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DocumentBody {
        let mut map = Map::new();
        map.insert(fields::OWNER_ID.into(), json!(owner.as_str()));
        map.insert(fields::BRAND_NAME.into(), json!(self.brand_name));
        map.insert(fields::ROAST.into(), json!(self.roast));
        map.insert(fields::FORM_FACTOR.into(), json!(self.form_factor));
        map.insert(fields::NOTES.into(), json!(self.notes));
        map.insert(fields::QUANTITY.into(), json!(self.quantity));
        map.insert(fields::QUANTITY_UNIT.into(), json!(self.quantity_unit.as_str()));
        map.insert(
            fields::ORDER_DATE.into(),
            Value::String(self.order_date.format("%Y-%m-%d").to_string()),
        );
        map.insert(fields::BITTERNESS_RATING.into(), json!(self.bitterness_rating));
        map.insert(fields::ACIDITY_RATING.into(), json!(self.acidity_rating));
        map.insert(
            fields::NOTE_CLARITY_RATING.into(),
            json!(self.note_clarity_rating),
        );
        map.insert(
            fields::OVERALL_TASTE_RATING.into(),
            json!(self.overall_taste_rating),
        );
        map.insert(
            fields::WORTH_REORDERING.into(),
            json!(u8::from(self.worth_reordering)),
        );
        map.insert(fields::CREATED_AT.into(), Value::String(created_at.to_rfc3339()));
        map.insert(fields::UPDATED_AT.into(), Value::String(updated_at.to_rfc3339()));
        DocumentBody::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RecordInput {
        RecordInput {
            brand_name: "Illy".to_string(),
            roast: "dark".to_string(),
            form_factor: "ground".to_string(),
            notes: "smooth".to_string(),
            quantity: 1.0,
            quantity_unit: QuantityUnit::Kg,
            order_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            bitterness_rating: 5.0,
            acidity_rating: 3.0,
            note_clarity_rating: 7.0,
            overall_taste_rating: 8.0,
            worth_reordering: false,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn collects_every_bad_field() {
        let mut bad = input();
        bad.brand_name = "  ".to_string();
        bad.acidity_rating = 0.0;
        bad.overall_taste_rating = 11.0;
        bad.quantity = -2.0;

        let err = bad.validate().unwrap_err();
        assert_eq!(err.fields.len(), 4);
        assert!(err.has_field("brandName"));
        assert!(err.has_field("acidityRating"));
        assert!(err.has_field("overallTasteRating"));
        assert!(err.has_field("quantity"));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        let mut edge = input();
        edge.bitterness_rating = 1.0;
        edge.overall_taste_rating = 10.0;
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn payload_owner_is_ignored() {
        let payload = serde_json::json!({
            "ownerId": "intruder",
            "id": "forged",
            "brandName": "Illy",
            "roast": "dark",
            "formFactor": "ground",
            "notes": "smooth",
            "quantity": 250,
            "quantityUnit": "g",
            "orderDate": "2024-02-01",
            "bitternessRating": 5,
            "acidityRating": 3,
            "noteClarityRating": 7,
            "overallTasteRating": 8,
            "worthReordering": 1
        });
        let parsed: RecordInput = serde_json::from_value(payload).unwrap();
        let owner = OwnerId::new("u1").unwrap();
        let now = Utc::now();
        let body = parsed.to_body(&owner, now, now);

        assert_eq!(body.get("ownerId").unwrap(), "u1");
        assert!(body.get("id").is_none());
        assert!(parsed.worth_reordering);
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let payload = serde_json::json!({"brandName": "Illy"});
        assert!(serde_json::from_value::<RecordInput>(payload).is_err());
    }
}
