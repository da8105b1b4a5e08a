//! Raw document to canonical record.
//!
//! Stored documents come from several generations of the application. The
//! normalizer reads whatever is there and produces a [`Record`] whose ratings
//! are always within bounds.
//!
//! # Overall taste scale
//!
//! Historical data mixes a 10-point and a 5-point scale for
//! `overallTasteRating` with no tag saying which. A stored value above `5` is
//! taken as 10-point and halved; anything at or below `5` is taken as already
//! canonical. This is lossy: a genuine 10-point rating of `3` stays `3`. The
//! rule is kept as-is because existing stored data depends on it.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::error::StoreError;
use crate::repo::{Document, Record, fields};
use crate::types::{OwnerId, QuantityUnit};

/// Values above this on the overall taste field are read as 10-point.
pub const LEGACY_SCALE_THRESHOLD: f64 = 5.0;

const RATING_FLOOR: f64 = 1.0;
const RATING_CEILING: f64 = 10.0;

/// Normalize a stored document into a [`Record`].
///
/// Idempotent: normalizing `normalize(doc)?.to_document()` gives the same
/// record back.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] when the document has no usable
/// `ownerId`. Such a document cannot be shown to anyone.
pub fn normalize(doc: &Document) -> Result<Record, StoreError> {
    let body = &doc.body;

    let owner_id = body
        .get(fields::OWNER_ID)
        .and_then(Value::as_str)
        .and_then(|s| OwnerId::new(s).ok())
        .ok_or_else(|| StoreError::Corrupt {
            id: doc.id.to_string(),
            message: "missing or invalid ownerId".to_string(),
        })?;

    Ok(Record {
        id: doc.id.clone(),
        owner_id,
        brand_name: text(body.get(fields::BRAND_NAME)),
        roast: text(body.get(fields::ROAST)),
        form_factor: text(body.get(fields::FORM_FACTOR)),
        notes: text(body.get(fields::NOTES)),
        quantity: number(body.get(fields::QUANTITY)).filter(|q| *q >= 0.0),
        quantity_unit: body
            .get(fields::QUANTITY_UNIT)
            .and_then(Value::as_str)
            .and_then(QuantityUnit::parse)
            .unwrap_or_default(),
        order_date: date(body.get(fields::ORDER_DATE)),
        bitterness_rating: number(body.get(fields::BITTERNESS_RATING)).map(clamp_rating),
        acidity_rating: number(body.get(fields::ACIDITY_RATING)).map(clamp_rating),
        note_clarity_rating: number(body.get(fields::NOTE_CLARITY_RATING)).map(clamp_rating),
        overall_taste_rating: number(body.get(fields::OVERALL_TASTE_RATING))
            .map(canonical_overall_taste),
        worth_reordering: flag(body.get(fields::WORTH_REORDERING)),
        created_at: timestamp(body.get(fields::CREATED_AT)),
        updated_at: timestamp(body.get(fields::UPDATED_AT)),
    })
}

/// Map a stored overall taste value onto the canonical 5-point scale.
///
/// Out-of-range values are clamped into `[1,10]` first so the result always
/// lands in `[1,5]`.
pub fn canonical_overall_taste(value: f64) -> f64 {
    let value = clamp_rating(value);
    if value > LEGACY_SCALE_THRESHOLD {
        value / 2.0
    } else {
        value
    }
}

fn clamp_rating(value: f64) -> f64 {
    value.clamp(RATING_FLOOR, RATING_CEILING)
}

fn text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => s.trim() == "1",
        _ => false,
    }
}

fn date(value: Option<&Value>) -> Option<NaiveDate> {
    let s = value?.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let s = value?.as_str()?;
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
