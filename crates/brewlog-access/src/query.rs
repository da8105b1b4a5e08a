//! In-process filtering and ordering over a snapshot.
//!
//! The store cannot run an owner + brand query with a sort without extra
//! index provisioning, so both filters and the sort happen here, O(n) per
//! call.

use std::cmp::Ordering;

use brewlog_core::{OwnerId, Record, SortKey};

/// An owner-scoped listing request.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    owner: &'a OwnerId,
    brand: Option<&'a str>,
    sort: SortKey,
}

impl<'a> Query<'a> {
    /// Every query is scoped to an owner; there is no unscoped form.
    pub fn new(owner: &'a OwnerId, sort: SortKey) -> Self {
        Self {
            owner,
            brand: None,
            sort,
        }
    }

    /// Keep only records whose brand matches exactly.
    pub fn with_brand(mut self, brand: Option<&'a str>) -> Self {
        self.brand = brand;
        self
    }

    /// Filter to the owner, then the brand, then sort descending by key.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let mut matched: Vec<Record> = records
            .iter()
            .filter(|r| &r.owner_id == self.owner)
            .filter(|r| self.brand.is_none_or(|brand| r.brand_name == brand))
            .cloned()
            .collect();

        matched.sort_by(|a, b| compare(a, b, self.sort));
        matched
    }
}

/// Descending by `key`, then ascending by id.
///
/// A missing rating sorts as `0`; a missing date sorts as the earliest date.
pub fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    let by_key = match key {
        SortKey::OrderDate => b.order_date.cmp(&a.order_date),
        SortKey::OverallTasteRating => b.taste_sort_value().total_cmp(&a.taste_sort_value()),
    };
    by_key.then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_core::{QuantityUnit, RecordId};
    use chrono::NaiveDate;

    fn record(id: &str, owner: &str, brand: &str, taste: Option<f64>, date: Option<&str>) -> Record {
        Record {
            id: RecordId::new(id).unwrap(),
            owner_id: OwnerId::new(owner).unwrap(),
            brand_name: brand.to_string(),
            roast: "medium".to_string(),
            form_factor: "beans".to_string(),
            notes: String::new(),
            quantity: None,
            quantity_unit: QuantityUnit::G,
            order_date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            bitterness_rating: None,
            acidity_rating: None,
            note_clarity_rating: None,
            overall_taste_rating: taste,
            worth_reordering: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn owner_filter_always_applies() {
        let records = vec![
            record("a", "u1", "Illy", Some(4.0), Some("2024-01-01")),
            record("b", "u2", "Illy", Some(5.0), Some("2024-01-02")),
        ];
        let owner = OwnerId::new("u1").unwrap();

        let listed = Query::new(&owner, SortKey::OrderDate).apply(&records);
        assert_eq!(ids(&listed), vec!["a"]);
    }

    #[test]
    fn brand_filter_is_exact() {
        let records = vec![
            record("a", "u1", "Illy", None, None),
            record("b", "u1", "illy", None, None),
            record("c", "u1", "Illy Classico", None, None),
        ];
        let owner = OwnerId::new("u1").unwrap();

        let listed = Query::new(&owner, SortKey::OrderDate)
            .with_brand(Some("Illy"))
            .apply(&records);
        assert_eq!(ids(&listed), vec!["a"]);
    }

    #[test]
    fn order_date_descending_missing_last() {
        let records = vec![
            record("a", "u1", "X", None, None),
            record("b", "u1", "X", None, Some("2024-01-01")),
            record("c", "u1", "X", None, Some("2024-03-01")),
        ];
        let owner = OwnerId::new("u1").unwrap();

        let listed = Query::new(&owner, SortKey::OrderDate).apply(&records);
        assert_eq!(ids(&listed), vec!["c", "b", "a"]);
    }

    #[test]
    fn rating_descending_missing_as_zero() {
        let records = vec![
            record("a", "u1", "X", None, None),
            record("b", "u1", "X", Some(1.0), None),
            record("c", "u1", "X", Some(4.5), None),
        ];
        let owner = OwnerId::new("u1").unwrap();

        let listed = Query::new(&owner, SortKey::OverallTasteRating).apply(&records);
        assert_eq!(ids(&listed), vec!["c", "b", "a"]);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let records = vec![
            record("z", "u1", "X", Some(3.0), Some("2024-01-01")),
            record("m", "u1", "X", Some(3.0), Some("2024-01-01")),
            record("a", "u1", "X", Some(3.0), Some("2024-01-01")),
        ];
        let owner = OwnerId::new("u1").unwrap();

        for key in [SortKey::OrderDate, SortKey::OverallTasteRating] {
            let listed = Query::new(&owner, key).apply(&records);
            assert_eq!(ids(&listed), vec!["a", "m", "z"]);
        }
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let mut records = vec![
            record("a", "u1", "X", Some(2.0), Some("2024-01-05")),
            record("b", "u1", "X", Some(4.0), Some("2024-01-05")),
            record("c", "u1", "X", None, Some("2023-12-31")),
            record("d", "u1", "X", Some(4.0), None),
        ];
        let owner = OwnerId::new("u1").unwrap();
        let query = Query::new(&owner, SortKey::OverallTasteRating);

        let forward = query.apply(&records);
        records.reverse();
        let backward = query.apply(&records);
        assert_eq!(ids(&forward), ids(&backward));
        assert_eq!(ids(&forward), vec!["b", "d", "a", "c"]);
    }
}
