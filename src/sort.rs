//! One- and two-key descending stable sort.

use std::cmp::Ordering;

use crate::data::{Diagnostics, RecordSet, Value};
use crate::schema::ColumnKey;

fn key_name(set: &RecordSet, key: ColumnKey) -> String {
    set.schema()
        .physical(key)
        .unwrap_or(key.as_str())
        .to_string()
}

fn cell(record: &crate::data::Record, key: ColumnKey) -> &Value {
    record.get(key).unwrap_or(&Value::Missing)
}

/// Stable descending sort by up to two keys.
///
/// With both keys present, ties on the first key are resolved by the second
/// in one stable pass; remaining ties keep their prior relative order. A key
/// the schema does not declare records a diagnostic and leaves the order
/// unmodified.
pub fn sort_descending(
    set: &RecordSet,
    first: Option<ColumnKey>,
    next: Option<ColumnKey>,
    diags: &mut Diagnostics,
) -> RecordSet {
    let keys: Vec<ColumnKey> = [first, next].into_iter().flatten().collect();
    if keys.is_empty() {
        return set.clone();
    }
    for key in &keys {
        if !set.schema().declares(*key) {
            diags.push(format!("Failed to sort by {}.", key_name(set, *key)));
            return set.clone();
        }
    }

    let mut records = set.records().to_vec();
    records.sort_by(|a, b| {
        let mut ordering = Ordering::Equal;
        for key in &keys {
            ordering = cell(b, *key).total_cmp(cell(a, *key));
            if ordering != Ordering::Equal {
                break;
            }
        }
        ordering
    });
    set.from_stage(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::dummy_record_set;
    use crate::schema::SourceKind;

    fn column_f64(set: &RecordSet, key: ColumnKey) -> Vec<f64> {
        set.column_values(key)
            .unwrap()
            .iter()
            .filter_map(Value::as_f64)
            .collect()
    }

    #[test]
    fn single_key_sorts_descending() {
        let set = dummy_record_set(SourceKind::SourceA, 30, 4);
        let mut diags = Diagnostics::new();
        let sorted = sort_descending(&set, Some(ColumnKey::Rating), None, &mut diags);
        let ratings = column_f64(&sorted, ColumnKey::Rating);
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert!(diags.is_empty());
    }

    #[test]
    fn two_keys_break_ties_with_second_key() {
        let set = dummy_record_set(SourceKind::SourceB, 40, 4);
        let mut diags = Diagnostics::new();
        let sorted = sort_descending(
            &set,
            Some(ColumnKey::Rating),
            Some(ColumnKey::Ado),
            &mut diags,
        );
        let ratings = column_f64(&sorted, ColumnKey::Rating);
        let ados = column_f64(&sorted, ColumnKey::Ado);
        for i in 1..ratings.len() {
            assert!(ratings[i - 1] >= ratings[i]);
            if ratings[i - 1] == ratings[i] {
                assert!(ados[i - 1] >= ados[i]);
            }
        }
    }

    #[test]
    fn unknown_key_leaves_order_unmodified() {
        let set = dummy_record_set(SourceKind::SourceB, 15, 4);
        let before: Vec<_> = set.column_values(ColumnKey::ProductId).unwrap();
        let mut diags = Diagnostics::new();
        let sorted = sort_descending(&set, Some(ColumnKey::Stock), None, &mut diags);
        assert_eq!(sorted.column_values(ColumnKey::ProductId).unwrap(), before);
        assert_eq!(diags.messages(), &["Failed to sort by stock.".to_string()]);
    }
}
