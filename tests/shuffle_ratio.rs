use indexmap::IndexMap;

use collections_core::criteria::Ratio;
use collections_core::data::{Diagnostics, Record, RecordSet, Value};
use collections_core::PipelineError;
use collections_core::schema::{ColumnKey, SchemaMapping, SourceKind};
use collections_core::shuffle::shuffle_by_ratio;

/// Build a Source-A or Source-B set whose seller types follow `pattern`
/// (`'L'` local, `'O'` offshore, anything else unclassified). Product ids are
/// sequential so order checks can track individual rows.
fn set_with_types(kind: SourceKind, pattern: &str) -> RecordSet {
    let schema = SchemaMapping::for_kind(kind);
    let records = pattern
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let seller_type = match ch {
                'L' => schema.local_sentinel(),
                'O' => schema.offshore_sentinel(),
                _ => Value::Str("Unknown".to_string()),
            };
            let mut values: IndexMap<ColumnKey, Value> = IndexMap::new();
            for key in schema.keys() {
                let value = match key {
                    ColumnKey::SellerId => Value::Int(100_000 + i as i64),
                    ColumnKey::ProductId => Value::Int(10_000_000 + i as i64),
                    ColumnKey::Price => Value::Float(10.0 + i as f64),
                    ColumnKey::OldPrice => Value::Float(20.0 + i as f64),
                    ColumnKey::Ado => Value::Float(0.5),
                    ColumnKey::Stock => Value::Int(5),
                    ColumnKey::Rating => Value::Int(3),
                    ColumnKey::Discount => Value::Float(0.1),
                    ColumnKey::CategoryId => Value::Int(1),
                    ColumnKey::Cluster => Value::Str("Electronics".to_string()),
                    ColumnKey::SellerType => seller_type.clone(),
                };
                values.insert(*key, value);
            }
            Record::new(values)
        })
        .collect();
    RecordSet::new(schema, records).expect("fixture matches schema")
}

fn seller_types(set: &RecordSet) -> Vec<Value> {
    set.column_values(ColumnKey::SellerType).unwrap()
}

fn product_ids(set: &RecordSet) -> Vec<i64> {
    set.column_values(ColumnKey::ProductId)
        .unwrap()
        .iter()
        .filter_map(Value::as_i64)
        .collect()
}

fn type_chars(kind: SourceKind, set: &RecordSet) -> String {
    let schema = SchemaMapping::for_kind(kind);
    seller_types(set)
        .iter()
        .map(|value| {
            if *value == schema.local_sentinel() {
                'L'
            } else if *value == schema.offshore_sentinel() {
                'O'
            } else {
                '?'
            }
        })
        .collect()
}

// 15 local / 5 offshore, alternating head then local tail.
const PATTERN_A: &str = "LOLOLOLOLOLLLLLLLLLL";
// 12 local / 8 offshore, alternating head then local tail.
const PATTERN_B: &str = "LOLOLOLOLOLOLOLOLLLL";

#[test]
fn zero_local_ratio_keeps_offshore_partition_only() {
    for kind in [SourceKind::SourceA, SourceKind::SourceB] {
        let set = set_with_types(kind, PATTERN_A);
        let mut diags = Diagnostics::new();
        let ratio = Ratio {
            local: 0,
            offshore: 1,
        };
        let out = shuffle_by_ratio(&set, ratio, &mut diags).unwrap();
        let schema = SchemaMapping::for_kind(kind);
        assert!(!seller_types(&out).contains(&schema.local_sentinel()));
        assert_eq!(out.len(), 5);
        // offshore rows keep their original relative order
        assert_eq!(
            product_ids(&out),
            vec![10_000_001, 10_000_003, 10_000_005, 10_000_007, 10_000_009]
        );
        assert!(diags.is_empty());
    }
}

#[test]
fn zero_offshore_ratio_keeps_local_partition_only() {
    for kind in [SourceKind::SourceA, SourceKind::SourceB] {
        let set = set_with_types(kind, PATTERN_B);
        let mut diags = Diagnostics::new();
        let ratio = Ratio {
            local: 1,
            offshore: 0,
        };
        let out = shuffle_by_ratio(&set, ratio, &mut diags).unwrap();
        let schema = SchemaMapping::for_kind(kind);
        assert!(!seller_types(&out).contains(&schema.offshore_sentinel()));
        assert_eq!(out.len(), 12);
        assert!(diags.is_empty());
    }
}

#[test]
fn one_to_one_interleave_matches_manual_result() {
    let set_a = set_with_types(SourceKind::SourceA, PATTERN_A);
    let set_b = set_with_types(SourceKind::SourceB, PATTERN_B);
    let ratio = Ratio {
        local: 1,
        offshore: 1,
    };
    let mut diags = Diagnostics::new();

    let out_a = shuffle_by_ratio(&set_a, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceA, &out_a), "LOLOLOLOLOLLLLLLLLLL");

    let out_b = shuffle_by_ratio(&set_b, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceB, &out_b), "LOLOLOLOLOLOLOLOLLLL");
    assert!(diags.is_empty());
}

#[test]
fn three_to_two_interleave_matches_manual_result() {
    let set_a = set_with_types(SourceKind::SourceA, PATTERN_A);
    let set_b = set_with_types(SourceKind::SourceB, PATTERN_B);
    let ratio = Ratio {
        local: 3,
        offshore: 2,
    };
    let mut diags = Diagnostics::new();

    let out_a = shuffle_by_ratio(&set_a, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceA, &out_a), "LLLOOLLLOOLLLOLLLLLL");

    let out_b = shuffle_by_ratio(&set_b, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceB, &out_b), "LLLOOLLLOOLLLOOLLLOO");
    assert!(diags.is_empty());
}

#[test]
fn one_to_two_interleave_matches_manual_result() {
    let set_a = set_with_types(SourceKind::SourceA, PATTERN_A);
    let set_b = set_with_types(SourceKind::SourceB, PATTERN_B);
    let ratio = Ratio {
        local: 1,
        offshore: 2,
    };
    let mut diags = Diagnostics::new();

    let out_a = shuffle_by_ratio(&set_a, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceA, &out_a), "LOOLOOLOLLLLLLLLLLLL");

    let out_b = shuffle_by_ratio(&set_b, ratio, &mut diags).unwrap();
    assert_eq!(type_chars(SourceKind::SourceB, &out_b), "LOOLOOLOOLOOLLLLLLLL");
    assert!(diags.is_empty());
}

#[test]
fn interleave_is_a_permutation_of_both_partitions() {
    let set = set_with_types(SourceKind::SourceB, PATTERN_B);
    let mut diags = Diagnostics::new();
    let ratio = Ratio {
        local: 3,
        offshore: 2,
    };
    let out = shuffle_by_ratio(&set, ratio, &mut diags).unwrap();
    assert_eq!(out.len(), set.len());

    let mut before = product_ids(&set);
    let mut after = product_ids(&out);
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn single_partition_set_is_returned_unchanged_with_diagnostic() {
    let set = set_with_types(SourceKind::SourceA, "LLLLLLLL");
    let mut diags = Diagnostics::new();
    let ratio = Ratio {
        local: 2,
        offshore: 3,
    };
    let out = shuffle_by_ratio(&set, ratio, &mut diags).unwrap();
    assert_eq!(product_ids(&out), product_ids(&set));
    assert_eq!(
        diags.messages(),
        &["Local or Offshore only products. Not shuffling.".to_string()]
    );
}

#[test]
fn unclassified_rows_are_excluded_from_interleave_output() {
    // 3 local, 2 offshore, 2 unclassified rows
    let set = set_with_types(SourceKind::SourceB, "L?OLO?L");
    let mut diags = Diagnostics::new();
    let ratio = Ratio {
        local: 1,
        offshore: 1,
    };
    let out = shuffle_by_ratio(&set, ratio, &mut diags).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(type_chars(SourceKind::SourceB, &out), "LOLOL");
}

#[test]
fn both_zero_ratio_is_rejected() {
    let set = set_with_types(SourceKind::SourceA, PATTERN_A);
    let mut diags = Diagnostics::new();
    let ratio = Ratio {
        local: 0,
        offshore: 0,
    };
    let err = shuffle_by_ratio(&set, ratio, &mut diags).unwrap_err();
    assert!(matches!(err, PipelineError::Criteria(_)));
}
