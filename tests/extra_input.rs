use collections_core::data::{RecordSet, Value};
use collections_core::dummy::dummy_record_set;
use collections_core::extra::{merge_extra_input, parse_extra_input, ExtraInput, ExtraPair};
use collections_core::schema::{ColumnKey, SourceKind};

fn product_ids(set: &RecordSet) -> Vec<i64> {
    set.column_values(ColumnKey::ProductId)
        .unwrap()
        .iter()
        .filter_map(Value::as_i64)
        .collect()
}

#[test]
fn pasted_batch_dedups_by_product_id_keeping_first() {
    // product 48812733 appears twice with different sellers; the first wins
    let text = "584221\t48812733\n48812733\t584229\n584223\t48812735";
    let input = parse_extra_input(text).unwrap();
    assert_eq!(
        input.pairs(),
        &[
            ExtraPair {
                seller_id: 584221,
                product_id: 48812733
            },
            ExtraPair {
                seller_id: 584223,
                product_id: 48812735
            },
        ]
    );
}

#[test]
fn merge_prepends_extras_and_drops_main_duplicates() {
    for kind in [SourceKind::SourceA, SourceKind::SourceB] {
        let main = dummy_record_set(kind, 20, 21);
        let shared = product_ids(&main)[2];
        let extra = ExtraInput::from_pairs([
            ExtraPair {
                seller_id: 700_001,
                product_id: 88_000_001,
            },
            ExtraPair {
                seller_id: 700_002,
                product_id: shared,
            },
        ]);

        assert!(!main.is_extra_merged());
        let merged = merge_extra_input(&main, &extra);
        assert!(merged.is_extra_merged());

        let ids = product_ids(&merged);
        assert_eq!(&ids[..2], &[88_000_001, shared]);
        assert_eq!(merged.len(), 21, "one main row replaced, one row added");
        assert_eq!(ids.iter().filter(|id| **id == shared).count(), 1);

        // placeholder columns of the extra rows are empty
        let first = &merged.records()[0];
        assert_eq!(first.get(ColumnKey::Price), Some(&Value::Missing));
        assert_eq!(first.get(ColumnKey::SellerType), Some(&Value::Missing));
    }
}

#[test]
fn total_size_counts_pending_extras_until_merged() {
    let main = dummy_record_set(SourceKind::SourceB, 10, 22);
    let extra = ExtraInput::from_pairs([ExtraPair {
        seller_id: 1,
        product_id: 77_000_000,
    }]);

    assert_eq!(main.total_size(extra.len()), 11);
    let merged = merge_extra_input(&main, &extra);
    assert_eq!(merged.total_size(extra.len()), 11);
    assert_eq!(merged.len(), 11);
}

#[test]
fn merge_with_empty_input_is_a_no_op() {
    let main = dummy_record_set(SourceKind::SourceA, 8, 23);
    let merged = merge_extra_input(&main, &ExtraInput::default());
    assert!(!merged.is_extra_merged());
    assert_eq!(product_ids(&merged), product_ids(&main));
}
