//! Manual override input: parsing, dedup, and the prepend merge.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{Record, RecordSet, Value};
use crate::schema::ColumnKey;
use crate::types::{ProductId, SellerId};
use crate::utils::parse_digits;

/// One manually supplied (seller, product) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPair {
    /// Seller identifier.
    pub seller_id: SellerId,
    /// Product identifier.
    pub product_id: ProductId,
}

/// Ordered list of manual (seller, product) pairs, deduplicated by product id
/// keeping the first occurrence. Seller ids may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInput {
    pairs: Vec<ExtraPair>,
}

impl ExtraInput {
    /// Build from raw pairs, dropping later pairs that repeat a product id.
    pub fn from_pairs(pairs: impl IntoIterator<Item = ExtraPair>) -> Self {
        let mut seen: HashSet<ProductId> = HashSet::new();
        let mut deduped = Vec::new();
        for pair in pairs {
            if seen.insert(pair.product_id) {
                deduped.push(pair);
            }
        }
        Self { pairs: deduped }
    }

    /// Pairs in original order.
    pub fn pairs(&self) -> &[ExtraPair] {
        &self.pairs
    }

    /// Number of pairs after dedup.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no valid pair survived.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Parse pasted override text: one pair per line, two numeric tokens
/// separated by a tab. The textually longer token is the product id and the
/// shorter the seller id; malformed lines (missing token, non-numeric text,
/// equal token lengths) are skipped. Returns `None` when no line survives.
pub fn parse_extra_input(text: &str) -> Option<ExtraInput> {
    let mut pairs = Vec::new();
    for line in text.split('\n') {
        let mut tokens = line.split('\t');
        let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        if first.is_empty() || second.is_empty() {
            continue;
        }
        let (Some(a), Some(b)) = (parse_digits(first), parse_digits(second)) else {
            continue;
        };
        if first.len() > second.len() {
            pairs.push(ExtraPair {
                product_id: a,
                seller_id: b,
            });
        } else if first.len() < second.len() {
            pairs.push(ExtraPair {
                product_id: b,
                seller_id: a,
            });
        }
        // equal lengths are ambiguous and skipped
    }
    let input = ExtraInput::from_pairs(pairs);
    if input.is_empty() { None } else { Some(input) }
}

/// Prepend extra-input rows to `set`: main rows sharing a product id with
/// the override list are removed, the overrides become minimal records
/// (seller and product id set, every other column `Missing`), and the result
/// is marked merged. An empty override list leaves `set` untouched.
pub fn merge_extra_input(set: &RecordSet, extra: &ExtraInput) -> RecordSet {
    if extra.is_empty() {
        return set.clone();
    }

    let override_products: HashSet<ProductId> =
        extra.pairs().iter().map(|pair| pair.product_id).collect();

    let kept_main = set.filter(|record| {
        record
            .get(ColumnKey::ProductId)
            .and_then(Value::as_i64)
            .is_none_or(|id| !override_products.contains(&id))
    });

    let schema = *set.schema();
    let extra_records: Vec<Record> = extra
        .pairs()
        .iter()
        .map(|pair| {
            let mut values = IndexMap::new();
            for key in schema.keys() {
                let value = match key {
                    ColumnKey::SellerId => Value::Int(pair.seller_id),
                    ColumnKey::ProductId => Value::Int(pair.product_id),
                    _ => Value::Missing,
                };
                values.insert(*key, value);
            }
            Record::new(values)
        })
        .collect();

    let extra_set = set.from_stage(extra_records);
    let mut merged = RecordSet::concat(&extra_set, &kept_main);
    merged.mark_extra_merged();
    merged
}
