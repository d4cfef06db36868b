//! Deterministic dummy tables for demos and tests.
//!
//! Value ranges follow the production sources: six-digit seller ids,
//! eight-digit product ids, prices between 1.00 and 1000.00, ratings 1-5.
//! Seller types alternate local/offshore and Source-B categories/clusters
//! cycle through their full ranges, so every generated table contains both
//! partitions and every category and cluster label.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Record, RecordSet, Value};
use crate::schema::{ColumnKey, SchemaMapping, SourceKind};

/// Cluster labels emitted for Source-B tables.
pub const CLUSTERS: [&str; 4] = ["Electronics", "FMCG", "Lifestyle", "Fashion"];

fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a `size`-row record set for `kind`, deterministic per `seed`.
pub fn dummy_record_set(kind: SourceKind, size: usize, seed: u64) -> RecordSet {
    let schema = SchemaMapping::for_kind(kind);
    let mut rng = StdRng::seed_from_u64(seed);

    let records = (0..size)
        .map(|i| {
            let price = two_decimals(rng.random_range(1.0..1000.0));
            let mut values: IndexMap<ColumnKey, Value> = IndexMap::new();
            for key in schema.keys() {
                let value = match key {
                    ColumnKey::SellerId => Value::Int(100_000 + rng.random_range(0..900_000)),
                    // sequential product ids keep every row distinct
                    ColumnKey::ProductId => Value::Int(10_000_000 + i as i64),
                    ColumnKey::Price => Value::Float(price),
                    ColumnKey::OldPrice => {
                        let factor = rng.random_range(1.0..10.0);
                        Value::Float(two_decimals(price * factor))
                    }
                    ColumnKey::Ado => Value::Float(two_decimals(rng.random_range(0.0..1.0))),
                    ColumnKey::Stock => {
                        if i % 7 == 0 {
                            Value::Int(0)
                        } else {
                            Value::Int(rng.random_range(1..=10_000))
                        }
                    }
                    ColumnKey::Rating => Value::Int(rng.random_range(1..=5)),
                    ColumnKey::Discount => {
                        Value::Float(two_decimals(rng.random_range(0.0..1.0)))
                    }
                    ColumnKey::CategoryId => Value::Int((i as i64 % 10) + 1),
                    ColumnKey::Cluster => Value::Str(CLUSTERS[i % CLUSTERS.len()].to_string()),
                    ColumnKey::SellerType => {
                        if i % 2 == 0 {
                            schema.local_sentinel()
                        } else {
                            schema.offshore_sentinel()
                        }
                    }
                };
                values.insert(*key, value);
            }
            Record::new(values)
        })
        .collect();

    RecordSet::new(schema, records).expect("generated records match schema")
}
