#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Centralized constants: size policy, physical schemas, message fragments.
pub mod constants;
/// Criteria value object and size helpers.
pub mod criteria;
/// Record, record set, scalar value, and diagnostics types.
pub mod data;
/// Deterministic dummy tables for demos and tests.
pub mod dummy;
/// Output shaping for downstream file writers.
pub mod export;
/// Manual override input: parsing, dedup, and the prepend merge.
pub mod extra;
/// Price, category, cluster, and stock filters.
pub mod filters;
/// Partition composition metrics.
pub mod metrics;
/// Pipeline orchestration and the two source profiles.
pub mod pipeline;
/// Two fixed schema variants and logical column keys.
pub mod schema;
/// Ratio interleave engine.
pub mod shuffle;
/// Descending stable sort.
pub mod sort;
/// Shared type aliases.
pub mod types;
/// Numeric token helpers.
pub mod utils;

mod errors;

pub use criteria::{Criteria, Ratio};
pub use data::{Diagnostics, Record, RecordSet, Value};
pub use errors::PipelineError;
pub use extra::{ExtraInput, ExtraPair, parse_extra_input};
pub use pipeline::{Pipeline, SourceAProfile, SourceBProfile, SourceProfile};
pub use schema::{ColumnKey, SchemaMapping, SourceKind};
pub use types::{CategoryId, ClusterName, Message, ProductId, RawToken, SellerId};
