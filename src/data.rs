use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::schema::{ColumnKey, SchemaMapping};
use crate::types::Message;

/// Scalar cell value held by a [`Record`].
///
/// `Missing` only appears in the placeholder columns of merged extra-input
/// rows; source tables never contain it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer cell.
    Int(i64),
    /// Floating-point cell.
    Float(f64),
    /// Text cell.
    Str(String),
    /// Boolean cell.
    Bool(bool),
    /// Absent cell (extra-input placeholder columns).
    Missing,
}

impl Value {
    /// Numeric view of the value, coercing `Int` to `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Total order across all variants, used by the descending sorter.
    ///
    /// `Int` and `Float` compare numerically against each other; otherwise
    /// variants rank `Missing < Bool < numeric < Str` so mixed columns still
    /// sort deterministically.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a.total_cmp(&b);
        }
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Missing, Value::Missing) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Missing => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Missing, Value::Missing) => true,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Missing => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// One product row: an ordered logical-key to value mapping.
///
/// Records are immutable once read from source; stages produce new records
/// instead of mutating cells in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: IndexMap<ColumnKey, Value>,
}

impl Record {
    /// Build a record from an ordered key/value mapping.
    pub fn new(values: IndexMap<ColumnKey, Value>) -> Self {
        Self { values }
    }

    /// Cell value for `key`, if present.
    pub fn get(&self, key: ColumnKey) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Copy of this record with `key` replaced by `value`. Insertion order
    /// of existing keys is preserved.
    pub fn with_value(&self, key: ColumnKey, value: Value) -> Record {
        let mut values = self.values.clone();
        values.insert(key, value);
        Record { values }
    }

    /// Logical keys present on this record, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = ColumnKey> + '_ {
        self.values.keys().copied()
    }
}

/// Ordered sequence of records sharing one [`SchemaMapping`].
///
/// Order is significant: filters are stable sub-selections, and only the
/// shuffle engine and the sorter intentionally reorder.
#[derive(Clone, Debug)]
pub struct RecordSet {
    schema: SchemaMapping,
    records: Vec<Record>,
    extra_merged: bool,
}

impl RecordSet {
    /// Build a record set, validating that every record carries exactly the
    /// keys the schema declares.
    pub fn new(schema: SchemaMapping, records: Vec<Record>) -> Result<Self, PipelineError> {
        for record in &records {
            for key in schema.keys() {
                if record.get(*key).is_none() {
                    return Err(PipelineError::UnknownColumn {
                        column: key.as_str().to_string(),
                    });
                }
            }
            for key in record.keys() {
                if !schema.declares(key) {
                    return Err(PipelineError::UnknownColumn {
                        column: key.as_str().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            schema,
            records,
            extra_merged: false,
        })
    }

    /// Build a record set from stage output without re-validating keys.
    /// Callers must only pass records derived from this set's own rows.
    pub(crate) fn from_stage(&self, records: Vec<Record>) -> RecordSet {
        RecordSet {
            schema: self.schema,
            records,
            extra_merged: self.extra_merged,
        }
    }

    /// Schema shared by all records.
    pub fn schema(&self) -> &SchemaMapping {
        &self.schema
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Ordered values of one column. Fails when the schema does not declare
    /// `key`.
    pub fn column_values(&self, key: ColumnKey) -> Result<Vec<Value>, PipelineError> {
        if !self.schema.declares(key) {
            return Err(PipelineError::UnknownColumn {
                column: key.as_str().to_string(),
            });
        }
        Ok(self
            .records
            .iter()
            .map(|record| record.get(key).cloned().unwrap_or(Value::Missing))
            .collect())
    }

    /// Stable sub-selection: keep records matching `predicate`, preserving
    /// relative order.
    pub fn filter<F>(&self, predicate: F) -> RecordSet
    where
        F: Fn(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        self.from_stage(records)
    }

    /// Concatenate `a`'s records followed by `b`'s, no reordering.
    pub fn concat(a: &RecordSet, b: &RecordSet) -> RecordSet {
        let mut records = a.records.clone();
        records.extend(b.records.iter().cloned());
        RecordSet {
            schema: a.schema,
            records,
            extra_merged: a.extra_merged || b.extra_merged,
        }
    }

    /// Keep the first `n` records.
    pub fn truncate(&self, n: usize) -> RecordSet {
        let records = self.records.iter().take(n).cloned().collect();
        self.from_stage(records)
    }

    /// Whether extra input has been merged into this set.
    pub fn is_extra_merged(&self) -> bool {
        self.extra_merged
    }

    pub(crate) fn mark_extra_merged(&mut self) {
        self.extra_merged = true;
    }

    /// Total size for reporting: once extra input is merged this is just the
    /// record count; before merging, the pending extra rows count too.
    pub fn total_size(&self, pending_extra: usize) -> usize {
        if self.extra_merged {
            self.len()
        } else {
            self.len() + pending_extra
        }
    }
}

/// Ordered list of soft diagnostic messages owned by a single pipeline run.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    messages: Vec<Message>,
}

impl Diagnostics {
    /// Empty diagnostics list for a fresh run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message.
    pub fn push(&mut self, message: impl Into<Message>) {
        self.messages.push(message.into());
    }

    /// Messages in emission order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether any message was emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
