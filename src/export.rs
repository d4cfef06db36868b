//! Output shaping for downstream file writers. This crate never touches the
//! filesystem; it only builds the tables the caller persists.

use serde::Serialize;

use crate::constants::upload;
use crate::data::{RecordSet, Value};
use crate::errors::PipelineError;
use crate::schema::ColumnKey;

/// One row of the three-column upload table. The stock placeholder is always
/// empty; the receiving system fills it in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadRow {
    /// Seller identifier cell.
    pub sellerid: Value,
    /// Product identifier cell.
    pub productid: Value,
    /// Always-empty stock placeholder.
    pub stock: String,
}

/// Upload table headers, in column order.
pub fn upload_headers() -> [&'static str; 3] {
    [upload::SELLER_ID, upload::PRODUCT_ID, upload::STOCK]
}

/// Shape the transformed set into upload rows (seller id, product id, empty
/// stock).
pub fn upload_rows(set: &RecordSet) -> Result<Vec<UploadRow>, PipelineError> {
    let sellers = set.column_values(ColumnKey::SellerId)?;
    let products = set.column_values(ColumnKey::ProductId)?;
    Ok(sellers
        .into_iter()
        .zip(products)
        .map(|(sellerid, productid)| UploadRow {
            sellerid,
            productid,
            stock: String::new(),
        })
        .collect())
}

/// Full pass-through table: physical headers plus every row's cells rendered
/// in schema column order, unmodified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FullTable {
    /// Physical column headers.
    pub headers: Vec<&'static str>,
    /// Row cells in header order.
    pub rows: Vec<Vec<Value>>,
}

/// Shape the full export of `set`, keeping all original columns.
pub fn full_table(set: &RecordSet) -> Result<FullTable, PipelineError> {
    let schema = set.schema();
    let keys = schema.keys();
    let headers = keys
        .iter()
        .map(|key| {
            schema.physical(*key).ok_or_else(|| PipelineError::UnknownColumn {
                column: key.as_str().to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = set
        .records()
        .iter()
        .map(|record| {
            keys.iter()
                .map(|key| record.get(*key).cloned().unwrap_or(Value::Missing))
                .collect()
        })
        .collect();

    Ok(FullTable { headers, rows })
}
