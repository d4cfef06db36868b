use serde::{Deserialize, Serialize};

use crate::constants::{source_a, source_b};
use crate::data::Value;

/// Logical column keys shared by both schema variants.
///
/// Each variant of [`SchemaMapping`] declares which of these keys exist and
/// which physical header each one maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKey {
    /// Seller identifier.
    SellerId,
    /// Product identifier.
    ProductId,
    /// Current price.
    Price,
    /// Pre-discount price (Source-A only).
    OldPrice,
    /// Average daily orders.
    Ado,
    /// Stock quantity (Source-A only).
    Stock,
    /// Product rating.
    Rating,
    /// Discount fraction (Source-B only).
    Discount,
    /// Category identifier (Source-B only).
    CategoryId,
    /// Cluster label (Source-B only).
    Cluster,
    /// Local/offshore seller classification.
    SellerType,
}

impl ColumnKey {
    /// Logical name used in diagnostics and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::SellerId => "seller_id",
            ColumnKey::ProductId => "product_id",
            ColumnKey::Price => "price",
            ColumnKey::OldPrice => "old_price",
            ColumnKey::Ado => "ado",
            ColumnKey::Stock => "stock",
            ColumnKey::Rating => "rating",
            ColumnKey::Discount => "discount",
            ColumnKey::CategoryId => "cat_id",
            ColumnKey::Cluster => "cluster",
            ColumnKey::SellerType => "seller_type",
        }
    }
}

/// The two fixed source table variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Stock-based export tables (`Seller ID`, `Stock`, boolean offshore flag).
    SourceA,
    /// Category/cluster product-bank tables (`seller_id`, `category_id`,
    /// string seller type).
    SourceB,
}

const SOURCE_A_KEYS: &[ColumnKey] = &[
    ColumnKey::SellerId,
    ColumnKey::ProductId,
    ColumnKey::Price,
    ColumnKey::OldPrice,
    ColumnKey::Ado,
    ColumnKey::Stock,
    ColumnKey::Rating,
    ColumnKey::SellerType,
];

const SOURCE_B_KEYS: &[ColumnKey] = &[
    ColumnKey::SellerId,
    ColumnKey::ProductId,
    ColumnKey::Price,
    ColumnKey::Ado,
    ColumnKey::Discount,
    ColumnKey::CategoryId,
    ColumnKey::Cluster,
    ColumnKey::Rating,
    ColumnKey::SellerType,
];

/// Immutable logical-to-physical column mapping for one source variant,
/// including the sentinel values that classify a seller as local or offshore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMapping {
    kind: SourceKind,
}

impl SchemaMapping {
    /// Mapping for the stock-based Source-A variant.
    pub fn source_a() -> Self {
        Self {
            kind: SourceKind::SourceA,
        }
    }

    /// Mapping for the category/cluster Source-B variant.
    pub fn source_b() -> Self {
        Self {
            kind: SourceKind::SourceB,
        }
    }

    /// Mapping for `kind`.
    pub fn for_kind(kind: SourceKind) -> Self {
        Self { kind }
    }

    /// Source variant this mapping describes.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Logical keys this variant declares, in physical column order.
    pub fn keys(&self) -> &'static [ColumnKey] {
        match self.kind {
            SourceKind::SourceA => SOURCE_A_KEYS,
            SourceKind::SourceB => SOURCE_B_KEYS,
        }
    }

    /// Physical header for `key`, if the variant declares it.
    pub fn physical(&self, key: ColumnKey) -> Option<&'static str> {
        match self.kind {
            SourceKind::SourceA => match key {
                ColumnKey::SellerId => Some(source_a::SELLER_ID),
                ColumnKey::ProductId => Some(source_a::PRODUCT_ID),
                ColumnKey::Price => Some(source_a::PRICE),
                ColumnKey::OldPrice => Some(source_a::OLD_PRICE),
                ColumnKey::Ado => Some(source_a::ADO),
                ColumnKey::Stock => Some(source_a::STOCK),
                ColumnKey::Rating => Some(source_a::RATING),
                ColumnKey::SellerType => Some(source_a::SELLER_TYPE),
                _ => None,
            },
            SourceKind::SourceB => match key {
                ColumnKey::SellerId => Some(source_b::SELLER_ID),
                ColumnKey::ProductId => Some(source_b::PRODUCT_ID),
                ColumnKey::Price => Some(source_b::PRICE),
                ColumnKey::Ado => Some(source_b::ADO),
                ColumnKey::Discount => Some(source_b::DISCOUNT),
                ColumnKey::CategoryId => Some(source_b::CATEGORY_ID),
                ColumnKey::Cluster => Some(source_b::CLUSTER),
                ColumnKey::Rating => Some(source_b::RATING),
                ColumnKey::SellerType => Some(source_b::SELLER_TYPE),
                _ => None,
            },
        }
    }

    /// Whether `key` exists in this variant.
    pub fn declares(&self, key: ColumnKey) -> bool {
        self.physical(key).is_some()
    }

    /// Seller-type value marking a local seller.
    pub fn local_sentinel(&self) -> Value {
        match self.kind {
            SourceKind::SourceA => Value::Bool(source_a::LOCAL_SENTINEL),
            SourceKind::SourceB => Value::Str(source_b::LOCAL_SENTINEL.to_string()),
        }
    }

    /// Seller-type value marking an offshore seller.
    pub fn offshore_sentinel(&self) -> Value {
        match self.kind {
            SourceKind::SourceA => Value::Bool(source_a::OFFSHORE_SENTINEL),
            SourceKind::SourceB => Value::Str(source_b::OFFSHORE_SENTINEL.to_string()),
        }
    }

    /// Whether the stock-exclusion stage applies (Source-A). Source-B uses
    /// the category/cluster stage instead.
    pub fn uses_stock_stage(&self) -> bool {
        matches!(self.kind, SourceKind::SourceA)
    }
}
