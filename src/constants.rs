/// Constants used by pipeline sizing policy.
pub mod pipeline {
    /// Hard cap applied to collection size when no override is supplied, and
    /// the ceiling any user override is clamped to.
    pub const DEFAULT_SIZE_MAX: usize = 5000;
}

/// Physical column names and sentinel values for the Source-A schema
/// (stock-based export tables).
pub mod source_a {
    /// Physical header of the seller id column.
    pub const SELLER_ID: &str = "Seller ID";
    /// Physical header of the product id column.
    pub const PRODUCT_ID: &str = "Product ID";
    /// Physical header of the price column.
    pub const PRICE: &str = "Price";
    /// Physical header of the pre-discount price column.
    pub const OLD_PRICE: &str = "Old Price";
    /// Physical header of the average-daily-orders column.
    pub const ADO: &str = "ADO";
    /// Physical header of the stock quantity column.
    pub const STOCK: &str = "Stock";
    /// Physical header of the rating column.
    pub const RATING: &str = "Rating";
    /// Physical header of the offshore-seller flag column.
    pub const SELLER_TYPE: &str = "Offshore Seller";
    /// Seller-type value marking a local seller.
    pub const LOCAL_SENTINEL: bool = false;
    /// Seller-type value marking an offshore seller.
    pub const OFFSHORE_SENTINEL: bool = true;
}

/// Physical column names and sentinel values for the Source-B schema
/// (category/cluster product-bank tables).
pub mod source_b {
    /// Physical header of the seller id column.
    pub const SELLER_ID: &str = "seller_id";
    /// Physical header of the product id column.
    pub const PRODUCT_ID: &str = "product_id";
    /// Physical header of the price column.
    pub const PRICE: &str = "price";
    /// Physical header of the average-daily-orders column.
    pub const ADO: &str = "ado";
    /// Physical header of the discount column.
    pub const DISCOUNT: &str = "discount";
    /// Physical header of the category id column.
    pub const CATEGORY_ID: &str = "category_id";
    /// Physical header of the cluster column.
    pub const CLUSTER: &str = "cluster";
    /// Physical header of the rating column.
    pub const RATING: &str = "rating";
    /// Physical header of the seller type column.
    pub const SELLER_TYPE: &str = "seller_type";
    /// Seller-type value marking a local seller.
    pub const LOCAL_SENTINEL: &str = "Local";
    /// Seller-type value marking an offshore seller.
    pub const OFFSHORE_SENTINEL: &str = "Offshore";
}

/// Fixed diagnostic message fragments shared between stages and tests.
pub mod messages {
    /// Emitted when both ratio sides are positive but only one partition
    /// exists in the working set.
    pub const NOT_SHUFFLING: &str = "Local or Offshore only products. Not shuffling.";
    /// Emitted when every requested category token is invalid.
    pub const NO_VALID_CATEGORIES: &str = "None of the selected categories are valid.";
    /// Emitted when the stock column is missing from the working set.
    pub const STOCK_COLUMN_MISSING: &str = "Failed to find Stock column.";
    /// Emitted when a stage raises internally and the run is aborted.
    pub const GENERATION_FAILED: &str = "Failure in Collection creation";
}

/// Column headers of the three-column upload table handed downstream.
pub mod upload {
    /// Upload header for the seller id column.
    pub const SELLER_ID: &str = "sellerid";
    /// Upload header for the product id column.
    pub const PRODUCT_ID: &str = "productid";
    /// Upload header for the always-empty stock placeholder column.
    pub const STOCK: &str = "stock";
}
