/// Seller identifier as found in source tables.
/// Example: `584221`
pub type SellerId = i64;
/// Product identifier as found in source tables.
/// Example: `48812733`
pub type ProductId = i64;
/// Category identifier used by Source-B tables.
/// Examples: `1`, `5`, `10`
pub type CategoryId = i64;
/// Cluster label used by Source-B tables.
/// Examples: `Electronics`, `FMCG`, `Lifestyle`, `Fashion`
pub type ClusterName = String;
/// Diagnostic message text surfaced to the caller.
/// Example: `Local or Offshore only products. Not shuffling.`
pub type Message = String;
/// Raw, unvalidated user token (category ids, pasted input fields).
/// Examples: `5`, ` 12 `, `abc`
pub type RawToken = String;
