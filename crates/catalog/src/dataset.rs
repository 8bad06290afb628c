//! Dataset decoding: the record collection arrives as a JSON array.

use storefront_core::{CatalogError, CatalogResult};

use crate::product::ProductRecord;

/// Decode a catalog dataset from JSON bytes.
///
/// An empty array decodes fine here; bound derivation is the gate that
/// rejects an empty catalog.
pub fn from_json_slice(bytes: &[u8]) -> CatalogResult<Vec<ProductRecord>> {
    serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::validation(format!("malformed catalog dataset: {e}")))
}

/// Decode a catalog dataset from a JSON string.
pub fn from_json_str(json: &str) -> CatalogResult<Vec<ProductRecord>> {
    from_json_slice(json.as_bytes())
}
