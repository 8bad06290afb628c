//! Product records: the fixed, read-only collection the engine filters.

use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// A single product in the browsable catalog.
///
/// Records arrive as an ordered sequence before the session starts and are
/// read-only for the session lifetime; the engine never mutates them.
/// `image_url` and `description` are display strings carried through
/// untouched; only `category` and `price` participate in filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Non-negative by the supplier's contract; the engine does not police it.
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
