// src/domain/line_item.rs

use serde::Deserialize;

/// Variant data carried on a line item. Everything here is optional in
/// practice: old orders reference variants that have since been deleted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
}

/// A purchased product line referenced by a return, claim or swap event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItemRef {
    pub title: String,
    pub quantity: u32,
    /// Unit price in minor currency units (cents). Display math derives
    /// from this but never changes it.
    pub unit_price: i64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub variant: Option<Variant>,
}

impl LineItemRef {
    /// SKU shown under the title; `-` when the variant has none.
    pub fn sku_label(&self) -> &str {
        self.variant
            .as_ref()
            .and_then(|v| v.sku.as_deref())
            .unwrap_or("-")
    }

    /// Product the summary should link to, when the variant still
    /// resolves one.
    pub fn product_id(&self) -> Option<&str> {
        self.variant.as_ref().and_then(|v| v.product_id.as_deref())
    }
}
