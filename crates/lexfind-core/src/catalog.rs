//! Catalog: the static, ordered product list and the keyword matcher.
//!
//! The catalog is loaded once at startup from a JSON array of
//! `{productName, productFeatures, keywords}` records. Any malformed record
//! aborts the load: running with a partial catalog is never an option.

use crate::error::CatalogError;
use crate::types::{Product, SearchTermSet};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    product_name: String,
    product_features: String,
    keywords: Vec<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if record.keywords.is_empty() {
            return Err(CatalogError::EmptyKeywords { name: record.product_name });
        }
        let mut keywords = BTreeSet::new();
        for keyword in &record.keywords {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                return Err(CatalogError::BlankKeyword { name: record.product_name });
            }
            keywords.insert(keyword.to_lowercase());
        }
        Ok(Product {
            name: record.product_name,
            features: record.product_features,
            keywords,
        })
    }
}

/// Ordered, immutable product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products sharing at least one keyword with `terms`, in catalog order.
    pub fn matching(&self, terms: &SearchTermSet) -> Vec<Product> {
        match_products(&self.products, terms)
    }
}

/// Stable filter of `products` by keyword overlap with `terms`.
///
/// Boolean OR across terms, no scoring. An empty term set matches nothing.
pub fn match_products(products: &[Product], terms: &SearchTermSet) -> Vec<Product> {
    if terms.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| terms.intersects(&p.keywords))
        .cloned()
        .collect()
}
