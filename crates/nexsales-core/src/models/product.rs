//! Product domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing status. Independent of `stock`: a product with zero stock may
/// still be `Active`, and nothing derives one from the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    Active,
    Inactive,
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::OutOfStock => "out-of-stock",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique and stable for the lifetime of the catalog.
    pub id: String,
    pub name: String,
    /// Free-form category label.
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when adding a product. The store assigns the id and
/// both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub image: String,
    pub description: String,
}

/// Partial update merged onto an existing product. `None` = no change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl UpdateProduct {
    /// Merge this patch onto `product`. Leaves `id` and both timestamps
    /// alone; the caller owns `updated_at`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
    }
}

impl From<NewProduct> for UpdateProduct {
    fn from(input: NewProduct) -> Self {
        Self {
            name: Some(input.name),
            category: Some(input.category),
            price: Some(input.price),
            stock: Some(input.stock),
            status: Some(input.status),
            image: Some(input.image),
            description: Some(input.description),
        }
    }
}

/// Query parameters for the catalog view. Transient, never persisted.
///
/// `min_price` and `max_price` are carried but not applied by any
/// current consumer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
}
