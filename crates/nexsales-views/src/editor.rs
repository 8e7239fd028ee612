//! Product editor form: draft values as typed, and the validation that
//! runs before anything reaches the store.

use std::fmt;

use nexsales_core::models::product::{NewProduct, Product, ProductStatus};

/// Categories offered by the editor.
pub const PRODUCT_CATEGORIES: [&str; 8] = [
    "Electronics",
    "Furniture",
    "Accessories",
    "Clothing",
    "Books",
    "Toys",
    "Sports",
    "Home & Garden",
];

pub const DEFAULT_CATEGORY: &str = "Electronics";
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400";

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Per-field messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub description: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// `(field, message)` for every failing field, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("price", &self.price),
            ("stock", &self.stock),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Editor contents as typed. Numeric fields stay text until validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub status: ProductStatus,
    pub description: String,
    pub image: String,
}

impl Default for ProductDraft {
    /// Blank form for a new product.
    fn default() -> Self {
        Self {
            name: String::new(),
            category: DEFAULT_CATEGORY.into(),
            price: String::new(),
            stock: String::new(),
            status: ProductStatus::Active,
            description: String::new(),
            image: DEFAULT_PRODUCT_IMAGE.into(),
        }
    }
}

impl ProductDraft {
    /// Pre-filled form for editing `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            status: product.status,
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }

    /// Check every field and build the store input. Name and
    /// description come back trimmed.
    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Product name is required".into());
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.name = Some(format!(
                "Product name must be at least {MIN_NAME_LEN} characters"
            ));
        }

        if self.category.is_empty() {
            errors.category = Some("Category is required".into());
        } else if !PRODUCT_CATEGORIES.contains(&self.category.as_str()) {
            errors.category = Some(format!("Unknown category \"{}\"", self.category));
        }

        let price = self.price.trim();
        let parsed_price = price.parse::<f64>().ok().filter(|p| p.is_finite());
        match parsed_price {
            _ if price.is_empty() => errors.price = Some("Price is required".into()),
            Some(p) if p > 0.0 && p <= MAX_PRICE => {}
            Some(p) if p > MAX_PRICE => {
                errors.price = Some("Price must be less than 1,000,000".into());
            }
            _ => errors.price = Some("Price must be a positive number".into()),
        }

        let stock = self.stock.trim();
        let parsed_stock = stock.parse::<i64>().ok().and_then(|s| u32::try_from(s).ok());
        if stock.is_empty() {
            errors.stock = Some("Stock is required".into());
        } else if parsed_stock.is_none() {
            errors.stock = Some("Stock must be a non-negative number".into());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some("Description is required".into());
        } else if description.chars().count() < MIN_DESCRIPTION_LEN {
            errors.description = Some(format!(
                "Description must be at least {MIN_DESCRIPTION_LEN} characters"
            ));
        }

        match (parsed_price, parsed_stock) {
            (Some(price), Some(stock)) if errors.is_empty() => Ok(NewProduct {
                name: name.to_owned(),
                category: self.category.clone(),
                price,
                stock,
                status: self.status,
                image: self.image.clone(),
                description: description.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}
