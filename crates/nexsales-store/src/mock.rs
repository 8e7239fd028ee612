//! Mock catalog data source with simulated latency.
//!
//! The product list is generated once, deterministically, when the
//! catalog is built; every fetch hands out the same data after sleeping
//! for the configured latency.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nexsales_core::error::FetchError;
use nexsales_core::models::product::{Product, ProductStatus};
use nexsales_core::models::sale::{Sale, SaleStatus};
use nexsales_core::repository::{ProductSource, SalesSource};
use tracing::debug;

struct Template {
    name: &'static str,
    category: &'static str,
    base_price: f64,
    image: &'static str,
}

const TEMPLATES: [Template; 10] = [
    Template {
        name: "Laptop",
        category: "Electronics",
        base_price: 1299.99,
        image: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=400",
    },
    Template {
        name: "Smartphone",
        category: "Electronics",
        base_price: 999.99,
        image: "https://images.unsplash.com/photo-1592286927505-fa02e3150ec5?w=400",
    },
    Template {
        name: "Office Chair",
        category: "Furniture",
        base_price: 299.99,
        image: "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?w=400",
    },
    Template {
        name: "Desk",
        category: "Furniture",
        base_price: 499.99,
        image: "https://images.unsplash.com/photo-1518455027359-f3f8164ba6bd?w=400",
    },
    Template {
        name: "Wireless Mouse",
        category: "Accessories",
        base_price: 29.99,
        image: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400",
    },
    Template {
        name: "Mechanical Keyboard",
        category: "Accessories",
        base_price: 129.99,
        image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
    },
    Template {
        name: "Monitor",
        category: "Electronics",
        base_price: 399.99,
        image: "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=400",
    },
    Template {
        name: "Headphones",
        category: "Electronics",
        base_price: 199.99,
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
    },
    Template {
        name: "T-Shirt",
        category: "Clothing",
        base_price: 24.99,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
    },
    Template {
        name: "Jeans",
        category: "Clothing",
        base_price: 59.99,
        image: "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400",
    },
];

const STATUS_CYCLE: [ProductStatus; 5] = [
    ProductStatus::Active,
    ProductStatus::Active,
    ProductStatus::Active,
    ProductStatus::Inactive,
    ProductStatus::OutOfStock,
];

/// Configuration for the mock catalog.
#[derive(Debug, Clone)]
pub struct MockCatalogConfig {
    /// Number of generated products (default: 5000).
    pub product_count: usize,
    /// Simulated product fetch latency (default: 800 ms).
    pub products_latency: Duration,
    /// Simulated sales fetch latency (default: 600 ms).
    pub sales_latency: Duration,
    /// Make every product fetch fail.
    pub fail_products: bool,
    /// Make every sales fetch fail.
    pub fail_sales: bool,
}

impl Default for MockCatalogConfig {
    fn default() -> Self {
        Self {
            product_count: 5000,
            products_latency: Duration::from_millis(800),
            sales_latency: Duration::from_millis(600),
            fail_products: false,
            fail_sales: false,
        }
    }
}

/// Mock backend serving both products and sales.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Arc<Vec<Product>>,
    sales: Arc<Vec<Sale>>,
    config: MockCatalogConfig,
}

impl MockCatalog {
    pub fn new(config: MockCatalogConfig) -> Self {
        Self {
            products: Arc::new(generate_products(config.product_count)),
            sales: Arc::new(mock_sales()),
            config,
        }
    }

    pub fn config(&self) -> &MockCatalogConfig {
        &self.config
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(MockCatalogConfig::default())
    }
}

impl ProductSource for MockCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, FetchError> {
        tokio::time::sleep(self.config.products_latency).await;
        if self.config.fail_products {
            return Err(FetchError::ProductsUnavailable);
        }
        debug!(count = self.products.len(), "Serving mock products");
        Ok(self.products.as_ref().clone())
    }
}

impl SalesSource for MockCatalog {
    async fn load_sales(&self) -> Result<Vec<Sale>, FetchError> {
        tokio::time::sleep(self.config.sales_latency).await;
        if self.config.fail_sales {
            return Err(FetchError::SalesUnavailable);
        }
        debug!(count = self.sales.len(), "Serving mock sales");
        Ok(self.sales.as_ref().clone())
    }
}

fn utc_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Deterministically generate `count` products cycling over the base
/// templates. Price, status, stock and timestamps vary by index only.
pub fn generate_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let template = &TEMPLATES[i % TEMPLATES.len()];
            let variation = i / TEMPLATES.len();
            let status = STATUS_CYCLE[i % STATUS_CYCLE.len()];

            let name = if variation > 0 {
                format!("{} v{variation}", template.name)
            } else {
                template.name.to_owned()
            };
            let price = ((template.base_price + variation as f64 * 10.0) * 100.0).round() / 100.0;
            let stock = match status {
                ProductStatus::OutOfStock => 0,
                _ => ((i * 37 + 11) % 200) as u32 + 1,
            };

            Product {
                id: (i + 1).to_string(),
                name,
                category: template.category.to_owned(),
                price,
                stock,
                status,
                image: template.image.to_owned(),
                description: format!(
                    "High-quality {} with excellent features",
                    template.name.to_lowercase()
                ),
                created_at: utc_day(2024, (i * 7 % 12) as u32 + 1, (i * 13 % 28) as u32 + 1),
                updated_at: utc_day(2024, 12, (i % 9) as u32 + 1),
            }
        })
        .collect()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed transaction list.
pub fn mock_sales() -> Vec<Sale> {
    vec![
        Sale {
            id: "1".into(),
            product_id: "1".into(),
            product_name: "Laptop Dell XPS 15".into(),
            quantity: 2,
            total_price: 2599.98,
            customer: "John Doe".into(),
            date: day(2024, 12, 1),
            status: SaleStatus::Completed,
        },
        Sale {
            id: "2".into(),
            product_id: "2".into(),
            product_name: "iPhone 15 Pro".into(),
            quantity: 5,
            total_price: 4999.95,
            customer: "Jane Smith".into(),
            date: day(2024, 12, 2),
            status: SaleStatus::Completed,
        },
        Sale {
            id: "3".into(),
            product_id: "3".into(),
            product_name: "Office Chair Ergonomic".into(),
            quantity: 10,
            total_price: 2999.90,
            customer: "ABC Company".into(),
            date: day(2024, 12, 3),
            status: SaleStatus::Pending,
        },
        Sale {
            id: "4".into(),
            product_id: "5".into(),
            product_name: "Mechanical Keyboard".into(),
            quantity: 3,
            total_price: 389.97,
            customer: "Tech Store".into(),
            date: day(2024, 12, 4),
            status: SaleStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_products(50), generate_products(50));
    }

    #[test]
    fn templates_cycle_with_variations() {
        let products = generate_products(5000);
        assert_eq!(products.len(), 5000);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[4].name, "Wireless Mouse");
        assert_eq!(products[10].name, "Laptop v1");
        assert_eq!(products[10].price, 1309.99);
        assert_eq!(products[4999].name, "Jeans v499");

        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 5000);
    }

    #[test]
    fn out_of_stock_products_have_zero_stock() {
        for p in generate_products(100) {
            match p.status {
                ProductStatus::OutOfStock => assert_eq!(p.stock, 0),
                _ => assert!((1..=200).contains(&p.stock)),
            }
        }
    }

    #[test]
    fn fixed_sales_have_one_pending() {
        let sales = mock_sales();
        assert_eq!(sales.len(), 4);
        let pending = sales
            .iter()
            .filter(|s| s.status == SaleStatus::Pending)
            .count();
        assert_eq!(pending, 1);
    }
}
