//! Sale domain model and the metrics derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stand-in for a real period-over-period comparison.
pub const GROWTH_RATE_PLACEHOLDER: f64 = 12.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Pending => "pending",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Soft reference into the catalog; not validated.
    pub product_id: String,
    /// Denormalized copy of the product name at time of sale.
    pub product_name: String,
    pub quantity: u32,
    pub total_price: f64,
    pub customer: String,
    pub date: NaiveDate,
    pub status: SaleStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSale {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_price: f64,
    pub customer: String,
    pub date: NaiveDate,
    pub status: SaleStatus,
}

impl NewSale {
    pub fn into_sale(self, id: String) -> Sale {
        Sale {
            id,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            total_price: self.total_price,
            customer: self.customer,
            date: self.date,
            status: self.status,
        }
    }
}

/// Aggregates over completed sales. Never mutated on its own; always
/// recomputed from the full collection with [`calculate_metrics`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub average_order_value: f64,
    pub growth_rate: f64,
}

/// Compute metrics over `sales`, counting only `Completed` entries.
pub fn calculate_metrics(sales: &[Sale]) -> SalesMetrics {
    let (total_revenue, total_orders) = sales
        .iter()
        .filter(|s| s.status == SaleStatus::Completed)
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.total_price, count + 1));

    let average_order_value = if total_orders > 0 {
        total_revenue / total_orders as f64
    } else {
        0.0
    };

    SalesMetrics {
        total_revenue,
        total_orders,
        average_order_value,
        growth_rate: GROWTH_RATE_PLACEHOLDER,
    }
}
