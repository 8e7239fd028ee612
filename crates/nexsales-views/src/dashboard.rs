//! Dashboard projections: KPI cards, the sales chart and the product
//! performance table.

use chrono::NaiveDate;
use nexsales_core::models::product::Product;
use nexsales_core::models::sale::{Sale, SalesMetrics};
use nexsales_core::repository::{ProductSource, SalesSource};
use nexsales_store::{ProductStore, SalesStore};

/// Period-over-period changes shown on the cards that have no real
/// comparison behind them.
pub const ORDERS_CHANGE: f64 = 8.3;
pub const PRODUCTS_CHANGE: f64 = 2.1;
pub const AVG_ORDER_CHANGE: f64 = -1.2;

/// Sales plotted on the chart.
pub const CHART_POINTS: usize = 7;
/// Rows in the product performance table.
pub const PERFORMANCE_ROWS: usize = 5;
const PERFORMANCE_NAME_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change < 0.0 { Trend::Down } else { Trend::Up }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    /// Percent change.
    pub change: f64,
    pub trend: Trend,
}

impl KpiCard {
    fn new(title: &'static str, value: String, change: f64) -> Self {
        Self {
            title,
            value,
            change,
            trend: Trend::from_change(change),
        }
    }
}

/// The four headline cards, in display order.
pub fn kpi_cards(metrics: &SalesMetrics, product_count: usize) -> [KpiCard; 4] {
    [
        KpiCard::new(
            "Total Revenue",
            format!("${}", format_grouped(metrics.total_revenue, 3)),
            metrics.growth_rate,
        ),
        KpiCard::new("Total Orders", metrics.total_orders.to_string(), ORDERS_CHANGE),
        KpiCard::new("Products", product_count.to_string(), PRODUCTS_CHANGE),
        KpiCard::new(
            "Avg Order Value",
            format!("${:.2}", metrics.average_order_value),
            AVG_ORDER_CHANGE,
        ),
    ]
}

/// en-US style number: comma thousands separators, rounded to at most
/// `max_fraction_digits` with trailing zeros dropped.
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if value.is_sign_negative() && nonzero {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Short axis label such as `Dec 1`.
    pub label: String,
    pub revenue: f64,
    pub orders: u32,
}

/// The first [`CHART_POINTS`] sales in store order.
pub fn sales_chart(sales: &[Sale]) -> Vec<ChartPoint> {
    sales
        .iter()
        .take(CHART_POINTS)
        .map(|s| ChartPoint {
            date: s.date,
            label: s.date.format("%b %-d").to_string(),
            revenue: s.total_price,
            orders: s.quantity,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPerformance {
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
}

/// Leading decimal digits of the id, or 1 when there are none or they
/// parse to zero.
fn id_seed(id: &str) -> u64 {
    let digits: String = id
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u64>().ok().filter(|&n| n > 0).unwrap_or(1)
}

/// Synthetic per-product figures for the first [`PERFORMANCE_ROWS`]
/// products. Stable for a given id, price and stock.
pub fn product_performance(products: &[Product]) -> Vec<ProductPerformance> {
    products
        .iter()
        .take(PERFORMANCE_ROWS)
        .map(|p| {
            let seed = u128::from(id_seed(&p.id));
            let sales = if p.stock > 50 {
                (seed * 13 % 100) as u32 + 50
            } else {
                p.stock
            };
            let multiplier = (seed * 7 % 10) as f64 + 5.0;
            ProductPerformance {
                name: p.name.chars().take(PERFORMANCE_NAME_LEN).collect(),
                sales,
                revenue: p.price * multiplier,
            }
        })
        .collect()
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub kpis: [KpiCard; 4],
    pub chart: Vec<ChartPoint>,
    pub performance: Vec<ProductPerformance>,
}

/// Dashboard page over the product and sales stores.
pub struct DashboardView<P: ProductSource, S: SalesSource> {
    products: ProductStore<P>,
    sales: SalesStore<S>,
}

impl<P: ProductSource, S: SalesSource> DashboardView<P, S> {
    pub fn new(products: ProductStore<P>, sales: SalesStore<S>) -> Self {
        Self { products, sales }
    }

    /// Fetch both collections concurrently.
    pub async fn load(&self) {
        tokio::join!(self.sales.fetch_sales(), self.products.fetch_products());
    }

    /// True while either store is fetching.
    pub fn is_loading(&self) -> bool {
        self.sales.is_loading() || self.products.is_loading()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let (metrics, chart) = self
            .sales
            .with_state(|s| (s.metrics, sales_chart(&s.sales)));
        let (count, performance) = self
            .products
            .with_state(|s| (s.products.len(), product_performance(&s.products)));

        DashboardSnapshot {
            kpis: kpi_cards(&metrics, count),
            chart,
            performance,
        }
    }
}
