//! Sales table derivation: search, status filter, sort and summary.

use std::cmp::Ordering;

use chrono::NaiveDate;
use nexsales_core::models::sale::{Sale, SaleStatus};
use nexsales_core::repository::{PaginatedResult, Pagination, SalesSource};
use nexsales_store::SalesStore;

use crate::export::{CsvExport, export_sales};
use crate::paging::paginate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Date,
    Customer,
    TotalPrice,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column. Starts at newest-first by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column header click: the same field flips direction, a new field
    /// starts ascending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Ordering of two sales under this sort. Descending reverses the
    /// comparison rather than the output so ties keep input order.
    pub fn compare(&self, a: &Sale, b: &Sale) -> Ordering {
        let ord = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Customer => locale_compare(&a.customer, &b.customer),
            SortField::TotalPrice => a.total_price.total_cmp(&b.total_price),
            SortField::Status => locale_compare(a.status.as_str(), b.status.as_str()),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Case-insensitive string order with lowercase ahead of uppercase when
/// two strings differ only by case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Local parameters of the sales table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesQuery {
    /// Matched case-insensitively against customer or product name.
    pub search: String,
    pub status: Option<SaleStatus>,
    pub sort: SortState,
}

pub fn sale_matches(sale: &Sale, query: &SalesQuery) -> bool {
    let matches_search = query.search.is_empty() || {
        let term = query.search.to_lowercase();
        sale.customer.to_lowercase().contains(&term)
            || sale.product_name.to_lowercase().contains(&term)
    };
    let matches_status = query.status.is_none_or(|status| sale.status == status);
    matches_search && matches_status
}

/// Stable sort in place.
pub fn sort_sales(sales: &mut [Sale], sort: &SortState) {
    sales.sort_by(|a, b| sort.compare(a, b));
}

/// Filter then sort a copy of `sales`. The input is never reordered.
pub fn derive_sales(sales: &[Sale], query: &SalesQuery) -> Vec<Sale> {
    let mut rows: Vec<Sale> = sales
        .iter()
        .filter(|s| sale_matches(s, query))
        .cloned()
        .collect();
    sort_sales(&mut rows, &query.sort);
    rows
}

/// Footer totals of the table. Unlike the KPI metrics this counts every
/// row regardless of status.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesSummary {
    pub transactions: usize,
    pub revenue: f64,
}

impl SalesSummary {
    pub fn of(rows: &[Sale]) -> Self {
        Self {
            transactions: rows.len(),
            revenue: rows.iter().map(|s| s.total_price).sum(),
        }
    }

    /// `$` and two decimals.
    pub fn revenue_label(&self) -> String {
        format!("${:.2}", self.revenue)
    }
}

/// State of the sales page.
pub struct SalesView<S: SalesSource> {
    store: SalesStore<S>,
    query: SalesQuery,
}

impl<S: SalesSource> SalesView<S> {
    pub fn new(store: SalesStore<S>) -> Self {
        Self {
            store,
            query: SalesQuery::default(),
        }
    }

    pub async fn load(&self) {
        self.store.fetch_sales().await;
    }

    pub fn store(&self) -> &SalesStore<S> {
        &self.store
    }

    pub fn query(&self) -> &SalesQuery {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn set_status(&mut self, status: Option<SaleStatus>) {
        self.query.status = status;
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.query.sort.select(field);
    }

    pub fn rows(&self) -> Vec<Sale> {
        self.store.with_state(|s| derive_sales(&s.sales, &self.query))
    }

    pub fn page(&self, page: &Pagination) -> PaginatedResult<Sale> {
        paginate(&self.rows(), page)
    }

    pub fn summary(&self) -> SalesSummary {
        SalesSummary::of(&self.rows())
    }

    /// CSV of exactly the rows on screen.
    pub fn export(&self, today: NaiveDate) -> CsvExport {
        export_sales(&self.rows(), today)
    }

    pub fn is_initial_load(&self) -> bool {
        self.store.with_state(|s| s.loading && s.sales.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: &str, date: (i32, u32, u32), total: f64, customer: &str) -> Sale {
        Sale {
            id: id.into(),
            product_id: "1".into(),
            product_name: "Laptop".into(),
            quantity: 1,
            total_price: total,
            customer: customer.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: SaleStatus::Completed,
        }
    }

    fn ids(rows: &[Sale]) -> Vec<&str> {
        rows.iter().map(|s| s.id.as_str()).collect()
    }

    fn three() -> Vec<Sale> {
        vec![
            sale("a", (2024, 12, 1), 100.0, "x"),
            sale("b", (2024, 12, 3), 50.0, "y"),
            sale("c", (2024, 12, 2), 75.0, "z"),
        ]
    }

    #[test]
    fn date_ascending_is_chronological() {
        let query = SalesQuery {
            sort: SortState::new(SortField::Date, SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&derive_sales(&three(), &query)), ["a", "c", "b"]);
    }

    #[test]
    fn total_price_descending() {
        let query = SalesQuery {
            sort: SortState::new(SortField::TotalPrice, SortDirection::Desc),
            ..Default::default()
        };
        let rows = derive_sales(&three(), &query);
        let totals: Vec<f64> = rows.iter().map(|s| s.total_price).collect();
        assert_eq!(totals, [100.0, 75.0, 50.0]);
    }

    #[test]
    fn default_sort_is_newest_first() {
        assert_eq!(
            ids(&derive_sales(&three(), &SalesQuery::default())),
            ["b", "c", "a"]
        );
    }

    #[test]
    fn selecting_toggles_or_resets() {
        let mut sort = SortState::default();
        sort.select(SortField::Date);
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.select(SortField::Date);
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.select(SortField::Customer);
        assert_eq!(sort, SortState::new(SortField::Customer, SortDirection::Asc));
    }

    #[test]
    fn ties_keep_input_order_both_directions() {
        let sales = vec![
            sale("1", (2024, 12, 1), 10.0, "a"),
            sale("2", (2024, 12, 1), 10.0, "b"),
            sale("3", (2024, 12, 1), 10.0, "c"),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let query = SalesQuery {
                sort: SortState::new(SortField::TotalPrice, direction),
                ..Default::default()
            };
            assert_eq!(ids(&derive_sales(&sales, &query)), ["1", "2", "3"]);
        }
    }

    #[test]
    fn customer_sort_ignores_case() {
        let sales = vec![
            sale("1", (2024, 12, 1), 1.0, "bob"),
            sale("2", (2024, 12, 1), 1.0, "Alice"),
            sale("3", (2024, 12, 1), 1.0, "carol"),
        ];
        let query = SalesQuery {
            sort: SortState::new(SortField::Customer, SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&derive_sales(&sales, &query)), ["2", "1", "3"]);
    }

    #[test]
    fn locale_compare_orders_case_variants() {
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn search_hits_customer_or_product() {
        let mut sales = three();
        sales[1].product_name = "Office Chair".into();
        sales[2].customer = "ABC Company".into();

        let by_product = SalesQuery {
            search: "chair".into(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_sales(&sales, &by_product)), ["b"]);

        let by_customer = SalesQuery {
            search: "abc".into(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_sales(&sales, &by_customer)), ["c"]);
    }

    #[test]
    fn status_filter_is_exact() {
        let mut sales = three();
        sales[0].status = SaleStatus::Pending;
        let query = SalesQuery {
            status: Some(SaleStatus::Pending),
            ..Default::default()
        };
        assert_eq!(ids(&derive_sales(&sales, &query)), ["a"]);
    }

    #[test]
    fn summary_counts_every_status() {
        let mut sales = three();
        sales[0].status = SaleStatus::Cancelled;
        let summary = SalesSummary::of(&sales);
        assert_eq!(summary.transactions, 3);
        assert_eq!(summary.revenue, 225.0);
        assert_eq!(summary.revenue_label(), "$225.00");
    }
}
