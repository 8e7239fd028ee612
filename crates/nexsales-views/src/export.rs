//! CSV export of the sales table.
//!
//! Every data cell is wrapped in double quotes and nothing inside is
//! escaped, so a value containing `"` produces a malformed row. The
//! header row is written bare.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use nexsales_core::models::sale::Sale;
use tracing::info;

use crate::error::ViewError;

pub const CSV_HEADERS: [&str; 6] = [
    "Date",
    "Product",
    "Customer",
    "Quantity",
    "Total Price",
    "Status",
];

pub const CSV_MIME_TYPE: &str = "text/csv";

fn csv_row(sale: &Sale) -> String {
    let cells = [
        sale.date.to_string(),
        sale.product_name.clone(),
        sale.customer.clone(),
        sale.quantity.to_string(),
        format!("{:.2}", sale.total_price),
        sale.status.as_str().to_owned(),
    ];
    cells
        .iter()
        .map(|cell| format!("\"{cell}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header line then one line per sale, joined with `\n` and no
/// trailing newline.
pub fn sales_csv(sales: &[Sale]) -> String {
    std::iter::once(CSV_HEADERS.join(","))
        .chain(sales.iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `sales-YYYY-MM-DD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("sales-{}.csv", date.format("%Y-%m-%d"))
}

/// A generated download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

pub fn export_sales(sales: &[Sale], today: NaiveDate) -> CsvExport {
    CsvExport {
        filename: export_filename(today),
        mime_type: CSV_MIME_TYPE,
        content: sales_csv(sales),
    }
}

impl CsvExport {
    /// Write the file into `dir`, replacing any earlier export from the
    /// same day. Returns the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ViewError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        info!(path = %path.display(), bytes = self.content.len(), "Wrote sales export");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexsales_core::models::sale::SaleStatus;

    fn laptop_sale() -> Sale {
        Sale {
            id: "1".into(),
            product_id: "1".into(),
            product_name: "Laptop".into(),
            quantity: 1,
            total_price: 10.5,
            customer: "A,B".into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            status: SaleStatus::Completed,
        }
    }

    #[test]
    fn row_quotes_every_cell_without_escaping() {
        let csv = sales_csv(&[laptop_sale()]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], "Date,Product,Customer,Quantity,Total Price,Status");
        assert_eq!(
            lines[1],
            r#""2024-12-01","Laptop","A,B","1","10.50","completed""#
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn embedded_quotes_pass_through() {
        let mut sale = laptop_sale();
        sale.customer = r#"The "Best" Co"#.into();
        let csv = sales_csv(&[sale]);
        assert!(csv.contains(r#""The "Best" Co""#));
    }

    #[test]
    fn empty_view_is_header_only() {
        assert_eq!(sales_csv(&[]), CSV_HEADERS.join(","));
    }

    #[test]
    fn filename_carries_iso_date() {
        let export = export_sales(&[], NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(export.filename, "sales-2025-03-07.csv");
        assert_eq!(export.mime_type, "text/csv");
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = export_sales(&[laptop_sale()], NaiveDate::from_ymd_opt(2024, 12, 9).unwrap());

        let path = export.write_to(&dir.path().join("out")).unwrap();

        assert_eq!(path.file_name().unwrap(), "sales-2024-12-09.csv");
        assert_eq!(fs::read_to_string(path).unwrap(), export.content);
    }
}
