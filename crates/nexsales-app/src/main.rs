//! NexSales — scripted dashboard session.
//!
//! Restores persisted state, signs in if needed, loads the dashboard and
//! prints it, and optionally writes the sales CSV.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use nexsales_store::{FileStorage, MockCatalog};
use nexsales_views::{AppContext, DashboardView, Route, SalesView, ToastHost, actions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "nexsales", about = "NexSales dashboard session runner")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the directory for persisted session and settings
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Login email (defaults to the demo account)
    #[arg(long)]
    email: Option<String>,

    /// Login password (defaults to the demo account)
    #[arg(long)]
    password: Option<String>,

    /// Filter the sales table by customer or product
    #[arg(long)]
    search: Option<String>,

    /// Write the sales CSV into this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// Flip light/dark before exiting
    #[arg(long)]
    toggle_theme: bool,

    /// Sign out at the end of the session
    #[arg(long)]
    logout: bool,

    /// Log as JSON lines
    #[arg(long)]
    json: bool,
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(
        config
            .log_filter
            .parse()
            .with_context(|| format!("bad log filter {:?}", config.log_filter))?,
    );
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    config.log_json |= args.json;
    init_tracing(&config)?;

    info!(data_dir = %config.data_dir.display(), "Starting NexSales session");

    let storage = FileStorage::open(&config.data_dir).context("failed to open data directory")?;
    let ctx = AppContext::with_mock(
        Arc::new(storage),
        config.auth_config(),
        MockCatalog::new(config.catalog_config()),
    );
    let toasts = ToastHost::follow(ctx.notifications.clone());

    if ctx.route(Route::Dashboard.path()) == Route::Login {
        let email = args.email.unwrap_or_else(|| config.auth.demo_email.clone());
        let password = args
            .password
            .unwrap_or_else(|| config.auth.demo_password.clone());
        let signed_in = actions::sign_in(&ctx, &email, &password).await;
        print_toasts(&toasts);
        signed_in.context("sign-in failed")?;
    } else if let Some(user) = ctx.auth.user() {
        info!(email = %user.email, "Resumed persisted session");
    }

    let dashboard = DashboardView::new(ctx.products.clone(), ctx.sales.clone());
    dashboard.load().await;
    let snapshot = dashboard.snapshot();

    println!("Dashboard Overview");
    for card in &snapshot.kpis {
        println!("  {:<16} {:>14}  {:+.1}%", card.title, card.value, card.change);
    }
    println!("Sales");
    for point in &snapshot.chart {
        println!("  {:<7} ${:>10.2}  {} orders", point.label, point.revenue, point.orders);
    }
    println!("Top products");
    for row in &snapshot.performance {
        println!("  {:<15} {:>4} sold  ${:>10.2}", row.name, row.sales, row.revenue);
    }

    let mut sales = SalesView::new(ctx.sales.clone());
    if let Some(term) = args.search {
        sales.set_search(term);
        for sale in sales.rows() {
            println!(
                "  {}  {:<24} {:<14} {:>3}  ${:>9.2}  {}",
                sale.date,
                sale.product_name,
                sale.customer,
                sale.quantity,
                sale.total_price,
                sale.status.as_str()
            );
        }
    }
    let summary = sales.summary();
    println!(
        "Total Transactions: {}  Total Revenue: {}",
        summary.transactions,
        summary.revenue_label()
    );

    if let Some(dir) = args.export {
        let export = sales.export(Utc::now().date_naive());
        let path = export.write_to(&dir).context("export failed")?;
        println!("Exported {}", path.display());
    }

    if args.toggle_theme {
        actions::toggle_theme(&ctx);
    }
    print_toasts(&toasts);

    if args.logout {
        ctx.auth.logout();
        info!(route = ctx.route("/").path(), "Signed out");
    }

    info!("NexSales session finished");
    Ok(())
}

fn print_toasts(toasts: &ToastHost) {
    for toast in toasts.visible() {
        println!("[{}] {}", toast.kind.as_str(), toast.message);
    }
}
