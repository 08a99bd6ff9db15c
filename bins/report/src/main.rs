//! Olooh monthly report exporter
//!
//! Loads a record snapshot, computes the summary of one month and writes the
//! accounting, sales and expense CSV exports.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use olooh_core::aggregation::Aggregator;
use olooh_core::dashboard::DashboardService;
use olooh_core::period::{Period, parse_timezone};
use olooh_core::reports::{ExportKind, ReportFormatter, write_csv_file};
use olooh_shared::config::ReportConfig;
use olooh_shared::{AppConfig, AppResult};
use olooh_store::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olooh=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!(code = err.error_code(), error = %err, "Report failed");
        return Err(err.into());
    }
    Ok(())
}

async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    let timezone = parse_timezone(&config.ledger.timezone)?;
    let period = resolve_period(&config.report, timezone)?;
    let aggregator = Aggregator::from_config(&config.ledger)?;
    let decimals = config.ledger.display_decimals;

    let store = Arc::new(InMemoryStore::from_snapshot_file(
        &config.store.snapshot_path,
    )?);
    let dashboard = DashboardService::new(store, aggregator, config.report.top_n);
    let report = dashboard
        .snapshot(&period, config.report.location.as_deref())
        .await?;

    let summary = &report.summary;
    info!(
        period = %period,
        location = summary.location.as_deref().unwrap_or("all"),
        revenue = %summary.revenue.display,
        expenses = %summary.expenses.display,
        margin = %summary.margin.display,
        gain_days = summary.stats.gain_days,
        loss_days = summary.stats.loss_days,
        top_product = %summary.top_product.key,
        "Monthly summary"
    );

    let formatter = ReportFormatter::new(dashboard.aggregator(), decimals);
    for kind in ExportKind::ALL {
        let table = match kind {
            ExportKind::Accounting => {
                formatter.accounting_table(&report.sales, &report.expenses, summary)
            }
            ExportKind::Sales => formatter.sales_register(&report.sales),
            ExportKind::Expenses => formatter.expense_register(&report.expenses),
        };
        let path = config.report.output_dir.join(kind.file_name(&period));
        write_csv_file(&path, &table)?;
        info!(path = %path.display(), rows = table.len(), "Export written");
    }

    Ok(())
}

/// Configured month, or the current one in the business timezone.
fn resolve_period(report: &ReportConfig, timezone: chrono_tz::Tz) -> AppResult<Period> {
    let current = Period::containing(Utc::now(), timezone);
    let year = report.year.unwrap_or_else(|| current.year());
    let month = report.month.unwrap_or_else(|| current.month());
    Ok(Period::in_timezone(year, month, timezone)?)
}
