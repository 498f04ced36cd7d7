//! Report command implementation
//!
//! Occupancy and consultations reports, printed as text or JSON.

use super::{load_command_config, load_store};
use crate::core::reporting::{consultations_report, occupancy_report};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use clap::{Args, Subcommand};

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub kind: ReportKind,
}

/// Report to generate
#[derive(Subcommand, Debug)]
pub enum ReportKind {
    /// Bed occupancy, overall and per sector
    Occupancy {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Telemedicine consultations in a date range
    Consultations {
        /// Range start, inclusive (YYYY-MM-DD, defaults to 30 days ago)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Range end, inclusive (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl ReportArgs {
    /// Execute the report command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let store = load_store(&config).await?;

        match &self.kind {
            ReportKind::Occupancy { json } => {
                let report = occupancy_report(&store);
                if *json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    return Ok(0);
                }
                println!("🛏️  Relatório de ocupação de leitos");
                println!();
                println!(
                    "  Geral: {}% ({} ocupados, {} livres, {} em manutenção)",
                    report.occupancy_percentage,
                    report.occupied_beds,
                    report.available_beds,
                    report.maintenance_beds
                );
                println!();
                for (sector, occupancy) in &report.per_sector {
                    println!(
                        "  {sector}: {}% ({} de {} leitos ocupados)",
                        occupancy.occupancy_percentage, occupancy.occupied, occupancy.total
                    );
                }
            }
            ReportKind::Consultations { from, to, json } => {
                let (start, end) = resolve_range(*from, *to, Utc::now())?;
                let report = consultations_report(&store, start, end);
                if *json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    return Ok(0);
                }
                println!("📋 Relatório de teleconsultas");
                println!(
                    "  Período: {} a {}",
                    start.format("%d/%m/%Y"),
                    end.format("%d/%m/%Y")
                );
                println!();
                println!("  Total: {}", report.total);
                println!(
                    "  Por status: {} agendadas, {} em andamento, {} realizadas",
                    report.by_status.scheduled,
                    report.by_status.in_progress,
                    report.by_status.completed
                );
                for (kind, count) in &report.by_kind {
                    println!("  {kind}: {count}");
                }
                if !report.by_professional.is_empty() {
                    println!();
                    println!("  Por profissional:");
                    for (name, count) in &report.by_professional {
                        println!("    {name}: {count}");
                    }
                }
            }
        }

        Ok(0)
    }
}

/// Expands optional calendar dates into an inclusive UTC range
///
/// The start lands at 00:00:00 of its day and the end at 23:59:59, so a
/// single-day range covers the full day.
fn resolve_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let end_date = to.unwrap_or_else(|| now.date_naive());
    let start_date = from.unwrap_or_else(|| (now - Duration::days(30)).date_naive());
    if start_date > end_date {
        anyhow::bail!("range start {start_date} is after range end {end_date}");
    }

    let start = Utc.from_utc_datetime(
        &start_date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid range start"))?,
    );
    let end = Utc.from_utc_datetime(
        &end_date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| anyhow::anyhow!("invalid range end"))?,
    );
    Ok((start, end))
}
