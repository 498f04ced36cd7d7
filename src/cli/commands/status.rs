//! Status command implementation
//!
//! Prints the dashboard counters, system statistics and any pending
//! notifications.

use super::{load_command_config, load_store};
use crate::core::reporting::{dashboard_counters, pending_notifications, system_statistics};
use chrono::{Local, Utc};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit the statistics as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let store = load_store(&config).await?;
        let counters = dashboard_counters(&store, Local::now());
        let statistics = system_statistics(&store);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&statistics)?);
            return Ok(0);
        }

        println!("🏥 VidaPlus — visão geral");
        println!();
        println!("  Pacientes:            {}", counters.patients);
        println!("  Profissionais:        {}", counters.professionals);
        println!("  Leitos ocupados:      {}", counters.occupied_beds);
        println!("  Consultas de hoje:    {}", counters.todays_appointments);
        println!();
        println!(
            "  Ocupação geral:       {}% ({} de {} leitos)",
            statistics.occupancy_percentage,
            statistics.occupied_beds,
            statistics.total_beds
        );
        println!(
            "  Teleconsultas:        {} agendadas, {} em andamento, {} realizadas",
            statistics.scheduled_bookings,
            statistics.in_progress_bookings,
            statistics.completed_bookings
        );

        let notifications = pending_notifications(&store, Utc::now());
        if !notifications.is_empty() {
            println!();
            println!("  Avisos:");
            for notification in &notifications {
                println!("   ⚠️  {}", notification.message);
            }
        }

        Ok(0)
    }
}
