//! Dashboard counters and system statistics
//!
//! Pure read-only projections over the record store. Callers pass "now"
//! explicitly so the calendar-day comparison is testable.

use crate::core::store::RecordStore;
use crate::domain::{BedStatus, BookingStatus};
use chrono::{DateTime, Local};
use serde::Serialize;

/// The four headline dashboard numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCounters {
    /// Total registered patients
    pub patients: usize,
    /// Total registered professionals
    pub professionals: usize,
    /// Beds currently occupied
    pub occupied_beds: usize,
    /// Appointments falling on today's calendar day (local time)
    pub todays_appointments: usize,
}

/// Aggregate counts across all collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatistics {
    pub total_patients: usize,
    pub total_professionals: usize,
    pub total_beds: usize,
    pub occupied_beds: usize,
    pub available_beds: usize,
    pub maintenance_beds: usize,
    pub scheduled_bookings: usize,
    pub in_progress_bookings: usize,
    pub completed_bookings: usize,
    /// `round(occupied / total × 100)`; 0 when there are no beds
    pub occupancy_percentage: u32,
}

/// Rounded occupancy percentage, guarded against an empty bed set
pub(crate) fn occupancy_percentage(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((occupied as f64 / total as f64) * 100.0).round() as u32
}

/// Computes the dashboard counters
///
/// `todays_appointments` compares each appointment's date to `now` at
/// calendar-day granularity in the local time zone.
pub fn dashboard_counters(store: &RecordStore, now: DateTime<Local>) -> DashboardCounters {
    let today = now.date_naive();
    let todays_appointments = store
        .appointments()
        .iter()
        .filter(|a| a.scheduled_for.with_timezone(&Local).date_naive() == today)
        .count();

    DashboardCounters {
        patients: store.patients().len(),
        professionals: store.professionals().len(),
        occupied_beds: store
            .beds()
            .iter()
            .filter(|b| b.status == BedStatus::Occupied)
            .count(),
        todays_appointments,
    }
}

/// Computes system-wide statistics
pub fn system_statistics(store: &RecordStore) -> SystemStatistics {
    let beds = store.beds();
    let occupied = beds.iter().filter(|b| b.status == BedStatus::Occupied).count();
    let available = beds
        .iter()
        .filter(|b| b.status == BedStatus::Available)
        .count();
    let maintenance = beds
        .iter()
        .filter(|b| b.status == BedStatus::Maintenance)
        .count();

    let bookings = store.bookings();
    let count_status =
        |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

    SystemStatistics {
        total_patients: store.patients().len(),
        total_professionals: store.professionals().len(),
        total_beds: beds.len(),
        occupied_beds: occupied,
        available_beds: available,
        maintenance_beds: maintenance,
        scheduled_bookings: count_status(BookingStatus::Scheduled),
        in_progress_bookings: count_status(BookingStatus::InProgress),
        completed_bookings: count_status(BookingStatus::Completed),
        occupancy_percentage: occupancy_percentage(occupied, beds.len()),
    }
}
