//! Pending-notification checks
//!
//! Three independent checks, evaluated in a fixed order: upcoming
//! consultations, beds under maintenance, high occupancy. Designed to be
//! polled (the background runtime scans on an interval); nothing is
//! pushed.

use crate::core::reporting::dashboard::occupancy_percentage;
use crate::core::store::RecordStore;
use crate::domain::{BedStatus, BookingStatus};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// Occupancy above this percentage raises a notification
const HIGH_OCCUPANCY_THRESHOLD: u32 = 90;

/// Kind of a pending notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Scheduled consultations within the next two hours
    UpcomingConsultations,
    /// Beds currently under maintenance
    BedsUnderMaintenance,
    /// Overall occupancy above the threshold
    HighOccupancy,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::UpcomingConsultations => "consulta",
            NotificationKind::BedsUnderMaintenance => "manutencao",
            NotificationKind::HighOccupancy => "ocupacao",
        };
        write!(f, "{label}")
    }
}

/// One pending notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Consultation/bed count, or the occupancy percentage
    pub count: u32,
}

/// Evaluates the pending notifications as of `now`
///
/// Order is fixed: consultations, then maintenance, then occupancy. A
/// check that comes up empty contributes nothing.
pub fn pending_notifications(store: &RecordStore, now: DateTime<Utc>) -> Vec<Notification> {
    let mut notifications = Vec::new();

    let horizon = now + Duration::hours(2);
    let upcoming = store
        .bookings()
        .iter()
        .filter(|b| {
            b.status == BookingStatus::Scheduled
                && b.scheduled_for >= now
                && b.scheduled_for <= horizon
        })
        .count() as u32;
    if upcoming > 0 {
        notifications.push(Notification {
            kind: NotificationKind::UpcomingConsultations,
            message: format!("Você tem {upcoming} consulta(s) nas próximas 2 horas"),
            count: upcoming,
        });
    }

    let maintenance = store
        .beds()
        .iter()
        .filter(|b| b.status == BedStatus::Maintenance)
        .count() as u32;
    if maintenance > 0 {
        notifications.push(Notification {
            kind: NotificationKind::BedsUnderMaintenance,
            message: format!("{maintenance} leito(s) em manutenção"),
            count: maintenance,
        });
    }

    let occupied = store
        .beds()
        .iter()
        .filter(|b| b.status == BedStatus::Occupied)
        .count();
    let occupancy = occupancy_percentage(occupied, store.beds().len());
    if occupancy > HIGH_OCCUPANCY_THRESHOLD {
        notifications.push(Notification {
            kind: NotificationKind::HighOccupancy,
            message: format!("Ocupação alta: {occupancy}%"),
            count: occupancy,
        });
    }

    notifications
}
