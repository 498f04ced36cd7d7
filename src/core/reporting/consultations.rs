//! Time-windowed consultations report
//!
//! Filters telemedicine bookings to an inclusive date/time range and
//! aggregates them by status, by the three fixed consultation kinds and
//! by the attending professional. Professional names come from the
//! record store at read time, keyed by identifier, so a renamed
//! professional never splits their own totals.

use crate::core::store::RecordStore;
use crate::domain::{BookingStatus, ConsultationKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Booking counts by lifecycle status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Consultations report for an inclusive time window
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationsReport {
    /// Window start, inclusive
    pub start: DateTime<Utc>,
    /// Window end, inclusive
    pub end: DateTime<Utc>,
    /// Bookings inside the window
    pub total: usize,
    /// Counts by lifecycle status
    pub by_status: StatusBreakdown,
    /// Counts by consultation kind, in the fixed kind order
    pub by_kind: Vec<(ConsultationKind, usize)>,
    /// Counts by attending professional's display name, sorted by name
    pub by_professional: BTreeMap<String, usize>,
}

/// Generates the consultations report for `[start, end]`
///
/// An empty booking set yields zero counts everywhere, never an error.
pub fn consultations_report(
    store: &RecordStore,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> ConsultationsReport {
    let in_window: Vec<_> = store
        .bookings()
        .iter()
        .filter(|b| b.scheduled_for >= start && b.scheduled_for <= end)
        .collect();

    let mut by_status = StatusBreakdown::default();
    let mut by_professional: BTreeMap<String, usize> = BTreeMap::new();
    for booking in &in_window {
        match booking.status {
            BookingStatus::Scheduled => by_status.scheduled += 1,
            BookingStatus::InProgress => by_status.in_progress += 1,
            BookingStatus::Completed => by_status.completed += 1,
        }
        let (_, professional_name) = store.booking_names(booking);
        *by_professional.entry(professional_name).or_insert(0) += 1;
    }

    let by_kind = ConsultationKind::ALL
        .iter()
        .map(|&kind| {
            let count = in_window.iter().filter(|b| b.kind == kind).count();
            (kind, count)
        })
        .collect();

    ConsultationsReport {
        start,
        end,
        total: in_window.len(),
        by_status,
        by_kind,
        by_professional,
    }
}
