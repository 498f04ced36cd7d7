//! Derived reporting over the record store
//!
//! Every function here is a pure read: it takes the store (and an
//! explicit "now" where time matters) and produces counters, breakdowns
//! or notifications without mutating anything.

pub mod consultations;
pub mod dashboard;
pub mod notifications;
pub mod occupancy;

pub use consultations::{consultations_report, ConsultationsReport, StatusBreakdown};
pub use dashboard::{dashboard_counters, system_statistics, DashboardCounters, SystemStatistics};
pub use notifications::{pending_notifications, Notification, NotificationKind};
pub use occupancy::{occupancy_report, OccupancyReport, SectorOccupancy};
