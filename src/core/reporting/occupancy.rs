//! Bed occupancy report
//!
//! Groups beds by the four fixed sectors. Each sector's percentage uses
//! the same zero-guarded rounding as the overall figure.

use crate::core::reporting::dashboard::occupancy_percentage;
use crate::core::store::RecordStore;
use crate::domain::{BedStatus, Sector};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Occupancy breakdown for one sector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorOccupancy {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    pub maintenance: usize,
    /// `round(occupied / total × 100)`; 0 for an empty sector
    pub occupancy_percentage: u32,
}

/// Full occupancy report
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    pub total_beds: usize,
    pub occupied_beds: usize,
    pub available_beds: usize,
    pub maintenance_beds: usize,
    pub occupancy_percentage: u32,
    /// Per-sector breakdown, in the fixed sector order
    pub per_sector: Vec<(Sector, SectorOccupancy)>,
}

/// Generates the occupancy report
pub fn occupancy_report(store: &RecordStore) -> OccupancyReport {
    let beds = store.beds();
    let count = |status: BedStatus| beds.iter().filter(|b| b.status == status).count();

    let per_sector = Sector::ALL
        .iter()
        .map(|&sector| {
            let sector_beds: Vec<_> = beds.iter().filter(|b| b.sector == sector).collect();
            let occupied = sector_beds
                .iter()
                .filter(|b| b.status == BedStatus::Occupied)
                .count();
            (
                sector,
                SectorOccupancy {
                    total: sector_beds.len(),
                    occupied,
                    available: sector_beds
                        .iter()
                        .filter(|b| b.status == BedStatus::Available)
                        .count(),
                    maintenance: sector_beds
                        .iter()
                        .filter(|b| b.status == BedStatus::Maintenance)
                        .count(),
                    occupancy_percentage: occupancy_percentage(occupied, sector_beds.len()),
                },
            )
        })
        .collect();

    let occupied = count(BedStatus::Occupied);
    OccupancyReport {
        generated_at: Utc::now(),
        total_beds: beds.len(),
        occupied_beds: occupied,
        available_beds: count(BedStatus::Available),
        maintenance_beds: count(BedStatus::Maintenance),
        occupancy_percentage: occupancy_percentage(occupied, beds.len()),
        per_sector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BedDraft;

    fn add_bed(store: &mut RecordStore, number: &str, sector: Sector, status: BedStatus) {
        store
            .register_bed(BedDraft {
                number: number.to_string(),
                sector,
                status,
                occupant: None,
            })
            .unwrap();
    }

    #[test]
    fn test_report_covers_all_four_sectors() {
        let store = RecordStore::new();
        let report = occupancy_report(&store);
        assert_eq!(report.per_sector.len(), 4);
        for (_, sector) in &report.per_sector {
            assert_eq!(sector.total, 0);
            assert_eq!(sector.occupancy_percentage, 0);
        }
    }

    #[test]
    fn test_per_sector_grouping_and_percentages() {
        let mut store = RecordStore::new();
        add_bed(&mut store, "101", Sector::Ward, BedStatus::Occupied);
        add_bed(&mut store, "102", Sector::Ward, BedStatus::Available);
        add_bed(&mut store, "201", Sector::Icu, BedStatus::Maintenance);

        let report = occupancy_report(&store);
        assert_eq!(report.total_beds, 3);
        assert_eq!(report.occupied_beds, 1);
        assert_eq!(report.occupancy_percentage, 33);

        let (_, ward) = &report.per_sector[0];
        assert_eq!(ward.total, 2);
        assert_eq!(ward.occupied, 1);
        assert_eq!(ward.occupancy_percentage, 50);

        let (_, icu) = &report.per_sector[1];
        assert_eq!(icu.total, 1);
        assert_eq!(icu.maintenance, 1);
        assert_eq!(icu.occupancy_percentage, 0);

        // Untouched sectors still appear.
        let (_, maternity) = &report.per_sector[3];
        assert_eq!(maternity.total, 0);
    }
}
