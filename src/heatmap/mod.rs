//! Day-of-week by hour-of-day aggregation of generated entries.

use chrono::{Datelike, Timelike};

use crate::{generator::SpendingEntry, schedule::DayName};

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

/// Fixed 7x24 grid of summed amounts, rows Monday through Sunday, columns
/// hour 0 through 23. Cells with no entries hold 0.0 rather than being
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    cells: [[f64; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl HeatmapGrid {
    /// Pivots entries into the grid. The row comes from the timestamp's
    /// actual weekday, not from the plan day that produced the entry.
    pub fn from_entries(entries: &[SpendingEntry]) -> Self {
        let mut cells = [[0.0_f64; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for entry in entries {
            let row = entry.timestamp.weekday().num_days_from_monday() as usize;
            let col = entry.timestamp.hour() as usize;
            cells[row][col] += entry.amount;
        }
        Self { cells }
    }

    pub fn cell(&self, day: DayName, hour: u32) -> f64 {
        self.cells[day.offset() as usize][hour as usize]
    }

    /// Rows in week order, labelled by day name.
    pub fn rows(&self) -> impl Iterator<Item = (DayName, &[f64; HOURS_PER_DAY])> + '_ {
        DayName::ALL.into_iter().zip(self.cells.iter())
    }

    pub fn week_total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }

    /// Largest cell value, used to scale rendering intensity.
    pub fn max_cell(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        generator,
        profile::{ProfileStore, SpendingProfile},
    };

    fn sample_entries() -> Vec<SpendingEntry> {
        let mut store = ProfileStore::new();
        store.insert(
            "normal",
            SpendingProfile::new()
                .with_day("Monday", 5)
                .with_day("Saturday", 3)
                .with_range("Transport", 2.0, 5.0)
                .with_range("Food", 8.0, 15.0),
        );
        let mut rng = StdRng::seed_from_u64(17);
        // 2025-03-03 is a Monday, so plan days line up with true weekdays.
        let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        generator::generate(&mut rng, &store, start, "normal", None).expect("generate")
    }

    #[test]
    fn grid_matches_a_manual_group_by() {
        let entries = sample_entries();
        let grid = HeatmapGrid::from_entries(&entries);

        for entry in &entries {
            let day = DayName::from_weekday(entry.timestamp.weekday());
            let hour = entry.timestamp.hour();
            let expected: f64 = entries
                .iter()
                .filter(|e| {
                    e.timestamp.weekday() == entry.timestamp.weekday()
                        && e.timestamp.hour() == hour
                })
                .map(|e| e.amount)
                .sum();
            assert!((grid.cell(day, hour) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn untouched_cells_are_zero_not_missing() {
        let grid = HeatmapGrid::from_entries(&sample_entries());
        // Nothing is ever generated in the small hours.
        assert_eq!(grid.cell(DayName::Monday, 3), 0.0);
        assert_eq!(grid.cell(DayName::Wednesday, 12), 0.0, "unplanned day");
    }

    #[test]
    fn totals_cover_every_entry() {
        let entries = sample_entries();
        let grid = HeatmapGrid::from_entries(&entries);
        let direct: f64 = entries.iter().map(|e| e.amount).sum();
        assert!((grid.week_total() - direct).abs() < 1e-9);
        assert!(grid.max_cell() > 0.0);
    }

    #[test]
    fn rows_iterate_monday_through_sunday() {
        let grid = HeatmapGrid::from_entries(&[]);
        let labels: Vec<DayName> = grid.rows().map(|(day, _)| day).collect();
        assert_eq!(labels.first(), Some(&DayName::Monday));
        assert_eq!(labels.last(), Some(&DayName::Sunday));
        assert_eq!(grid.week_total(), 0.0);
    }
}
