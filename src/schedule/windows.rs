use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hour range bounding a spending draw, start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains_hour(self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

pub const TRANSPORT_MORNING: TimeWindow = TimeWindow::new(6, 9);
pub const TRANSPORT_EVENING: TimeWindow = TimeWindow::new(16, 19);
pub const FOOD_LUNCH: TimeWindow = TimeWindow::new(11, 14);
pub const FOOD_DINNER: TimeWindow = TimeWindow::new(19, 21);
pub const DRINK_LUNCH: TimeWindow = TimeWindow::new(11, 14);
pub const DRINK_EVENING: TimeWindow = TimeWindow::new(18, 22);
pub const ENTERTAINMENT: TimeWindow = TimeWindow::new(17, 23);
pub const SHOPPING: TimeWindow = TimeWindow::new(10, 18);
pub const DEFAULT: TimeWindow = TimeWindow::new(10, 22);

static TIME_RANGES: Lazy<HashMap<&'static str, TimeWindow>> = Lazy::new(|| {
    HashMap::from([
        ("Transport_morning", TRANSPORT_MORNING),
        ("Transport_evening", TRANSPORT_EVENING),
        ("Food_lunch", FOOD_LUNCH),
        ("Food_dinner", FOOD_DINNER),
        ("Drink_lunch", DRINK_LUNCH),
        ("Drink_evening", DRINK_EVENING),
        ("Entertainment", ENTERTAINMENT),
        ("Shopping", SHOPPING),
        ("Default", DEFAULT),
    ])
});

/// Looks up a named window from the fixed table.
pub fn named(name: &str) -> Option<TimeWindow> {
    TIME_RANGES.get(name).copied()
}

/// Window for a category without a dedicated rule: its own table entry if
/// one exists, otherwise the default daytime window.
pub fn for_category(category: &str) -> TimeWindow {
    named(category).unwrap_or(DEFAULT)
}
