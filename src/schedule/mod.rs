//! Calendar scaffolding for a generated week: day names, the day-to-date
//! map, and the time-of-day windows that bound each spending draw.

pub mod day;
pub mod windows;

pub use day::{DayName, DaysMap};
pub use windows::TimeWindow;
