use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    profile::AmountRange,
    schedule::{DayName, DaysMap, TimeWindow},
};

/// One generated spending transaction.
///
/// Immutable once created; `spend_id` is 1-based and strictly increasing
/// within a single generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    #[serde(rename = "SpendID")]
    pub spend_id: u32,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: NaiveDateTime,
}

/// Builds one entry: random time of day within the window, random amount
/// within the range, caller-assigned id. Holds no sequence state.
pub fn create_entry<R: Rng + ?Sized>(
    rng: &mut R,
    day: DayName,
    days: &DaysMap,
    category: &str,
    window: TimeWindow,
    amount_range: AmountRange,
    spend_id: u32,
) -> SpendingEntry {
    let hour = rng.gen_range(window.start_hour..window.end_hour);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);

    let timestamp = days
        .date(day)
        .and_hms_opt(hour, minute, second)
        .expect("window hours stay within a day");

    let amount = round_cents(rng.gen_range(amount_range.min..=amount_range.max));

    SpendingEntry {
        spend_id,
        amount,
        category: category.to_string(),
        timestamp,
    }
}

/// Rounds to two decimals, half away from zero (`f64::round` semantics).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rand::{rngs::StdRng, SeedableRng};

    use crate::schedule::windows;

    #[test]
    fn rounds_half_away_from_zero_at_the_boundary() {
        // 2.125 is exactly representable in binary, so the half-cent case
        // is exercised without float fuzz.
        assert_eq!(round_cents(2.125), 2.13);
        assert_eq!(round_cents(2.124), 2.12);
        assert_eq!(round_cents(-2.125), -2.13);
    }

    #[test]
    fn entry_lands_on_the_day_within_the_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let days = DaysMap::from_week_start(start);
        let range = AmountRange::new(8.0, 15.0);

        for _ in 0..200 {
            let entry = create_entry(
                &mut rng,
                DayName::Tuesday,
                &days,
                "Food",
                windows::FOOD_LUNCH,
                range,
                1,
            );
            assert_eq!(entry.timestamp.date(), days.date(DayName::Tuesday));
            assert!(windows::FOOD_LUNCH.contains_hour(entry.timestamp.hour()));
            assert!(range.contains(entry.amount));
            let cents = entry.amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "at most two decimals");
        }
    }

    #[test]
    fn degenerate_range_pins_the_amount() {
        let mut rng = StdRng::seed_from_u64(1);
        let days = DaysMap::from_week_start(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        let entry = create_entry(
            &mut rng,
            DayName::Monday,
            &days,
            "Transport",
            windows::TRANSPORT_MORNING,
            AmountRange::new(2.125, 2.125),
            9,
        );
        assert_eq!(entry.amount, 2.13);
        assert_eq!(entry.spend_id, 9);
    }
}
