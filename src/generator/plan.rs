use chrono::NaiveDate;
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    errors::SpendingError,
    profile::ProfileStore,
    schedule::{windows, DayName, DaysMap, TimeWindow},
};

use super::entry::{create_entry, SpendingEntry};

const TRANSPORT: &str = "Transport";
const FOOD: &str = "Food";
const DRINK: &str = "Drink";

const WEEKDAY_MANDATORY: [(&str, TimeWindow); 3] = [
    (TRANSPORT, windows::TRANSPORT_MORNING),
    (FOOD, windows::FOOD_LUNCH),
    (TRANSPORT, windows::TRANSPORT_EVENING),
];
const FRIDAY_EXTRA: (&str, TimeWindow) = (DRINK, windows::DRINK_EVENING);

/// Executes the weekly spending plan of the named profile.
///
/// Walks the plan in profile order. Each day first gets its mandatory
/// entries, then random filler entries up to the day's target count; the
/// target is a floor for the random pass only, mandatory entries are never
/// trimmed. Ids start at 1 and stay monotonic across the whole run, so the
/// output order is also id order. Any lookup failure aborts the run with no
/// partial result.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    profiles: &ProfileStore,
    start_date: NaiveDate,
    profile_name: &str,
    categories: Option<&[String]>,
) -> Result<Vec<SpendingEntry>, SpendingError> {
    let profile = profiles.get(profile_name)?;
    let categories: Vec<String> = match categories {
        Some(explicit) => explicit.to_vec(),
        None => profile.category_names(),
    };

    let days = DaysMap::from_week_start(start_date);
    let mut entries = Vec::new();
    let mut spend_id: u32 = 1;

    for (raw_day, target) in &profile.spending_per_day {
        let day: DayName = raw_day.parse()?;

        let mandatory = mandatory_spendings(day);
        let mandatory_count = mandatory.len();
        for (category, window) in mandatory {
            let range = profile.amount_range(category)?;
            entries.push(create_entry(rng, day, &days, category, window, range, spend_id));
            spend_id += 1;
        }

        let remaining = i64::from(*target) - mandatory_count as i64;
        debug!(
            day = raw_day.as_str(),
            target = *target,
            mandatory = mandatory_count,
            random = remaining.max(0),
            "planned day"
        );

        for _ in 0..remaining.max(0) {
            let category = categories
                .choose(rng)
                .ok_or(SpendingError::EmptyCategories)?;
            let window = random_window(rng, category);
            let range = profile.amount_range(category)?;
            entries.push(create_entry(rng, day, &days, category, window, range, spend_id));
            spend_id += 1;
        }
    }

    Ok(entries)
}

/// Fixed per-day mandatory list: commute and lunch on every weekday, plus
/// Friday drinks. Weekends carry no mandatory spendings.
fn mandatory_spendings(day: DayName) -> Vec<(&'static str, TimeWindow)> {
    let mut mandatory = Vec::new();
    if day.is_weekday() {
        mandatory.extend(WEEKDAY_MANDATORY);
    }
    if day == DayName::Friday {
        mandatory.push(FRIDAY_EXTRA);
    }
    mandatory
}

/// Window for a randomly drawn category. Transport always books the morning
/// commute; Food and Drink flip a coin between their two slots; anything
/// else resolves through the window table.
fn random_window<R: Rng + ?Sized>(rng: &mut R, category: &str) -> TimeWindow {
    match category {
        TRANSPORT => windows::TRANSPORT_MORNING,
        FOOD => {
            if rng.gen_bool(0.5) {
                windows::FOOD_LUNCH
            } else {
                windows::FOOD_DINNER
            }
        }
        DRINK => {
            if rng.gen_bool(0.5) {
                windows::DRINK_LUNCH
            } else {
                windows::DRINK_EVENING
            }
        }
        other => windows::for_category(other),
    }
}
