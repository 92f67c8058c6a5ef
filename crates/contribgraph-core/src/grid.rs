use crate::date::date_range;
use crate::model::{DailyCounts, DayCell, Grid, Organization, WEEK_LEN, Week};
use indexmap::IndexMap;

/// Merges per-organization daily counts into a Sunday-aligned week grid covering the last
/// `months` months.
///
/// Slots before the first day and after the last day are `None`; every in-range day gets a
/// [`DayCell`], including days without contributions.
pub fn generate_grid_data(
    daily_counts: &DailyCounts,
    organizations: &[Organization],
    months: u32,
) -> Grid {
    let range = date_range(months);

    let mut weeks: Vec<Week> = Vec::new();
    let mut current: Week = Default::default();
    let mut slot = range.leading_padding();

    for day in range.days() {
        let mut contributions: IndexMap<String, u32> = IndexMap::new();
        for org in organizations {
            let count = daily_counts.count(&org.name, day);
            if count > 0 {
                contributions.insert(org.name.clone(), count);
            }
        }

        current[slot] = Some(DayCell::new(day, contributions));
        slot += 1;
        if slot == WEEK_LEN {
            weeks.push(std::mem::take(&mut current));
            slot = 0;
        }
    }

    // Trailing slots of a partial week are still `None`.
    if slot > 0 {
        weeks.push(current);
    }

    Grid {
        from: range.first_day(),
        to: range.last_day(),
        weeks,
    }
}
