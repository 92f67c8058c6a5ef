use crate::date::date_range;
use crate::model::{DailyCounts, OrgCounts, Organization};
use rand::Rng;

/// Chance that a given organization has activity on a given day.
pub const DEMO_ACTIVITY_PROBABILITY: f64 = 0.15;
/// Upper bound (inclusive) of a demo day's contribution count.
pub const DEMO_MAX_DAILY_COUNT: u32 = 5;

/// Synthetic contributions for every organization over the last `months` months.
///
/// Uses the thread RNG, so two calls never agree. Use [`generate_demo_data_with_rng`] with a
/// seeded RNG where output must be reproducible.
pub fn generate_demo_data(organizations: &[Organization], months: u32) -> DailyCounts {
    generate_demo_data_with_rng(organizations, months, &mut rand::thread_rng())
}

/// Every in-range day is recorded for every organization: with probability
/// [`DEMO_ACTIVITY_PROBABILITY`] it gets a count in `1..=DEMO_MAX_DAILY_COUNT`, otherwise 0.
pub fn generate_demo_data_with_rng<R: Rng + ?Sized>(
    organizations: &[Organization],
    months: u32,
    rng: &mut R,
) -> DailyCounts {
    let range = date_range(months);
    let mut data = DailyCounts::new();

    for org in organizations {
        let mut counts = OrgCounts::new();
        for day in range.days() {
            let count = if rng.gen_bool(DEMO_ACTIVITY_PROBABILITY) {
                rng.gen_range(1..=DEMO_MAX_DAILY_COUNT)
            } else {
                0
            };
            counts.insert(day, count);
        }
        data.insert_org(&org.name, counts);
    }

    tracing::debug!(
        organizations = organizations.len(),
        months,
        "generated demo contribution data"
    );
    data
}
