use super::ymd;
use crate::time::with_fixed_today;
use crate::*;
use chrono::Datelike;

fn rails_hotwired() -> Vec<Organization> {
    default_orgs()
}

#[test]
fn grid_pads_first_week_and_fills_whole_range() {
    let grid = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        generate_grid_data(&DailyCounts::new(), &rails_hotwired(), 6)
    });

    assert_eq!(grid.from, ymd(2023, 12, 15));
    assert_eq!(grid.to, ymd(2024, 6, 15));
    // 5 padding slots + 184 days = 27 full weeks.
    assert_eq!(grid.week_count(), 27);

    let first = &grid.weeks[0];
    assert!(first[..5].iter().all(Option::is_none));
    assert_eq!(first[5].as_ref().map(|c| c.date), Some(ymd(2023, 12, 15)));

    let last = grid.weeks.last().unwrap();
    assert_eq!(last[6].as_ref().map(|c| c.date), Some(ymd(2024, 6, 15)));

    assert_eq!(grid.cells().count(), 184);
    assert!(grid.cells().all(|c| c.total == 0 && c.contributions.is_empty()));
}

#[test]
fn grid_leaves_trailing_slots_empty_for_partial_last_week() {
    // 2024-06-12 is a Wednesday; 2024-05-12 a Sunday.
    let grid = with_fixed_today(Some(ymd(2024, 6, 12)), || {
        generate_grid_data(&DailyCounts::new(), &rails_hotwired(), 1)
    });
    let last = grid.weeks.last().unwrap();
    assert_eq!(last[3].as_ref().map(|c| c.date), Some(ymd(2024, 6, 12)));
    assert!(last[4..].iter().all(Option::is_none));
    assert!(grid.weeks[0][0].is_some());
}

#[test]
fn grid_merges_counts_in_organization_order() {
    let mut data = DailyCounts::new();
    data.set("hotwired", ymd(2024, 6, 1), 3);
    data.set("rails", ymd(2024, 6, 1), 2);
    data.set("rails", ymd(2024, 6, 2), 0);
    data.set("rails", ymd(2024, 6, 3), 4);

    let grid = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        generate_grid_data(&data, &rails_hotwired(), 3)
    });

    let day = grid.cell(ymd(2024, 6, 1)).unwrap();
    assert_eq!(day.total, 5);
    let keys: Vec<&str> = day.contributions.keys().map(String::as_str).collect();
    assert_eq!(keys, ["rails", "hotwired"]);

    let zero = grid.cell(ymd(2024, 6, 2)).unwrap();
    assert_eq!(zero.total, 0);
    assert!(zero.contributions.is_empty());

    assert_eq!(grid.total_contributions(), 9);
}

#[test]
fn grid_ignores_counts_for_unlisted_organizations_and_out_of_range_days() {
    let mut data = DailyCounts::new();
    data.set("vercel", ymd(2024, 6, 1), 7);
    data.set("rails", ymd(2020, 1, 1), 7);

    let grid = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        generate_grid_data(&data, &rails_hotwired(), 3)
    });
    assert_eq!(grid.total_contributions(), 0);
}

#[test]
fn grid_serializes_dates_as_iso_strings() {
    let grid = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        generate_grid_data(&DailyCounts::new(), &rails_hotwired(), 1)
    });
    let value = serde_json::to_value(&grid).unwrap();
    assert_eq!(value["to"], "2024-06-15");
    assert!(value["weeks"][0].as_array().unwrap().len() == WEEK_LEN);
}

#[test]
fn grid_totals_do_not_overflow_on_large_counts() {
    let data = DailyCounts::from_json(
        r#"{"rails":{"2024-06-10":4000000000},"hotwired":{"2024-06-10":4000000000}}"#,
    )
    .unwrap();
    let grid = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        generate_grid_data(&data, &rails_hotwired(), 1)
    });

    let day = grid.cell(ymd(2024, 6, 10)).unwrap();
    assert_eq!(day.total, 8_000_000_000);
    assert_eq!(
        day.total,
        day.contributions.values().map(|&n| u64::from(n)).sum::<u64>()
    );
    assert_eq!(grid.total_contributions(), 8_000_000_000);
}

#[test]
fn grid_covers_every_day_once_for_all_month_counts() {
    let todays = [
        ymd(2024, 6, 15),
        ymd(2024, 3, 31),
        ymd(2023, 1, 1),
        ymd(2024, 12, 31),
        ymd(2024, 2, 29),
    ];
    for today in todays {
        for months in 1..=12 {
            let grid = with_fixed_today(Some(today), || {
                generate_grid_data(&DailyCounts::new(), &rails_hotwired(), months)
            });
            assert_eq!(grid.to, today, "today {today} months {months}");

            let expected: Vec<_> = grid
                .from
                .iter_days()
                .take_while(|d| *d <= grid.to)
                .collect();
            let actual: Vec<_> = grid.cells().map(|c| c.date).collect();
            assert_eq!(actual, expected, "today {today} months {months}");

            assert!(grid.weeks.iter().all(|w| w.len() == WEEK_LEN));
            let leading = grid.weeks[0].iter().take_while(|s| s.is_none()).count();
            assert_eq!(
                leading,
                grid.from.weekday().num_days_from_sunday() as usize,
                "today {today} months {months}"
            );
        }
    }
}
