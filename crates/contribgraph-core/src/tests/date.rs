use super::ymd;
use crate::time::with_fixed_today;
use crate::*;

#[test]
fn date_range_spans_requested_months_ending_today() {
    let range = with_fixed_today(Some(ymd(2024, 6, 15)), || date_range(6));
    assert_eq!(range.first_day(), ymd(2023, 12, 15));
    assert_eq!(range.last_day(), ymd(2024, 6, 15));
    assert_eq!(range.days().count(), 184);
}

#[test]
fn date_range_clamps_to_end_of_shorter_month() {
    let range = with_fixed_today(Some(ymd(2024, 3, 31)), || date_range(1));
    assert_eq!(range.first_day(), ymd(2024, 2, 29));
}

#[test]
fn leading_padding_is_weekday_of_first_day() {
    // 2023-12-15 is a Friday.
    let range = with_fixed_today(Some(ymd(2024, 6, 15)), || date_range(6));
    assert_eq!(range.leading_padding(), 5);

    // 2024-05-12 is a Sunday.
    let range = with_fixed_today(Some(ymd(2024, 6, 12)), || date_range(1));
    assert_eq!(range.leading_padding(), 0);
}

#[test]
fn cell_size_shrinks_with_longer_windows() {
    assert_eq!(cell_size(1), 12);
    assert_eq!(cell_size(3), 12);
    assert_eq!(cell_size(4), 10);
    assert_eq!(cell_size(6), 10);
    assert_eq!(cell_size(7), 7);
    assert_eq!(cell_size(12), 7);
}

#[test]
fn fixed_clock_is_scoped_to_the_closure() {
    let pinned = with_fixed_today(Some(ymd(2020, 1, 1)), time::now);
    assert_eq!(pinned.date_naive(), ymd(2020, 1, 1));
    assert_ne!(time::now().date_naive(), ymd(2020, 1, 1));
}
