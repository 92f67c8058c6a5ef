use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// A window ending at the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn first_day(&self) -> NaiveDate {
        self.from.date_naive()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.to.date_naive()
    }

    /// Every calendar day in `[from, to]`, ascending. Never empty.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day()
            .iter_days()
            .take_while(move |d| *d <= last)
    }

    /// Day of week of the first day, 0 = Sunday.
    pub fn leading_padding(&self) -> usize {
        self.first_day().weekday().num_days_from_sunday() as usize
    }
}

/// The window of the last `months` calendar months.
///
/// Month arithmetic follows chrono: when the day does not exist in the target month it is clamped
/// to that month's last day (e.g. May 31 minus 3 months is Feb 28/29). `months` is expected to be
/// clamped to `[1, 12]` by the caller.
pub fn date_range(months: u32) -> DateRange {
    let to = crate::time::now();
    let from = to.checked_sub_months(Months::new(months)).unwrap_or(to);
    DateRange { from, to }
}

/// Cell edge length for a window of `months` months.
pub fn cell_size(months: u32) -> u32 {
    if months <= 3 {
        12
    } else if months <= 6 {
        10
    } else {
        7
    }
}
