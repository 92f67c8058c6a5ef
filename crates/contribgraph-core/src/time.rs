use chrono::{DateTime, NaiveDate, Utc};

/// Overrides "now" for the current thread while `f` runs.
///
/// Every date window in this crate is anchored to the current instant, which makes graphs differ
/// from one day to the next. Pinning the clock keeps fixtures and snapshots reproducible. `None`
/// uses the system clock.
pub fn with_fixed_now<R>(now: Option<DateTime<Utc>>, f: impl FnOnce() -> R) -> R {
    crate::runtime::with_fixed_now(now, f)
}

/// Like [`with_fixed_now`], pinned to midnight UTC of `today`.
pub fn with_fixed_today<R>(today: Option<NaiveDate>, f: impl FnOnce() -> R) -> R {
    let now = today.map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc());
    crate::runtime::with_fixed_now(now, f)
}

/// The instant every date range is computed from.
pub fn now() -> DateTime<Utc> {
    crate::runtime::now_utc()
}
