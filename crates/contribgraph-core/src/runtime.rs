use chrono::{DateTime, Utc};
use std::cell::Cell;

thread_local! {
    static FIXED_NOW: Cell<Option<DateTime<Utc>>> = const { Cell::new(None) };
}

pub(crate) fn with_fixed_now<R>(now: Option<DateTime<Utc>>, f: impl FnOnce() -> R) -> R {
    FIXED_NOW.with(|cell| {
        let prev = cell.replace(now);
        let out = f();
        cell.set(prev);
        out
    })
}

pub(crate) fn now_utc() -> DateTime<Utc> {
    FIXED_NOW
        .with(|cell| cell.get())
        .unwrap_or_else(Utc::now)
}
