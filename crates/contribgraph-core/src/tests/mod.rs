mod date;
mod fetch;
mod grid;
mod orgs;

use chrono::NaiveDate;

pub(crate) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
