use crate::{Error, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of weekday slots in a [`Week`] (Sunday-first).
pub const WEEK_LEN: usize = 7;

/// An organization whose activity is tracked and drawn with its own color.
///
/// `name` is the identifier used as the key into [`DailyCounts`] and [`DayCell::contributions`];
/// it is lowercased on construction so lookups never depend on how the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub color: String,
    pub label: String,
}

impl Organization {
    pub fn new(name: &str, color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.trim().to_ascii_lowercase(),
            color: color.into(),
            label: label.into(),
        }
    }

    /// The text shown in tooltips and the legend.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Finds an organization by name (case-insensitive).
    pub fn find<'a>(organizations: &'a [Organization], name: &str) -> Option<&'a Organization> {
        organizations
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }
}

/// Per-day counts for a single organization.
pub type OrgCounts = BTreeMap<NaiveDate, u32>;

/// Organization name -> day -> contribution count.
///
/// Sparse: absent and zero entries both mean "no contribution". Organization keys keep their
/// insertion order and are lowercased like [`Organization::name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DailyCounts(IndexMap<String, OrgCounts>);

impl DailyCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the counts recorded for `organization`.
    pub fn insert_org(&mut self, organization: &str, counts: OrgCounts) {
        self.0.insert(normalize_key(organization), counts);
    }

    pub fn set(&mut self, organization: &str, date: NaiveDate, count: u32) {
        self.0
            .entry(normalize_key(organization))
            .or_default()
            .insert(date, count);
    }

    /// Count for `organization` on `date`; 0 when either is absent.
    pub fn count(&self, organization: &str, date: NaiveDate) -> u32 {
        self.organization(organization)
            .and_then(|days| days.get(&date).copied())
            .unwrap_or(0)
    }

    pub fn organization(&self, organization: &str) -> Option<&OrgCounts> {
        match self.0.get(organization) {
            Some(days) => Some(days),
            None => self.0.get(&normalize_key(organization)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrgCounts)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses `{"<org>": {"YYYY-MM-DD": <count>, ...}, ...}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: IndexMap<String, IndexMap<String, u32>> = serde_json::from_str(text)?;
        let mut out = Self::new();
        for (organization, days) in raw {
            let mut counts = OrgCounts::new();
            for (date, count) in days {
                let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
                    Error::InvalidDate {
                        organization: organization.clone(),
                        date: date.clone(),
                    }
                })?;
                counts.insert(day, count);
            }
            out.insert_org(&organization, counts);
        }
        Ok(out)
    }
}

fn normalize_key(organization: &str) -> String {
    organization.trim().to_ascii_lowercase()
}

/// One in-range calendar day.
///
/// `contributions` only holds organizations with a positive count, in the order the
/// organizations were listed; `total` is their sum. A day nobody contributed to has an empty
/// map and a zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub contributions: IndexMap<String, u32>,
    pub total: u64,
}

impl DayCell {
    pub fn new(date: NaiveDate, contributions: IndexMap<String, u32>) -> Self {
        let total = contributions.values().map(|&n| u64::from(n)).sum();
        Self {
            date,
            contributions,
            total,
        }
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Sunday(0)..Saturday(6). `None` marks a slot outside the requested range.
pub type Week = [Option<DayCell>; WEEK_LEN];

/// Week-major calendar grid, oldest week first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub weeks: Vec<Week>,
}

impl Grid {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// In-range cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|c| c.date == date)
    }

    pub fn total_contributions(&self) -> u64 {
        self.cells().map(|c| c.total).sum()
    }
}
