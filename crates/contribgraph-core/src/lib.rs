#![forbid(unsafe_code)]

//! Calendar grid model for multi-organization contribution graphs (headless).
//!
//! Design goals:
//! - pure, synchronous data transforms (no I/O outside the [`fetch`] seam)
//! - deterministic, testable outputs (the clock can be pinned per thread, see [`time`])
//! - one shared data shape for live, fixture and demo contribution data

pub mod date;
pub mod demo;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod model;
pub mod orgs;
pub mod query;
mod runtime;
pub mod time;

pub use date::{DateRange, cell_size, date_range};
pub use demo::{generate_demo_data, generate_demo_data_with_rng};
pub use error::{Error, Result};
pub use fetch::{
    ContributedOrganization, ContributionFetcher, RepositoryContribution, collect_daily_counts,
    detect_organizations, rank_contributed_organizations,
};
pub use grid::generate_grid_data;
pub use model::{DailyCounts, DayCell, Grid, OrgCounts, Organization, WEEK_LEN, Week};
pub use orgs::{
    AUTO_DETECT_PALETTE, DEFAULT_ORG_COLOR, auto_detect_organization, default_orgs, github_login,
    parse_orgs, preset, resolve,
};
pub use query::{GraphQuery, OutputFormat, clamp_months};

#[cfg(test)]
mod tests;
