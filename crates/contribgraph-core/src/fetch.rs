//! The seam between the pure grid pipeline and wherever contribution counts come from.

use crate::date::DateRange;
use crate::model::{DailyCounts, OrgCounts, Organization};
use crate::orgs::{auto_detect_organization, default_orgs, github_login};

/// A source of per-organization daily counts (e.g. the GitHub GraphQL API).
///
/// Implementations swallow their own failures: an unknown organization is `None`, a failed
/// request is an empty map. Callers only ever see data, never errors.
pub trait ContributionFetcher {
    /// Opaque id of the organization with the given login.
    fn organization_id(&self, login: &str) -> Option<String>;

    /// Positive daily counts of `username` inside `organization_id` over `range`.
    fn contributions(&self, username: &str, organization_id: &str, range: &DateRange) -> OrgCounts;

    /// Public organizations `username` committed to over `range`, busiest first.
    fn contributed_organizations(
        &self,
        _username: &str,
        _range: &DateRange,
    ) -> Vec<ContributedOrganization> {
        Vec::new()
    }
}

/// Fetches counts for every organization, one after another.
///
/// Organizations are looked up by their GitHub login (see [`github_login`]) but keyed by
/// [`Organization::name`] in the result. An organization whose id cannot be resolved gets an
/// empty map.
pub fn collect_daily_counts<F: ContributionFetcher + ?Sized>(
    fetcher: &F,
    username: &str,
    organizations: &[Organization],
    range: &DateRange,
) -> DailyCounts {
    let mut data = DailyCounts::new();
    for org in organizations {
        let login = github_login(&org.name);
        let counts = match fetcher.organization_id(&login) {
            Some(id) => fetcher.contributions(username, &id, range),
            None => {
                tracing::warn!(organization = %login, "organization not found; treating as no contributions");
                OrgCounts::new()
            }
        };
        tracing::debug!(organization = %login, days = counts.len(), "collected contributions");
        data.insert_org(&org.name, counts);
    }
    data
}

/// One row of a user's per-repository commit contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContribution {
    pub owner_login: String,
    pub owner_id: Option<String>,
    pub owner_is_organization: bool,
    pub is_private: bool,
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributedOrganization {
    pub login: String,
    pub id: Option<String>,
    pub total_contributions: u32,
}

/// Folds repository rows into organizations: drops private repositories and user-owned
/// repositories, sums counts per owner and sorts by total, highest first (ties keep first-seen
/// order).
pub fn rank_contributed_organizations(
    rows: impl IntoIterator<Item = RepositoryContribution>,
) -> Vec<ContributedOrganization> {
    let mut out: Vec<ContributedOrganization> = Vec::new();
    for row in rows {
        if row.is_private || !row.owner_is_organization {
            continue;
        }
        match out.iter_mut().find(|o| o.login == row.owner_login) {
            Some(existing) => {
                existing.total_contributions =
                    existing.total_contributions.saturating_add(row.total_count);
                if existing.id.is_none() {
                    existing.id = row.owner_id;
                }
            }
            None => out.push(ContributedOrganization {
                login: row.owner_login,
                id: row.owner_id,
                total_contributions: row.total_count,
            }),
        }
    }
    out.sort_by(|a, b| b.total_contributions.cmp(&a.total_contributions));
    out
}

/// Organizations for an `orgs=auto` request: the user's public organizations, busiest first,
/// colored by [`auto_detect_organization`]. Falls back to [`default_orgs`] when none are found.
pub fn detect_organizations<F: ContributionFetcher + ?Sized>(
    fetcher: &F,
    username: &str,
    range: &DateRange,
) -> Vec<Organization> {
    let found = fetcher.contributed_organizations(username, range);
    if found.is_empty() {
        tracing::info!(%username, "no contributed organizations detected; using defaults");
        return default_orgs();
    }
    tracing::info!(%username, count = found.len(), "detected contributed organizations");
    found
        .iter()
        .enumerate()
        .map(|(i, org)| auto_detect_organization(&org.login, i))
        .collect()
}
