//! GitHub GraphQL implementation of [`ContributionFetcher`].

use chrono::{NaiveDate, SecondsFormat};
use contribgraph::{
    ContributedOrganization, ContributionFetcher, DateRange, OrgCounts, RepositoryContribution,
    rank_contributed_organizations,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;

pub const GITHUB_GRAPHQL_API: &str = "https://api.github.com/graphql";

const ORG_ID_QUERY: &str = r#"
query($login: String!) {
  organization(login: $login) {
    id
  }
}
"#;

const CONTRIBUTION_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!, $orgId: ID) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to, organizationID: $orgId) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

const CONTRIBUTED_ORGS_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      commitContributionsByRepository(maxRepositories: 100) {
        repository {
          isPrivate
          owner {
            __typename
            login
            ... on Organization {
              id
            }
          }
        }
        contributions {
          totalCount
        }
      }
    }
  }
}
"#;

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub API error: {0}")]
    Status(reqwest::StatusCode),
    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),
    #[error("GitHub response had no data")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct OrgIdData {
    organization: Option<IdNode>,
}

#[derive(Debug, Deserialize)]
struct IdNode {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarData {
    user: Option<CalendarUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarUser {
    contributions_collection: CalendarCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarCollection {
    contribution_calendar: Calendar,
}

#[derive(Debug, Deserialize)]
struct Calendar {
    weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarWeek {
    contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    contribution_count: u32,
    date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct ContributedData {
    user: Option<ContributedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributedUser {
    contributions_collection: ContributedCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributedCollection {
    commit_contributions_by_repository: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
struct RepositoryEntry {
    repository: Repository,
    contributions: TotalCount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repository {
    is_private: bool,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    #[serde(rename = "__typename")]
    typename: String,
    login: String,
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u32,
}

fn calendar_counts(data: CalendarData) -> OrgCounts {
    let Some(user) = data.user else {
        return OrgCounts::new();
    };
    user.contributions_collection
        .contribution_calendar
        .weeks
        .into_iter()
        .flat_map(|w| w.contribution_days)
        .filter(|d| d.contribution_count > 0)
        .map(|d| (d.date, d.contribution_count))
        .collect()
}

fn repository_rows(data: ContributedData) -> Vec<RepositoryContribution> {
    let Some(user) = data.user else {
        return Vec::new();
    };
    user.contributions_collection
        .commit_contributions_by_repository
        .into_iter()
        .map(|entry| RepositoryContribution {
            owner_is_organization: entry.repository.owner.typename == "Organization",
            owner_login: entry.repository.owner.login,
            owner_id: entry.repository.owner.id,
            is_private: entry.repository.is_private,
            total_count: entry.contributions.total_count,
        })
        .collect()
}

fn iso(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Blocking GraphQL client authenticated with a bearer token.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    token: String,
    endpoint: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Result<Self, GithubError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("contribgraph/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
            endpoint: GITHUB_GRAPHQL_API.to_string(),
        })
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, GithubError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()?;

        if !response.status().is_success() {
            return Err(GithubError::Status(response.status()));
        }

        let body: GraphQlResponse<T> = response.json()?;
        match body.data {
            Some(data) => Ok(data),
            None if !body.errors.is_empty() => Err(GithubError::GraphQl(
                body.errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
            None => Err(GithubError::MissingData),
        }
    }
}

impl ContributionFetcher for GithubClient {
    fn organization_id(&self, login: &str) -> Option<String> {
        match self.query::<OrgIdData>(ORG_ID_QUERY, json!({ "login": login })) {
            Ok(data) => data.organization.map(|o| o.id),
            Err(err) => {
                tracing::warn!(organization = %login, error = %err, "failed to get organization id");
                None
            }
        }
    }

    fn contributions(&self, username: &str, organization_id: &str, range: &DateRange) -> OrgCounts {
        let variables = json!({
            "username": username,
            "from": iso(range.from),
            "to": iso(range.to),
            "orgId": organization_id,
        });
        match self.query::<CalendarData>(CONTRIBUTION_QUERY, variables) {
            Ok(data) => calendar_counts(data),
            Err(err) => {
                tracing::warn!(%username, error = %err, "failed to get contributions");
                OrgCounts::new()
            }
        }
    }

    fn contributed_organizations(
        &self,
        username: &str,
        range: &DateRange,
    ) -> Vec<ContributedOrganization> {
        let variables = json!({
            "username": username,
            "from": iso(range.from),
            "to": iso(range.to),
        });
        match self.query::<ContributedData>(CONTRIBUTED_ORGS_QUERY, variables) {
            Ok(data) => rank_contributed_organizations(repository_rows(data)),
            Err(err) => {
                tracing::warn!(%username, error = %err, "failed to detect organizations");
                Vec::new()
            }
        }
    }
}
