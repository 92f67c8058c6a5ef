use super::ymd;
use crate::time::with_fixed_today;
use crate::*;
use std::cell::RefCell;

#[derive(Default)]
struct FakeFetcher {
    lookups: RefCell<Vec<String>>,
}

impl ContributionFetcher for FakeFetcher {
    fn organization_id(&self, login: &str) -> Option<String> {
        self.lookups.borrow_mut().push(login.to_string());
        (login != "ghost").then(|| format!("ID_{login}"))
    }

    fn contributions(
        &self,
        _username: &str,
        organization_id: &str,
        range: &DateRange,
    ) -> OrgCounts {
        let mut out = OrgCounts::new();
        if organization_id == "ID_facebook" {
            out.insert(range.last_day(), 2);
        }
        out
    }
}

#[test]
fn collect_keys_by_name_and_queries_by_login() {
    let fetcher = FakeFetcher::default();
    let orgs = parse_orgs(Some("react:61DAFB:React,ghost"));
    let data = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        collect_daily_counts(&fetcher, "alice", &orgs, &date_range(1))
    });

    assert_eq!(*fetcher.lookups.borrow(), ["facebook", "ghost"]);
    assert_eq!(data.count("react", ymd(2024, 6, 15)), 2);
    assert!(data.organization("ghost").unwrap().is_empty());
}

#[test]
fn default_auto_detection_finds_nothing() {
    let fetcher = FakeFetcher::default();
    let range = with_fixed_today(Some(ymd(2024, 6, 15)), || date_range(1));
    assert!(fetcher.contributed_organizations("alice", &range).is_empty());
}

fn row(login: &str, org: bool, private: bool, count: u32) -> RepositoryContribution {
    RepositoryContribution {
        owner_login: login.to_string(),
        owner_id: org.then(|| format!("ID_{login}")),
        owner_is_organization: org,
        is_private: private,
        total_count: count,
    }
}

#[test]
fn ranking_filters_merges_and_sorts() {
    let ranked = rank_contributed_organizations([
        row("rails", true, false, 3),
        row("alice", false, false, 50),
        row("secret", true, true, 40),
        row("vercel", true, false, 5),
        row("rails", true, false, 4),
        row("tiny", true, false, 1),
    ]);
    let summary: Vec<(&str, u32)> = ranked
        .iter()
        .map(|o| (o.login.as_str(), o.total_contributions))
        .collect();
    assert_eq!(summary, [("rails", 7), ("vercel", 5), ("tiny", 1)]);
    assert_eq!(ranked[0].id.as_deref(), Some("ID_rails"));
}

#[test]
fn ranking_saturates_huge_totals() {
    let ranked = rank_contributed_organizations([
        row("rails", true, false, u32::MAX),
        row("vercel", true, false, 2),
        row("rails", true, false, 10),
    ]);
    assert_eq!(ranked[0].login, "rails");
    assert_eq!(ranked[0].total_contributions, u32::MAX);
    assert_eq!(ranked[1].total_contributions, 2);
}

struct DetectingFetcher(Vec<&'static str>);

impl ContributionFetcher for DetectingFetcher {
    fn organization_id(&self, login: &str) -> Option<String> {
        Some(login.to_string())
    }

    fn contributions(&self, _: &str, _: &str, _: &DateRange) -> OrgCounts {
        OrgCounts::new()
    }

    fn contributed_organizations(&self, _: &str, _: &DateRange) -> Vec<ContributedOrganization> {
        self.0
            .iter()
            .map(|login| ContributedOrganization {
                login: login.to_string(),
                id: None,
                total_contributions: 1,
            })
            .collect()
    }
}

#[test]
fn detection_colors_presets_and_palette() {
    let range = with_fixed_today(Some(ymd(2024, 6, 15)), || date_range(6));
    let orgs = detect_organizations(&DetectingFetcher(vec!["acme", "rails"]), "alice", &range);
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].color, AUTO_DETECT_PALETTE[0]);
    assert_eq!(orgs[1].label, "Rails");

    let none = detect_organizations(&DetectingFetcher(vec![]), "alice", &range);
    assert_eq!(none, default_orgs());
}
