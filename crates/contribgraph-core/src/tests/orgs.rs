use crate::*;

#[test]
fn parse_orgs_defaults_to_rails_and_hotwire() {
    for spec in [None, Some(""), Some("   "), Some(",,")] {
        let orgs = parse_orgs(spec);
        assert_eq!(orgs, default_orgs(), "spec {spec:?}");
    }
}

#[test]
fn parse_orgs_reads_name_color_label_triples() {
    let orgs = parse_orgs(Some("rails:CC0000:Rails,hotwired:1a1a1a:Hotwire"));
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0], Organization::new("rails", "#CC0000", "Rails"));
    assert_eq!(orgs[1], Organization::new("hotwired", "#1a1a1a", "Hotwire"));
}

#[test]
fn parse_orgs_fills_missing_color_and_label() {
    let orgs = parse_orgs(Some("acme:,widgets::,gizmos:ff00ff"));
    assert_eq!(orgs[0], Organization::new("acme", DEFAULT_ORG_COLOR, "acme"));
    assert_eq!(orgs[1], Organization::new("widgets", DEFAULT_ORG_COLOR, "widgets"));
    assert_eq!(orgs[2], Organization::new("gizmos", "#ff00ff", "gizmos"));
}

#[test]
fn parse_orgs_resolves_bare_names_through_presets() {
    let orgs = parse_orgs(Some("vercel, k8s ,react,htmx,unknown-org"));
    let names: Vec<&str> = orgs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        ["vercel", "kubernetes", "facebook", "bigskysoftware", "unknown-org"]
    );
    assert_eq!(orgs[0].color, "#000000");
    assert_eq!(orgs[1].label, "Kubernetes");
    assert_eq!(orgs[2].label, "React");
    assert_eq!(orgs[3].label, "htmx");
    assert_eq!(orgs[4].color, DEFAULT_ORG_COLOR);
    assert_eq!(orgs[4].label, "unknown-org");
}

#[test]
fn explicit_color_keeps_the_typed_name() {
    let orgs = parse_orgs(Some("react:ff0000"));
    assert_eq!(orgs[0], Organization::new("react", "#ff0000", "react"));
}

#[test]
fn presets_are_case_insensitive_and_follow_aliases() {
    assert_eq!(preset("RUST").map(|p| p.label), Some("Rust"));
    assert_eq!(preset("rust-lang").map(|p| p.color), Some("#DEA584"));
    assert!(preset("definitely-not-a-preset").is_none());

    assert_eq!(github_login("k8s"), "kubernetes");
    assert_eq!(github_login("React"), "facebook");
    assert_eq!(github_login("Some-Org"), "some-org");
}

#[test]
fn auto_detect_palette_is_varied_hex() {
    assert!(AUTO_DETECT_PALETTE.len() >= 10);
    let mut seen = std::collections::HashSet::new();
    for color in AUTO_DETECT_PALETTE {
        assert!(color.starts_with('#') && color.len() == 7, "{color}");
        assert!(seen.insert(color.to_ascii_lowercase()), "duplicate {color}");
    }
}

#[test]
fn auto_detected_organizations_prefer_presets_then_cycle_palette() {
    let rails = auto_detect_organization("rails", 3);
    assert_eq!(rails.color, "#CC0000");
    assert_eq!(rails.label, "Rails");

    let first = auto_detect_organization("acme", 0);
    assert_eq!(first.color, AUTO_DETECT_PALETTE[0]);
    assert_eq!(first.label, "acme");

    let wrapped = auto_detect_organization("acme", AUTO_DETECT_PALETTE.len() + 1);
    assert_eq!(wrapped.color, AUTO_DETECT_PALETTE[1]);
}
