use chrono::NaiveDate;
use contribgraph::render::GraphRenderer;
use contribgraph::time::with_fixed_today;
use contribgraph::{DailyCounts, default_orgs, generate_grid_data};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn renderer_matches_grid_then_svg() {
    let orgs = default_orgs();
    let mut counts = DailyCounts::new();
    counts.set("rails", ymd(2024, 6, 10), 3);
    counts.set("hotwired", ymd(2024, 6, 10), 2);

    let renderer = GraphRenderer::new();
    let (direct, staged) = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        let grid = generate_grid_data(&counts, &orgs, 6);
        (
            renderer.render_counts_svg(&counts, &orgs, 6, "alice"),
            renderer.render_svg(&grid, &orgs, 6, "alice"),
        )
    });
    assert_eq!(direct, staged);

    let doc = roxmltree::Document::parse(&direct).expect("well-formed svg");
    assert_eq!(doc.root_element().attribute("width"), Some("404"));
    assert!(direct.contains(r#"fill="url(#grad-0)""#));
}

#[test]
fn one_month_graph_pads_partial_weeks() {
    let orgs = default_orgs();
    let layout = with_fixed_today(Some(ymd(2024, 6, 15)), || {
        let grid = generate_grid_data(&DailyCounts::new(), &orgs, 1);
        GraphRenderer::new().layout(&grid, &orgs, 1, "alice")
    });
    // 2024-05-15 is a Wednesday.
    assert_eq!(layout.cells.len() % 7, 0);
    assert!(layout.cells.iter().any(|c| c.opacity < 1.0));
    assert!(layout.cells.iter().all(|c| c.tooltip.is_none()));
}
