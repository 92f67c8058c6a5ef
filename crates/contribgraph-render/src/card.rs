//! Social card page: Open Graph and Twitter meta tags pointing at the PNG graph.

use crate::svg::escape_xml;
use contribgraph_core::{GraphQuery, OutputFormat, Result};
use std::fmt::Write as _;

/// Path of the graph endpoint the card image points to, relative to the base URL.
pub const GRAPH_PATH: &str = "/api/graph";
pub const CARD_PATH: &str = "/api/card";

/// URL of the PNG rendition of `query`.
pub fn graph_image_url(query: &GraphQuery, base_url: &str) -> String {
    format!(
        "{}{GRAPH_PATH}?{}",
        base_url.trim_end_matches('/'),
        query.to_query_string(OutputFormat::Png)
    )
}

fn description(query: &GraphQuery) -> String {
    if query.auto_detect_orgs() {
        return "Contributions to auto-detected organizations".to_string();
    }
    let labels: Vec<String> = query
        .organizations()
        .iter()
        .map(|o| o.display_label().to_string())
        .collect();
    format!("Contributions to {}", labels.join(", "))
}

/// HTML page for link previews. Fails when the query has no username.
pub fn render_card_html(query: &GraphQuery, base_url: &str) -> Result<String> {
    let username = query.username()?;
    let base = base_url.trim_end_matches('/');

    let title = escape_xml(&format!("OSS Contributions - {username}"));
    let description = escape_xml(&description(query));
    let image = escape_xml(&graph_image_url(query, base));
    let page = escape_xml(&format!(
        "{base}{CARD_PATH}?{}",
        query.to_query_string(query.format)
    ));

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(out, "  <title>{title}</title>");
    out.push('\n');
    let _ = writeln!(out, r#"  <meta property="og:type" content="website" />"#);
    let _ = writeln!(out, r#"  <meta property="og:title" content="{title}" />"#);
    let _ = writeln!(
        out,
        r#"  <meta property="og:description" content="{description}" />"#
    );
    let _ = writeln!(out, r#"  <meta property="og:image" content="{image}" />"#);
    let _ = writeln!(out, r#"  <meta property="og:url" content="{page}" />"#);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"  <meta name="twitter:card" content="summary_large_image" />"#
    );
    let _ = writeln!(out, r#"  <meta name="twitter:title" content="{title}" />"#);
    let _ = writeln!(
        out,
        r#"  <meta name="twitter:description" content="{description}" />"#
    );
    let _ = writeln!(out, r#"  <meta name="twitter:image" content="{image}" />"#);
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(
        out,
        r#"  <img src="{image}" alt="{title}" style="max-width: 100%;" />"#
    );
    out.push_str("</body>\n</html>\n");
    Ok(out)
}
