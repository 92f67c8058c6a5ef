//! Cell fills: solid organization colors, two-color averages and diagonal gradients.

use contribgraph_core::{DEFAULT_ORG_COLOR, DayCell, Grid, Organization};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::OnceLock;

/// Fill of out-of-range slots and days without contributions.
pub const EMPTY_CELL_FILL: &str = "#ebedf0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
    })
}

/// Parses `#rrggbb` or `rrggbb` (any case). Anything else, short hex included, is black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let Some(caps) = hex_re().captures(hex) else {
        return Rgb::default();
    };
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
    Rgb {
        r: channel(1),
        g: channel(2),
        b: channel(3),
    }
}

fn org_color<'a>(organizations: &'a [Organization], name: &str) -> &'a str {
    Organization::find(organizations, name)
        .map(|o| o.color.as_str())
        .unwrap_or(DEFAULT_ORG_COLOR)
}

/// Solid fill for a cell.
///
/// Two or more contributors are averaged channel-wise (rounded half up) from the first two in the
/// cell's own order; the rest are ignored.
pub fn cell_fill(cell: Option<&DayCell>, organizations: &[Organization]) -> String {
    let Some(cell) = cell.filter(|c| c.total > 0) else {
        return EMPTY_CELL_FILL.to_string();
    };

    let mut names = cell.contributions.keys();
    let (Some(first), second) = (names.next(), names.next()) else {
        return EMPTY_CELL_FILL.to_string();
    };
    let Some(second) = second else {
        return org_color(organizations, first).to_string();
    };

    let a = hex_to_rgb(org_color(organizations, first));
    let b = hex_to_rgb(org_color(organizations, second));
    let avg = |x: u8, y: u8| ((u16::from(x) + u16::from(y) + 1) / 2) as u8;
    format!(
        "rgb({},{},{})",
        avg(a.r, b.r),
        avg(a.g, b.g),
        avg(a.b, b.b)
    )
}

/// A two-stop, hard-edged diagonal gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientDef {
    pub id: String,
    pub start_color: String,
    pub end_color: String,
}

impl GradientDef {
    pub fn write_svg(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="50%" style="stop-color:{c0}"/><stop offset="50%" style="stop-color:{c1}"/></linearGradient>"#,
            id = crate::svg::escape_xml(&self.id),
            c0 = crate::svg::escape_xml(&self.start_color),
            c1 = crate::svg::escape_xml(&self.end_color),
        );
    }
}

/// Gradients for every distinct multi-organization set in a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradients {
    pub defs: Vec<GradientDef>,
    /// Sorted, dash-joined organization names -> gradient id.
    pub by_key: IndexMap<String, String>,
}

impl Gradients {
    /// `<linearGradient>` elements for a `<defs>` block.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for def in &self.defs {
            def.write_svg(&mut out);
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }
}

fn sorted_names(cell: &DayCell) -> Vec<&str> {
    let mut names: Vec<&str> = cell.contributions.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Key shared by every cell with the same set of contributors, whatever their order.
pub fn gradient_key(cell: &DayCell) -> String {
    sorted_names(cell).join("-")
}

/// Allocates `grad-0`, `grad-1`, ... in grid order, one per distinct contributor set.
///
/// Stops use the first two colors in sorted-name order.
pub fn generate_gradients(grid: &Grid, organizations: &[Organization]) -> Gradients {
    let mut gradients = Gradients::default();
    for cell in grid.cells().filter(|c| c.contributions.len() > 1) {
        let key = gradient_key(cell);
        if gradients.by_key.contains_key(&key) {
            continue;
        }
        let names = sorted_names(cell);
        let start = org_color(organizations, names[0]);
        let end = names.get(1).map_or(start, |n| org_color(organizations, n));
        let id = format!("grad-{}", gradients.defs.len());
        gradients.defs.push(GradientDef {
            id: id.clone(),
            start_color: start.to_string(),
            end_color: end.to_string(),
        });
        gradients.by_key.insert(key, id);
    }
    gradients
}

/// Like [`cell_fill`], but multi-organization cells reference their gradient (`url(#grad-N)`)
/// when one was generated.
pub fn cell_fill_with_gradient(
    cell: Option<&DayCell>,
    organizations: &[Organization],
    gradients: &Gradients,
) -> String {
    let Some(day) = cell.filter(|c| c.total > 0) else {
        return EMPTY_CELL_FILL.to_string();
    };
    if day.contributions.len() == 1 {
        return cell_fill(cell, organizations);
    }
    match gradients.get(&gradient_key(day)) {
        Some(id) => format!("url(#{id})"),
        None => cell_fill(cell, organizations),
    }
}
