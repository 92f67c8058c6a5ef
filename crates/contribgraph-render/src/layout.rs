use crate::color::{EMPTY_CELL_FILL, cell_fill_with_gradient, generate_gradients};
use crate::model::{CellLayout, GraphLayout, LayoutConfig, LegendItemLayout, TextLabel};
use crate::text::{TextMeasurer, TextStyle};
use chrono::Datelike;
use contribgraph_core::{Grid, Organization, WEEK_LEN, cell_size};

/// Rows that carry a weekday label (0 = Sunday).
const DAY_LABELS: [(usize, &str); 3] = [(1, "Mon"), (3, "Wed"), (5, "Fri")];

/// Text of the graph title.
pub fn title_text(username: &str) -> String {
    format!("🌈 OSS Contributions - {username}")
}

pub fn layout_graph(
    grid: &Grid,
    organizations: &[Organization],
    months: u32,
    username: &str,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> GraphLayout {
    let cs = f64::from(cell_size(months));
    let step = cs + config.gap;
    let weeks = grid.week_count();

    let width = config.padding * 2.0 + weeks as f64 * step;
    let height = config.title_height
        + config.month_label_height
        + WEEK_LEN as f64 * step
        + config.legend_height
        + config.bottom_margin;
    let grid_top = config.title_height + config.month_label_height;
    let column_x = |week: usize| config.padding + week as f64 * step;

    // One label per month transition, at the first week whose first in-range day falls in it.
    let mut month_labels = Vec::new();
    let mut last_month = None;
    for (wi, week) in grid.weeks.iter().enumerate() {
        let Some(first) = week.iter().flatten().next() else {
            continue;
        };
        let month = first.date.month0();
        if last_month != Some(month) {
            month_labels.push(TextLabel {
                text: first.date.format("%b").to_string(),
                x: column_x(wi),
                y: grid_top - 5.0,
            });
            last_month = Some(month);
        }
    }

    let day_labels = DAY_LABELS
        .iter()
        .map(|(row, text)| TextLabel {
            text: (*text).to_string(),
            x: config.padding - 5.0,
            y: grid_top + *row as f64 * step + cs / 2.0 + 3.0,
        })
        .collect();

    let gradients = generate_gradients(grid, organizations);

    let mut cells = Vec::with_capacity(weeks * WEEK_LEN);
    for (wi, week) in grid.weeks.iter().enumerate() {
        for (di, slot) in week.iter().enumerate() {
            let (fill, opacity) = match slot {
                Some(day) => (
                    cell_fill_with_gradient(Some(day), organizations, &gradients),
                    1.0,
                ),
                None => (EMPTY_CELL_FILL.to_string(), 0.3),
            };
            let tooltip = slot.as_ref().filter(|d| d.total > 0).map(|day| {
                let parts: Vec<String> = day
                    .contributions
                    .iter()
                    .map(|(name, count)| {
                        let label = Organization::find(organizations, name)
                            .map(Organization::display_label)
                            .unwrap_or(name.as_str());
                        format!("{label}: {count}")
                    })
                    .collect();
                format!("{}: {}", day.iso_date(), parts.join(", "))
            });
            cells.push(CellLayout {
                x: column_x(wi),
                y: grid_top + di as f64 * step,
                size: cs,
                fill,
                opacity,
                tooltip,
            });
        }
    }

    let legend_style = TextStyle {
        font_size: config.label_font_size,
        ..TextStyle::default()
    };
    let legend_y = grid_top + WEEK_LEN as f64 * step + 10.0;
    let mut legend_x = config.padding;
    let mut legend = Vec::with_capacity(organizations.len());
    for org in organizations {
        let label = org.display_label().to_string();
        let advance = measurer.measure(&label, &legend_style).width + config.legend_spacing;
        legend.push(LegendItemLayout {
            label,
            color: org.color.clone(),
            x: legend_x,
            y: legend_y,
        });
        legend_x += advance;
    }

    tracing::debug!(
        weeks,
        cell_size = cs,
        gradients = gradients.defs.len(),
        "laid out contribution graph"
    );

    GraphLayout {
        config: config.clone(),
        width,
        height,
        cell_size: cs,
        title: TextLabel {
            text: title_text(username),
            x: config.padding,
            y: 18.0,
        },
        month_labels,
        day_labels,
        cells,
        legend,
        gradients: gradients.defs,
    }
}
