use crate::color::GradientDef;
use serde::{Deserialize, Serialize};

/// Fixed geometry of a contribution graph. Cell size is the only dimension that varies (with the
/// month count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub padding: f64,
    pub gap: f64,
    pub title_height: f64,
    pub month_label_height: f64,
    pub legend_height: f64,
    pub bottom_margin: f64,
    pub legend_swatch_size: f64,
    /// Added to each legend entry's measured label width.
    pub legend_spacing: f64,
    pub label_font_size: f64,
    pub day_label_font_size: f64,
    pub title_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            gap: 2.0,
            title_height: 25.0,
            month_label_height: 20.0,
            legend_height: 30.0,
            bottom_margin: 10.0,
            legend_swatch_size: 12.0,
            legend_spacing: 30.0,
            label_font_size: 10.0,
            day_label_font_size: 9.0,
            title_font_size: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellLayout {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: String,
    pub opacity: f64,
    /// `"<date>: <label>: <count>, ..."` for cells with contributions.
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItemLayout {
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLayout {
    pub config: LayoutConfig,
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub title: TextLabel,
    pub month_labels: Vec<TextLabel>,
    pub day_labels: Vec<TextLabel>,
    /// Week-major: seven cells per week column, Sunday first.
    pub cells: Vec<CellLayout>,
    pub legend: Vec<LegendItemLayout>,
    pub gradients: Vec<GradientDef>,
}
