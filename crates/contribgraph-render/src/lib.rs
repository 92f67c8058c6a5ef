#![forbid(unsafe_code)]

//! Headless layout and SVG rendering for contribution graphs.
//!
//! Rendering is a pure function of the grid, the organizations, the month count and the
//! username. Text is measured by character count (see [`text::DeterministicTextMeasurer`]), so
//! output is byte-identical across machines.

pub mod card;
pub mod color;
pub mod layout;
pub mod model;
pub mod svg;
pub mod text;

use crate::model::{GraphLayout, LayoutConfig};
use crate::svg::{SvgRenderOptions, render_graph_svg};
use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use contribgraph_core::{Grid, Organization};
use std::sync::Arc;

pub use card::render_card_html;
pub use color::{
    EMPTY_CELL_FILL, Gradients, Rgb, cell_fill, cell_fill_with_gradient, generate_gradients,
    hex_to_rgb,
};

#[derive(Clone)]
pub struct LayoutOptions {
    pub config: LayoutConfig,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            text_measurer: Arc::new(DeterministicTextMeasurer::legend()),
        }
    }
}

pub fn layout_graph(
    grid: &Grid,
    organizations: &[Organization],
    months: u32,
    username: &str,
    options: &LayoutOptions,
) -> GraphLayout {
    layout::layout_graph(
        grid,
        organizations,
        months,
        username,
        &options.config,
        options.text_measurer.as_ref(),
    )
}

/// Lays out and renders `grid` as an SVG document with the default geometry.
pub fn generate_svg(
    grid: &Grid,
    organizations: &[Organization],
    months: u32,
    username: &str,
    options: &SvgRenderOptions,
) -> String {
    let layout = layout_graph(
        grid,
        organizations,
        months,
        username,
        &LayoutOptions::default(),
    );
    render_graph_svg(&layout, options)
}
