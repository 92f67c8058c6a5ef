#![forbid(unsafe_code)]

//! `contribgraph` renders a GitHub-style contribution calendar for several organizations at once,
//! coloring each day by who got the contributions.
//!
//! # Features
//!
//! - `render`: layout + SVG rendering (`contribgraph::render`)
//! - `raster`: PNG output via pure-Rust SVG rasterization with an embedded font

pub use contribgraph_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use contribgraph_render::card::{graph_image_url, render_card_html};
    pub use contribgraph_render::color::{
        EMPTY_CELL_FILL, GradientDef, Gradients, Rgb, cell_fill, cell_fill_with_gradient,
        generate_gradients, hex_to_rgb,
    };
    pub use contribgraph_render::model::{GraphLayout, LayoutConfig};
    pub use contribgraph_render::svg::{SvgRenderOptions, render_graph_svg};
    pub use contribgraph_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use contribgraph_render::{LayoutOptions, generate_svg, layout_graph};

    use contribgraph_core::{DailyCounts, Grid, Organization, generate_grid_data};

    #[cfg(feature = "raster")]
    pub mod raster;

    /// Bundles layout and SVG options so callers pass only the data.
    #[derive(Clone, Default)]
    pub struct GraphRenderer {
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
    }

    impl GraphRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn layout(
            &self,
            grid: &Grid,
            organizations: &[Organization],
            months: u32,
            username: &str,
        ) -> GraphLayout {
            layout_graph(grid, organizations, months, username, &self.layout)
        }

        pub fn render_svg(
            &self,
            grid: &Grid,
            organizations: &[Organization],
            months: u32,
            username: &str,
        ) -> String {
            render_graph_svg(
                &self.layout(grid, organizations, months, username),
                &self.svg,
            )
        }

        /// Builds the grid from raw counts and renders it.
        pub fn render_counts_svg(
            &self,
            counts: &DailyCounts,
            organizations: &[Organization],
            months: u32,
            username: &str,
        ) -> String {
            let grid = generate_grid_data(counts, organizations, months);
            self.render_svg(&grid, organizations, months, username)
        }

        #[cfg(feature = "raster")]
        pub fn render_png(
            &self,
            grid: &Grid,
            organizations: &[Organization],
            months: u32,
            username: &str,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let layout = self.layout(grid, organizations, months, username);
            let svg = render_graph_svg(&layout, &raster::raster_svg_options());
            raster::svg_to_png(&svg, raster)
        }
    }
}
