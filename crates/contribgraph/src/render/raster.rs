#![forbid(unsafe_code)]

use super::SvgRenderOptions;
use std::sync::{Arc, OnceLock};
use usvg::fontdb;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG: {0}")]
    SvgParse(String),
    #[error("embedded font could not be loaded")]
    FontUnavailable,
    #[error("failed to allocate {width}x{height} pixmap for raster rendering")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid raster scale: {0}")]
    InvalidScale(f32),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Family name of the bundled font; raster SVGs ask for it explicitly.
pub const EMBEDDED_FONT_FAMILY: &str = "DejaVu Sans";

const FONT_REGULAR: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSans.ttf");
const FONT_BOLD: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Output pixels per SVG unit.
    pub scale: f32,
    /// Fill behind the image (`white`, `#rrggbb`, ...); transparent when unset.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: None,
        }
    }
}

/// SVG options for output that will be rasterized: no hover styling, embedded font family.
pub fn raster_svg_options() -> SvgRenderOptions {
    SvgRenderOptions {
        for_raster: true,
        font_family: Some(EMBEDDED_FONT_FAMILY.to_string()),
    }
}

/// The bundled fonts, loaded once per process. System fonts are never consulted.
pub fn font_database() -> Result<Arc<fontdb::Database>> {
    static DB: OnceLock<Option<Arc<fontdb::Database>>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_font_data(FONT_REGULAR.to_vec());
        db.load_font_data(FONT_BOLD.to_vec());
        if db.is_empty() {
            return None;
        }
        db.set_sans_serif_family(EMBEDDED_FONT_FAMILY);
        tracing::debug!(faces = db.len(), "loaded embedded font database");
        Some(Arc::new(db))
    })
    .clone()
    .ok_or(RasterError::FontUnavailable)
}

/// Rasterizes SVG markup to PNG bytes.
///
/// The output is `ceil(width * scale)` by `ceil(height * scale)` pixels, drawing the whole
/// viewBox; the SVG coordinate system is unchanged.
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

/// PNG at `scale` with no background.
pub fn convert_to_raster(svg: &str, scale: f32) -> Result<Vec<u8>> {
    svg_to_png(
        svg,
        &RasterOptions {
            scale,
            ..RasterOptions::default()
        },
    )
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RasterError::InvalidScale(scale));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb = font_database()?;
    opt.font_family = EMBEDDED_FONT_FAMILY.to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RasterError::SvgParse(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::PixmapAlloc { width, height })?;

    if let Some(color) = background.and_then(parse_tiny_skia_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    tracing::debug!(width, height, scale, "rasterized svg");
    Ok(pixmap)
}

fn parse_tiny_skia_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(tiny_skia::Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn malformed_svg_is_an_error() {
        let err = svg_to_png("<svg", &RasterOptions::default()).unwrap_err();
        assert!(matches!(err, RasterError::SvgParse(_)));
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert!(matches!(
            convert_to_raster(SQUARE, 0.0),
            Err(RasterError::InvalidScale(_))
        ));
    }

    #[test]
    fn font_database_is_shared() {
        let a = font_database().unwrap();
        let b = font_database().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.len() >= 2);
    }

    #[test]
    fn background_colors() {
        assert!(parse_tiny_skia_color("white").is_some());
        assert!(parse_tiny_skia_color("#ffcc00").is_some());
        assert!(parse_tiny_skia_color("#ffcc0080").is_some());
        assert!(parse_tiny_skia_color("#fc0").is_none());
        assert!(parse_tiny_skia_color("rebeccapurple").is_none());
    }
}
