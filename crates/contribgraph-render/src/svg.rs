use crate::model::GraphLayout;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// The output is headed for a rasterizer: hover-only styling is left out.
    pub for_raster: bool,
    /// Emitted as the root `font-family` when set.
    pub font_family: Option<String>,
}

const HOVER_STYLE: &str = "rect { transition: opacity 0.1s; } rect:hover { opacity: 0.8 !important; }";

pub fn render_graph_svg(layout: &GraphLayout, options: &SvgRenderOptions) -> String {
    let w = fmt(layout.width);
    let h = fmt(layout.height);
    let cfg = &layout.config;

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#
    );
    if let Some(family) = options.font_family.as_deref() {
        let _ = write!(&mut out, r#" font-family="{}""#, escape_xml(family));
    }
    out.push('>');

    if !options.for_raster {
        let _ = write!(&mut out, "<style>{HOVER_STYLE}</style>");
    }

    out.push_str("<defs>");
    for def in &layout.gradients {
        def.write_svg(&mut out);
    }
    out.push_str("</defs>");

    out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff" rx="6"/>"##);

    let _ = write!(
        &mut out,
        r##"<text x="{x}" y="{y}" font-size="{size}" font-weight="bold" fill="#333">{text}</text>"##,
        x = fmt(layout.title.x),
        y = fmt(layout.title.y),
        size = fmt(cfg.title_font_size),
        text = escape_xml(&layout.title.text)
    );

    for label in &layout.month_labels {
        let _ = write!(
            &mut out,
            r##"<text x="{x}" y="{y}" font-size="{size}" fill="#666">{text}</text>"##,
            x = fmt(label.x),
            y = fmt(label.y),
            size = fmt(cfg.label_font_size),
            text = escape_xml(&label.text)
        );
    }

    for label in &layout.day_labels {
        let _ = write!(
            &mut out,
            r##"<text x="{x}" y="{y}" font-size="{size}" fill="#666" text-anchor="end">{text}</text>"##,
            x = fmt(label.x),
            y = fmt(label.y),
            size = fmt(cfg.day_label_font_size),
            text = escape_xml(&label.text)
        );
    }

    for cell in &layout.cells {
        let _ = write!(
            &mut out,
            r#"<rect x="{x}" y="{y}" width="{s}" height="{s}" rx="2" fill="{fill}" opacity="{op}">"#,
            x = fmt(cell.x),
            y = fmt(cell.y),
            s = fmt(cell.size),
            fill = escape_xml(&cell.fill),
            op = fmt(cell.opacity)
        );
        if let Some(tooltip) = cell.tooltip.as_deref() {
            let _ = write!(&mut out, "<title>{}</title>", escape_xml(tooltip));
        }
        out.push_str("</rect>");
    }

    let swatch = fmt(cfg.legend_swatch_size);
    for item in &layout.legend {
        let _ = write!(
            &mut out,
            r#"<rect x="{x}" y="{y}" width="{s}" height="{s}" rx="2" fill="{fill}"/>"#,
            x = fmt(item.x),
            y = fmt(item.y),
            s = swatch,
            fill = escape_xml(&item.color)
        );
        let _ = write!(
            &mut out,
            r##"<text x="{x}" y="{y}" font-size="{size}" fill="#666">{text}</text>"##,
            x = fmt(item.x + 16.0),
            y = fmt(item.y + 10.0),
            size = fmt(cfg.label_font_size),
            text = escape_xml(&item.label)
        );
    }

    out.push_str("</svg>");
    out
}

/// Shortest decimal form, without `-0` or float noise from layout arithmetic.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
