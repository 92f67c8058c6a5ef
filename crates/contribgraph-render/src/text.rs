use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 10.0,
            font_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Width from character count alone, so layouts never depend on installed fonts.
///
/// This is an approximation: wide glyphs and long labels can overflow their slot once a real font
/// draws them.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    /// Advance per character as a multiple of the font size (0 means 0.6).
    pub char_width_factor: f64,
    /// Line height as a multiple of the font size (0 means 1.2).
    pub line_height_factor: f64,
}

impl DeterministicTextMeasurer {
    /// The legend heuristic: 7 units per character at the legend's 10-unit font size.
    pub fn legend() -> Self {
        Self {
            char_width_factor: 0.7,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let font_size = style.font_size.max(1.0);
        let chars = text.chars().count();
        TextMetrics {
            width: chars as f64 * font_size * char_width_factor,
            height: font_size * line_height_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_measurer_advances_seven_units_per_char() {
        let m = DeterministicTextMeasurer::legend();
        let w = m.measure("Rails", &TextStyle::default()).width;
        assert!((w - 35.0).abs() < 1e-9, "{w}");
        assert_eq!(m.measure("", &TextStyle::default()).width, 0.0);
    }

    #[test]
    fn zero_factors_fall_back_to_defaults() {
        let m = DeterministicTextMeasurer::default();
        let style = TextStyle {
            font_size: 20.0,
            ..TextStyle::default()
        };
        let metrics = m.measure("ab", &style);
        assert!((metrics.width - 24.0).abs() < 1e-9);
        assert!((metrics.height - 24.0).abs() < 1e-9);
    }
}
