//! Style configuration
//!
//! Fluent config in the same shape as the rest of the widget set. Every
//! style mutation on a live control triggers a full relayout; the config
//! itself is plain data.

use segstrip_core::geometry::Color;

/// Indicator geometry variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightStyle {
    /// Full-height background behind the active segment
    #[default]
    Background,
    /// Thin bar along the top edge of the active segment
    TopEdge,
    /// Thin bar along the bottom edge of the active segment
    BottomEdge,
}

/// Font for segment labels
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name; `None` uses the host default
    pub family: Option<String>,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: None,
            size: 14.0,
        }
    }
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
        }
    }
}

/// Segmented control appearance
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Indicator fill color
    pub highlight_color: Color,
    /// Content color of unselected segments
    pub tint: Color,
    /// Content color of the selected segment
    pub highlight_tint: Color,
    /// Bar thickness for the top/bottom edge highlight styles
    pub edge_height: f32,
    /// Indicator geometry variant
    pub highlight_style: HighlightStyle,
    /// Label font
    pub font: Font,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            highlight_color: Color::from_hex(0x3478F6),
            tint: Color::rgba(0.45, 0.45, 0.47, 1.0),
            highlight_tint: Color::WHITE,
            edge_height: 3.0,
            highlight_style: HighlightStyle::default(),
            font: Font::default(),
        }
    }
}

impl StyleConfig {
    /// Set the indicator fill color
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    /// Set the unselected content color
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    /// Set the selected content color
    pub fn highlight_tint(mut self, color: Color) -> Self {
        self.highlight_tint = color;
        self
    }

    /// Set the edge-highlight bar thickness
    pub fn edge_height(mut self, height: f32) -> Self {
        self.edge_height = height;
        self
    }

    /// Set the indicator geometry variant
    pub fn highlight_style(mut self, style: HighlightStyle) -> Self {
        self.highlight_style = style;
        self
    }

    /// Set the label font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}
