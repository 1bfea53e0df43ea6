//! Per-series style attributes and the options structs consumed by the
//! plot operations.
//!
//! Each chart family gets its own options struct with a `Default` so call
//! sites only name the fields they care about. Colors are a proper sum type
//! rather than a reserved `"auto"` string compared by identity.

use serde::{Deserialize, Serialize};

/// Series color
///
/// `Auto` leaves color selection to the renderer's default cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Let the renderer pick from its default color cycle
    #[default]
    Auto,

    /// A named color understood by the renderer (e.g. "blue", "dark-red")
    Named(String),

    /// An explicit RGB triple
    Rgb(u8, u8, u8),
}

impl Color {
    /// Convenience constructor for a named color.
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    /// The renderer color spec, or `None` for the automatic cycle.
    pub(crate) fn spec(&self) -> Option<String> {
        match self {
            Color::Auto => None,
            Color::Named(name) => Some(format!("'{name}'")),
            Color::Rgb(r, g, b) => Some(format!("rgb '#{r:02x}{g:02x}{b:02x}'")),
        }
    }
}

/// Dash pattern of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    DashDotDot,
}

impl LineStyle {
    /// The renderer dash type index, or `None` for a plain solid line.
    pub(crate) fn dash_index(self) -> Option<u8> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(2),
            LineStyle::Dotted => Some(3),
            LineStyle::DashDot => Some(4),
            LineStyle::DashDotDot => Some(5),
        }
    }
}

/// Point marker of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// No marker; line series are drawn with lines only
    #[default]
    None,
    Dot,
    Plus,
    Cross,
    Star,
    Square,
    Circle,
    Triangle,
    Diamond,
}

impl Marker {
    /// The renderer point type index, or `None` when no marker is drawn.
    pub(crate) fn point_index(self) -> Option<u8> {
        match self {
            Marker::None => None,
            Marker::Plus => Some(1),
            Marker::Cross => Some(2),
            Marker::Star => Some(3),
            Marker::Square => Some(5),
            Marker::Circle => Some(6),
            Marker::Dot => Some(7),
            Marker::Triangle => Some(9),
            Marker::Diamond => Some(13),
        }
    }
}

/// Axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

/// Placement of the figure legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    Outside,
}

impl LegendPosition {
    pub(crate) fn key_spec(self) -> &'static str {
        match self {
            LegendPosition::TopRight => "right top",
            LegendPosition::TopLeft => "left top",
            LegendPosition::BottomRight => "right bottom",
            LegendPosition::BottomLeft => "left bottom",
            LegendPosition::Outside => "outside",
        }
    }
}

/// Options for a line series (2D and 3D)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Legend entry; empty for none
    pub title: String,

    pub color: Color,

    /// Line width; 1.0 is the renderer default
    pub width: f64,

    pub style: LineStyle,

    /// When set, samples are marked as well as connected
    pub marker: Marker,

    /// Pass the data through the renderer's `smooth unique` filter
    pub smooth: bool,

    /// Derive a padded y range from the written data before plotting
    pub auto_range: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: Color::Auto,
            width: 1.0,
            style: LineStyle::Solid,
            marker: Marker::None,
            smooth: true,
            auto_range: false,
        }
    }
}

/// Options for a scatter series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointOptions {
    /// Legend entry; empty for none
    pub title: String,

    pub color: Color,

    /// Marker shape; `Marker::None` falls back to a filled dot
    pub marker: Marker,

    /// Marker size; 1.0 is the renderer default
    pub size: f64,

    /// Derive a padded y range from the written data before plotting
    pub auto_range: bool,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: Color::Auto,
            marker: Marker::Dot,
            size: 1.0,
            auto_range: false,
        }
    }
}

/// Options for a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOptions {
    /// Legend entry; empty for none
    pub title: String,

    pub color: Color,

    /// Width of each value bin
    pub bin_width: f64,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: Color::Auto,
            bin_width: 1.0,
        }
    }
}

/// Options for a filled region between two curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    /// Legend entry; empty for none
    pub title: String,

    pub color: Color,

    /// Fill transparency, 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: Color::Auto,
            opacity: 0.3,
        }
    }
}

/// Options for a grouped box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxPlotOptions {
    /// Width of each box
    pub box_width: f64,

    /// Line color applied to every group; `Auto` keeps the default cycle
    pub color: Color,

    /// Emit category labels as x tick marks
    pub show_category_ticks: bool,
}

impl Default for BoxPlotOptions {
    fn default() -> Self {
        Self {
            box_width: 0.5,
            color: Color::Auto,
            show_category_ticks: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_color_has_no_spec() {
        assert_eq!(Color::Auto.spec(), None);
    }

    #[test]
    fn named_and_rgb_color_specs() {
        assert_eq!(Color::named("blue").spec().as_deref(), Some("'blue'"));
        assert_eq!(
            Color::Rgb(0x1a, 0x2b, 0x3c).spec().as_deref(),
            Some("rgb '#1a2b3c'")
        );
    }

    #[test]
    fn solid_line_has_no_dash_index() {
        assert_eq!(LineStyle::Solid.dash_index(), None);
        assert_eq!(LineStyle::DashDot.dash_index(), Some(4));
    }
}
