//! Colors, gradients and line styling.
//!
//! Styles are plain data handed to renderers. They never influence curve
//! geometry or hit testing.

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.23, 0.19, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.2, 0.78, 0.35, 1.0);
    /// Bright orange, the fallback line color.
    pub const ORANGE_BRIGHT: Self = Self::new(1.0, 0.47, 0.17, 1.0);
}

/// A two-stop gradient. A solid color is a gradient with equal stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGradient {
    /// First stop.
    pub start: Color,
    /// Last stop.
    pub end: Color,
}

impl ColorGradient {
    /// Gradient between two colors.
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Solid color.
    pub const fn solid(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Solid bright orange.
    pub const ORANGE_BRIGHT: Self = Self::solid(Color::ORANGE_BRIGHT);
    /// Red to black.
    pub const RED_BLACK: Self = Self::new(Color::RED, Color::BLACK);
    /// Green to red.
    pub const GREEN_RED: Self = Self::new(Color::GREEN, Color::RED);
    /// White to black.
    pub const WHITE_BLACK: Self = Self::new(Color::WHITE, Color::BLACK);

    /// Check whether both stops are the same color.
    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

/// Pick the gradient for the `index`-th data line, wrapping around.
///
/// An empty palette falls back to [`ColorGradient::ORANGE_BRIGHT`].
pub fn rotate_gradient(palette: &[ColorGradient], index: usize) -> ColorGradient {
    if palette.is_empty() {
        return ColorGradient::ORANGE_BRIGHT;
    }
    palette[index % palette.len()]
}

/// How stroked line segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    /// Sharp corners.
    Miter,
    /// Rounded corners.
    #[default]
    Round,
    /// Cut-off corners.
    Bevel,
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStyle {
    /// Color of vertical guide lines.
    pub vertical_line_color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Join style.
    pub join: LineJoin,
}

impl LineStyle {
    /// Default style with a custom width.
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            vertical_line_color: Color::WHITE,
            width: 3.0,
            join: LineJoin::Round,
        }
    }
}

/// Chart-wide colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartStyle {
    /// Fill under the curve, painted bottom to top.
    pub background: ColorGradient,
    /// Stroke gradients, painted leading to trailing.
    pub foreground: Vec<ColorGradient>,
}

impl ChartStyle {
    /// Style with one foreground gradient.
    pub fn new(background: ColorGradient, foreground: ColorGradient) -> Self {
        Self {
            background,
            foreground: vec![foreground],
        }
    }

    /// Style with a palette of foreground gradients.
    pub fn with_palette(background: ColorGradient, foreground: Vec<ColorGradient>) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Foreground gradient for the `index`-th data line.
    pub fn foreground_gradient(&self, index: usize) -> ColorGradient {
        rotate_gradient(&self.foreground, index)
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::new(
            ColorGradient::solid(Color::WHITE),
            ColorGradient::ORANGE_BRIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_and_falls_back() {
        let palette = [ColorGradient::RED_BLACK, ColorGradient::GREEN_RED];
        assert_eq!(rotate_gradient(&palette, 0), ColorGradient::RED_BLACK);
        assert_eq!(rotate_gradient(&palette, 3), ColorGradient::GREEN_RED);
        assert_eq!(rotate_gradient(&[], 5), ColorGradient::ORANGE_BRIGHT);
    }

    #[test]
    fn default_line_style() {
        let style = LineStyle::default();
        assert_eq!(style.width, 3.0);
        assert_eq!(style.join, LineJoin::Round);
        assert_eq!(style.vertical_line_color, Color::WHITE);
        assert_eq!(LineStyle::with_width(1.5).width, 1.5);
    }

    #[test]
    fn empty_palette_uses_fallback() {
        let style = ChartStyle::with_palette(ColorGradient::WHITE_BLACK, Vec::new());
        assert!(style.foreground_gradient(0).is_solid());
    }
}
