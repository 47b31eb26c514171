//! # ZPL Graphics Commands
//!
//! This module implements the box-drawing command used for rectangles,
//! horizontal rules, and vertical rules.
//!
//! ## Graphic Box Overview
//!
//! ZPL draws all rectangular shapes with a single command, `^GB`. Lines
//! are boxes with one dimension collapsed to a single dot:
//!
//! | Shape | Width | Height |
//! |-------|-------|--------|
//! | Box | w | h |
//! | Horizontal line | w | 1 |
//! | Vertical line | 1 | h |
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (dots, right)
//!   │
//!   │   ┌────────┐  ← ^FO positions the top-left corner,
//!   │   │        │    ^GB draws from there
//!   │   └────────┘
//!   ▼
//!   Y (dots, down)
//! ```
//!
//! Dot pitch depends on the printhead: 203 DPI is ~8 dots/mm, 300 DPI is
//! ~12 dots/mm.
//!
//! ## Reference
//!
//! ZPL II Programming Guide, `^GB` (Graphic Box).

use serde::{Deserialize, Serialize};

use super::commands::FORMAT_PREFIX;

// ============================================================================
// LINE COLOR
// ============================================================================

/// Line color for graphic boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Black lines (default)
    #[default]
    Black,
    /// White lines, for drawing on reversed areas
    White,
}

impl Color {
    /// Single-letter ZPL color parameter
    ///
    /// ```
    /// use cebra::protocol::graphics::Color;
    ///
    /// assert_eq!(Color::Black.code(), 'B');
    /// assert_eq!(Color::White.code(), 'W');
    /// ```
    pub fn code(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

// ============================================================================
// CORNER ROUNDING
// ============================================================================

/// Degree of corner rounding for graphic boxes
///
/// Level 0 is square corners; level 8 rounds each corner by the maximum
/// radius (1/4 of the box's shorter side per the printer's rendering
/// rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Roundness {
    /// Square corners (default)
    #[default]
    None,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
    /// Maximum rounding
    Level8,
}

impl Roundness {
    /// Numeric ZPL rounding parameter, `0`-`8`
    ///
    /// ```
    /// use cebra::protocol::graphics::Roundness;
    ///
    /// assert_eq!(Roundness::None.level(), 0);
    /// assert_eq!(Roundness::Level8.level(), 8);
    /// ```
    pub fn level(self) -> u8 {
        match self {
            Roundness::None => 0,
            Roundness::Level1 => 1,
            Roundness::Level2 => 2,
            Roundness::Level3 => 3,
            Roundness::Level4 => 4,
            Roundness::Level5 => 5,
            Roundness::Level6 => 6,
            Roundness::Level7 => 7,
            Roundness::Level8 => 8,
        }
    }
}

// ============================================================================
// GRAPHIC BOX (^GB)
// ============================================================================

/// # Graphic Box (^GBw,h,t,c,r)
///
/// Draws a rectangle with the given outer dimensions and border
/// thickness. The box is positioned by the preceding `^FO` and closed by
/// `^FS`; this builder emits only the `^GB` token itself.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^GBw,h,t,c,r` |
/// | `w` | box width in dots |
/// | `h` | box height in dots |
/// | `t` | border thickness in dots |
/// | `c` | line color, `B` or `W` |
/// | `r` | corner rounding, `0`-`8` |
///
/// A thickness equal to or greater than half the shorter dimension
/// produces a filled box.
///
/// ## Example
///
/// ```
/// use cebra::protocol::graphics::{self, Color, Roundness};
///
/// let b = graphics::graphic_box(100, 100, 2, Color::Black, Roundness::None);
/// assert_eq!(b, "^GB100,100,2,B,0");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^GB` (Graphic Box).
#[inline]
pub fn graphic_box(
    width: i32,
    height: i32,
    thickness: i32,
    color: Color,
    roundness: Roundness,
) -> String {
    format!(
        "{FORMAT_PREFIX}GB{width},{height},{thickness},{},{}",
        color.code(),
        roundness.level()
    )
}

/// # Graphic Box - Interpreter Defaults (^GBw,h,t)
///
/// Three-parameter form of the graphic box: color and corner rounding are
/// omitted and fall back to the interpreter defaults (black, square).
/// Used for underline strokes beneath text fields.
///
/// ## Example
///
/// ```
/// use cebra::protocol::graphics;
///
/// assert_eq!(graphics::graphic_box_defaults(200, 4, 4), "^GB200,4,4");
/// ```
#[inline]
pub fn graphic_box_defaults(width: i32, height: i32, thickness: i32) -> String {
    format!("{FORMAT_PREFIX}GB{width},{height},{thickness}")
}

/// Horizontal rule: a graphic box collapsed to 1 dot of height
///
/// Always black with square corners.
#[inline]
pub fn horizontal_line(width: i32, thickness: i32) -> String {
    graphic_box(width, 1, thickness, Color::Black, Roundness::None)
}

/// Vertical rule: a graphic box collapsed to 1 dot of width
///
/// Always black with square corners.
#[inline]
pub fn vertical_line(height: i32, thickness: i32) -> String {
    graphic_box(1, height, thickness, Color::Black, Roundness::None)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.code(), 'B');
        assert_eq!(Color::White.code(), 'W');
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn test_roundness_levels_are_ordinals() {
        let levels: Vec<u8> = [
            Roundness::None,
            Roundness::Level1,
            Roundness::Level2,
            Roundness::Level3,
            Roundness::Level4,
            Roundness::Level5,
            Roundness::Level6,
            Roundness::Level7,
            Roundness::Level8,
        ]
        .iter()
        .map(|r| r.level())
        .collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_graphic_box() {
        assert_eq!(
            graphic_box(100, 200, 4, Color::White, Roundness::Level3),
            "^GB100,200,4,W,3"
        );
    }

    #[test]
    fn test_graphic_box_defaults_omits_color_and_rounding() {
        assert_eq!(graphic_box_defaults(300, 2, 2), "^GB300,2,2");
    }

    #[test]
    fn test_lines_collapse_one_dimension() {
        assert_eq!(horizontal_line(400, 3), "^GB400,1,3,B,0");
        assert_eq!(vertical_line(250, 2), "^GB1,250,2,B,0");
    }
}
