//! # ZPL Text Field Commands
//!
//! This module implements text field tokens: field data, hex escaping,
//! font orientation, and block justification.
//!
//! ## Text Field Anatomy
//!
//! A fully-specified text field is a chain of tokens between a field
//! origin and a field separator:
//!
//! ```text
//! ^FO150,150,0  ^AON  ^FH  ^FDHello_20World  ^FS
//!      │          │    │         │
//!      │          │    │         └ field data (hex-escaped)
//!      │          │    └ hex-escape indicator for this field
//!      │          └ font O, normal orientation
//!      └ origin with trailing justification parameter
//! ```
//!
//! ## Hex Escaping
//!
//! With `^FH` active, a `_` in field data introduces a two-digit hex
//! escape for the following byte. Literal payload characters that collide
//! with that convention are escaped before transmission:
//!
//! | Character | Escape |
//! |-----------|--------|
//! | `_` (underscore) | `_5F` |
//! | ` ` (space) | `_20` |
//!
//! ## Reference
//!
//! ZPL II Programming Guide, `^FD`, `^FH`, `^A`, and `^FB`.

use serde::{Deserialize, Serialize};

use super::commands::FORMAT_PREFIX;

// ============================================================================
// FIELD ORIENTATION
// ============================================================================

/// Field rotation applied by the font selection token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Upright (default)
    #[default]
    Normal,
    /// Rotated 90° clockwise
    Rotate90,
    /// Inverted (180°)
    Invert,
    /// Rotated 270° clockwise (read bottom-up)
    Rotate270,
}

impl Orientation {
    /// Single-letter ZPL orientation parameter
    ///
    /// `B` also denotes the inverted reading direction in barcode
    /// orientation tables; the letter collision is part of the token
    /// scheme and is preserved as-is.
    ///
    /// ```
    /// use cebra::protocol::text::Orientation;
    ///
    /// assert_eq!(Orientation::Normal.code(), 'N');
    /// assert_eq!(Orientation::Rotate270.code(), 'B');
    /// ```
    pub fn code(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotate90 => 'R',
            Orientation::Invert => 'I',
            Orientation::Rotate270 => 'B',
        }
    }
}

// ============================================================================
// FIELD JUSTIFICATION
// ============================================================================

/// Horizontal justification for positioned text fields
///
/// `Left`, `Right`, and `Auto` map to the trailing justification
/// parameter of the field origin token. `Center` is structurally
/// different: it switches the field into block-formatting mode (`^FB`)
/// spanning the configured maximum width, and the field origin moves to
/// x = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    /// Left justification (default)
    #[default]
    Left,
    /// Right justification
    Right,
    /// Printer-chosen justification
    Auto,
    /// Centered via a one-line field block
    Center,
}

impl Justification {
    /// Numeric field-origin justification parameter
    ///
    /// Returns `None` for [`Justification::Center`], which uses a field
    /// block instead of an origin parameter.
    ///
    /// ```
    /// use cebra::protocol::text::Justification;
    ///
    /// assert_eq!(Justification::Left.origin_parameter(), Some(0));
    /// assert_eq!(Justification::Auto.origin_parameter(), Some(2));
    /// assert_eq!(Justification::Center.origin_parameter(), None);
    /// ```
    pub fn origin_parameter(self) -> Option<u8> {
        match self {
            Justification::Left => Some(0),
            Justification::Right => Some(1),
            Justification::Auto => Some(2),
            Justification::Center => None,
        }
    }
}

// ============================================================================
// FIELD DATA AND ESCAPING
// ============================================================================

/// Escape field data for transmission under `^FH`
///
/// Underscore is escaped first; escaping it after spaces would corrupt
/// the `_20` tokens just introduced.
///
/// ```
/// use cebra::protocol::text;
///
/// assert_eq!(text::hex_escape("Hello World"), "Hello_20World");
/// assert_eq!(text::hex_escape("a_b c"), "a_5Fb_20c");
/// ```
#[inline]
pub fn hex_escape(value: &str) -> String {
    value.replace('_', "_5F").replace(' ', "_20")
}

/// # Field Data (^FDdata)
///
/// Carries the printable payload of the current field. The payload is
/// emitted verbatim; callers wanting spaces or underscores to survive a
/// hex-escaped field apply [`hex_escape`] first.
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FD` (Field Data).
#[inline]
pub fn field_data(value: &str) -> String {
    format!("{FORMAT_PREFIX}FD{value}")
}

/// # Field Hexadecimal Indicator (^FH)
///
/// Enables `_xx` hex escapes in the field data that follows within the
/// same field.
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FH` (Field Hexadecimal Indicator).
#[inline]
pub fn hex_indicator() -> String {
    format!("{FORMAT_PREFIX}FH")
}

// ============================================================================
// FONT AND BLOCK TOKENS
// ============================================================================

/// # Font O with Orientation (^AOo)
///
/// Selects built-in font `O` and sets the field orientation. Height and
/// width are left to the prevailing `^CF` defaults.
///
/// ## Example
///
/// ```
/// use cebra::protocol::text::{self, Orientation};
///
/// assert_eq!(text::font_orientation(Orientation::Rotate90), "^AOR");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^A` (Scalable/Bitmapped Font).
#[inline]
pub fn font_orientation(orientation: Orientation) -> String {
    format!("{FORMAT_PREFIX}AO{}", orientation.code())
}

/// # Centering Field Block (^FBw,1,0,C,0)
///
/// Wraps the field in a one-line block spanning `width` dots with
/// centered text.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^FBw,l,s,j,h` |
/// | `w` | block width in dots |
/// | `l` | maximum lines, fixed `1` |
/// | `s` | added line spacing, fixed `0` |
/// | `j` | justification, fixed `C` |
/// | `h` | hanging indent, fixed `0` |
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FB` (Field Block).
#[inline]
pub fn field_block(width: i32) -> String {
    format!("{FORMAT_PREFIX}FB{width},1,0,C,0")
}

// ============================================================================
// TESTS
// ============================================================================
