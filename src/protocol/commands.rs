//! # ZPL Format and Control Commands
//!
//! This module implements the core ZPL commands for label lifecycle, field
//! positioning, and font selection.
//!
//! ## Protocol Overview
//!
//! ZPL is a purely textual protocol. Every command is an ASCII token that
//! starts with one of two prefix characters:
//!
//! - **`^` (caret)**: format commands, interpreted while a label format is
//!   being assembled (`^XA` ... `^XZ`)
//! - **`~` (tilde)**: control commands, interpreted immediately by the
//!   printer regardless of format state
//!
//! Parameters follow the two-letter command name, separated by commas.
//! Omitted parameters keep their positions, so consecutive commas are
//! meaningful (`^GD650,700,10,,R`).
//!
//! ## Label Structure
//!
//! ```text
//! ^XA              ← start of label format
//!   ^FO50,50       ← field origin (x, y in dots from top-left)
//!   ^FDHELLO       ← field data
//!   ^FS            ← field separator (closes the field)
//! ^XZ              ← end of label format
//! ```
//!
//! ## Reference
//!
//! ZPL II Programming Guide, "Format Commands" and "Control Commands".

use std::fmt::Display;

// ============================================================================
// COMMAND PREFIX CONSTANTS
// ============================================================================

/// `^` - Format command prefix
///
/// Format commands are buffered and interpreted as part of the current
/// label format.
pub const FORMAT_PREFIX: char = '^';

/// `~` - Control command prefix
///
/// Control commands take effect immediately, outside the label format
/// being assembled.
pub const CONTROL_PREFIX: char = '~';

// ============================================================================
// LABEL LIFECYCLE COMMANDS
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Every label must begin with this command; the
/// printer discards format commands received outside an `^XA` ... `^XZ`
/// pair.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^XA` |
/// | Parameters | none |
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::label_start(), "^XA");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^XA` (Start Format).
#[inline]
pub fn label_start() -> String {
    format!("{FORMAT_PREFIX}XA")
}

/// # End Format (^XZ)
///
/// Closes the label format and triggers printing. Must be the last
/// command of a label.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^XZ` |
/// | Parameters | none |
///
/// ## Reference
///
/// ZPL II Programming Guide, `^XZ` (End Format).
#[inline]
pub fn label_end() -> String {
    format!("{FORMAT_PREFIX}XZ")
}

/// # Set Backfeed Sequence to Normal (~JSN)
///
/// Restores the printer's default backfeed behavior (90% backfeed after
/// printing). Emitted before `^XZ` so partially-fed media is returned to
/// the tear-off position after each label.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `~JSN` |
/// | Parameters | `N` = normal backfeed |
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::backfeed_normal(), "~JSN");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `~JS` (Change Backfeed Sequence).
#[inline]
pub fn backfeed_normal() -> String {
    format!("{CONTROL_PREFIX}JSN")
}

// ============================================================================
// FIELD POSITIONING COMMANDS
// ============================================================================

/// # Field Origin (^FOx,y)
///
/// Positions the next field relative to the label home position. `x` and
/// `y` are in dots; (0, 0) is the top-left corner of the label.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^FOx,y` |
/// | `x` | horizontal offset in dots |
/// | `y` | vertical offset in dots |
///
/// Newer firmware accepts a third justification parameter; see the text
/// field builders in [`crate::label::Label`] for how it is appended.
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::field_origin(150, 150), "^FO150,150");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FO` (Field Origin).
#[inline]
pub fn field_origin(x: i32, y: i32) -> String {
    format!("{FORMAT_PREFIX}FO{x},{y}")
}

/// # Field Separator (^FS)
///
/// Closes the current field definition. Every positioned field ends with
/// this token.
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FS` (Field Separator).
#[inline]
pub fn field_separator() -> String {
    format!("{FORMAT_PREFIX}FS")
}

/// # Field Reverse Print (^FR)
///
/// Prints subsequent fields with inverted color relative to their
/// background: black becomes white where the field overlaps dark areas.
/// Applies to the fields that follow it within the current format.
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::field_reverse(), "^FR");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^FR` (Field Reverse Print).
#[inline]
pub fn field_reverse() -> String {
    format!("{FORMAT_PREFIX}FR")
}

// ============================================================================
// FONT SELECTION COMMANDS
// ============================================================================

/// # Change Default Font - Height Only (^CF0,h)
///
/// Sets the printer's default font to font `0` (the built-in scalable
/// font) with the given character height in dots. Character width is set
/// proportionally by the printer.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^CFf,h` |
/// | `f` | font identifier, fixed `0` here |
/// | `h` | character height in dots |
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::change_font(50), "^CF0,50");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^CF` (Change Alphanumeric Default Font).
#[inline]
pub fn change_font(height: i32) -> String {
    format!("{FORMAT_PREFIX}CF0,{height}")
}

/// # Change Default Font (^CFf,h,w)
///
/// Sets the printer's default font, character height, and character width
/// for subsequent text fields.
///
/// ## Parameters
///
/// - `font`: font identifier, `0`-`9` or `A`-`Z`
/// - `height`: character height in dots
/// - `width`: character width in dots
///
/// ## Example
///
/// ```
/// use cebra::protocol::commands;
///
/// assert_eq!(commands::change_font_with_options("A", 40, 30), "^CFA,40,30");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^CF` (Change Alphanumeric Default Font).
#[inline]
pub fn change_font_with_options(font: impl Display, height: i32, width: i32) -> String {
    format!("{FORMAT_PREFIX}CF{font},{height},{width}")
}

// ============================================================================
// TESTS
// ============================================================================
