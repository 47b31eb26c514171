//! # ZPL Barcode Commands
//!
//! This module implements barcode field tokens for Code 128 and QR codes.
//!
//! ## Supported Symbologies
//!
//! | Type | Command | Density |
//! |------|---------|---------|
//! | Code 128 | `^BC` | 1D, full ASCII subsets |
//! | QR Code | `^BQ` | 2D matrix, high capacity |
//!
//! ## Barcode Field Anatomy
//!
//! A barcode field chains a field origin, the symbology token, the
//! payload, and a field separator:
//!
//! ```text
//! ^BY2,2,0  ^FO200,200  ^BQN,2,5  ^FDLA,HELLO  ^FS
//!     │          │          │          │
//!     │          │          │          └ payload with QR mode prefix
//!     │          │          └ QR code, model 2, magnification 5
//!     │          └ field origin
//!     └ module defaults (width, ratio, height)
//! ```
//!
//! The interpreter rasterizes the symbol on-device; no pixel data crosses
//! the wire.
//!
//! ## Reference
//!
//! ZPL II Programming Guide, `^BY`, `^BC`, and `^BQ`.

use serde::{Deserialize, Serialize};

use super::commands::FORMAT_PREFIX;
use super::text::Orientation;

// ============================================================================
// BARCODE ENUMS
// ============================================================================

/// Code 128 encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeMode {
    /// No added mode behavior (default)
    #[default]
    Default,
    /// UCC case mode: exactly 19 digits, MOD-10 check digit added
    UccCaseMode,
    /// Automatic subset switching for the shortest symbol
    AutomaticMode,
    /// UCC/EAN-128 mode with FNC1 handling
    UccEanMode,
}

impl BarcodeMode {
    /// Single-letter ZPL mode parameter
    ///
    /// ```
    /// use cebra::protocol::barcode::BarcodeMode;
    ///
    /// assert_eq!(BarcodeMode::Default.code(), 'N');
    /// assert_eq!(BarcodeMode::UccEanMode.code(), 'D');
    /// ```
    pub fn code(self) -> char {
        match self {
            BarcodeMode::Default => 'N',
            BarcodeMode::UccCaseMode => 'U',
            BarcodeMode::AutomaticMode => 'A',
            BarcodeMode::UccEanMode => 'D',
        }
    }
}

/// Placement of the human-readable interpretation line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeLabelPosition {
    /// Interpretation line above the bars
    Top,
    /// Interpretation line below the bars (default)
    #[default]
    Bottom,
}

// ============================================================================
// BARCODE FIELD DEFAULTS (^BY)
// ============================================================================

/// # Barcode Field Defaults (^BYw,r,h)
///
/// Sets the module width, wide-to-narrow bar ratio, and bar height used
/// by subsequent barcode fields.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^BYw,r,h` |
/// | `w` | module (narrow bar) width in dots, 1-10 |
/// | `r` | wide-to-narrow ratio, 2.0-3.0 in 0.1 steps |
/// | `h` | bar height in dots |
///
/// The ratio renders in its shortest decimal form (`2.5` stays `2.5`,
/// `3.0` becomes `3`); both spellings are accepted by the interpreter.
///
/// ## Example
///
/// ```
/// use cebra::protocol::barcode;
///
/// assert_eq!(barcode::barcode_defaults(2, 2.5, 100), "^BY2,2.5,100");
/// assert_eq!(barcode::barcode_defaults(3, 3.0, 80), "^BY3,3,80");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^BY` (Bar Code Field Default).
#[inline]
pub fn barcode_defaults(module_width: i32, ratio: f64, bar_height: i32) -> String {
    format!("{FORMAT_PREFIX}BY{module_width},{ratio},{bar_height}")
}

// ============================================================================
// CODE 128 (^BC)
// ============================================================================

/// # Code 128 Barcode - All Defaults (^BC)
///
/// Emits the bare symbology token; orientation, height, interpretation
/// line, and mode all fall back to the printer's prevailing defaults.
///
/// ## Reference
///
/// ZPL II Programming Guide, `^BC` (Code 128 Bar Code).
#[inline]
pub fn code128() -> String {
    format!("{FORMAT_PREFIX}BC")
}

/// # Code 128 Barcode (^BCo,h,f,g,e,m)
///
/// Fully-parameterized Code 128 symbology token.
///
/// ## Protocol Details
///
/// | Format | Token |
/// |--------|-------|
/// | Command | `^BCo,h,f,g,e,m` |
/// | `o` | orientation, `N`/`R`/`I`/`B` |
/// | `h` | bar height in dots |
/// | `f` | print interpretation line, `Y`/`N` |
/// | `g` | interpretation line above code, `Y`/`N` |
/// | `e` | UCC check digit, `Y`/`N` |
/// | `m` | mode, `N`/`U`/`A`/`D` |
///
/// ## Example
///
/// ```
/// use cebra::protocol::barcode::{self, BarcodeLabelPosition, BarcodeMode};
/// use cebra::protocol::text::Orientation;
///
/// let bc = barcode::code128_with_options(
///     Orientation::Normal,
///     100,
///     true,
///     BarcodeLabelPosition::Bottom,
///     false,
///     BarcodeMode::Default,
/// );
/// assert_eq!(bc, "^BCN,100,Y,N,N,N");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^BC` (Code 128 Bar Code).
pub fn code128_with_options(
    orientation: Orientation,
    height: i32,
    print_text: bool,
    text_position: BarcodeLabelPosition,
    ucc_check_digit: bool,
    mode: BarcodeMode,
) -> String {
    format!(
        "{FORMAT_PREFIX}BC{},{height},{},{},{},{}",
        orientation.code(),
        yn(print_text),
        yn(text_position == BarcodeLabelPosition::Top),
        yn(ucc_check_digit),
        mode.code()
    )
}

// ============================================================================
// QR CODE (^BQ)
// ============================================================================

/// # QR Code (^BQN,2,5)
///
/// Emits the QR symbology token: normal orientation, model 2 (the
/// enhanced model recommended for new designs), magnification 5.
///
/// ## Reference
///
/// ZPL II Programming Guide, `^BQ` (QR Code Bar Code).
#[inline]
pub fn qr_code() -> String {
    format!("{FORMAT_PREFIX}BQN,2,5")
}

/// # QR Field Data (^FDLA,data)
///
/// Field data for a QR code: error correction `L`, automatic input mode,
/// then the payload verbatim.
///
/// ## Example
///
/// ```
/// use cebra::protocol::barcode;
///
/// assert_eq!(barcode::qr_field_data("https://example.com"), "^FDLA,https://example.com");
/// ```
///
/// ## Reference
///
/// ZPL II Programming Guide, `^BQ` (QR Code Bar Code, field data switches).
#[inline]
pub fn qr_field_data(data: &str) -> String {
    format!("{FORMAT_PREFIX}FDLA,{data}")
}

fn yn(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mode_codes() {
        assert_eq!(BarcodeMode::Default.code(), 'N');
        assert_eq!(BarcodeMode::UccCaseMode.code(), 'U');
        assert_eq!(BarcodeMode::AutomaticMode.code(), 'A');
        assert_eq!(BarcodeMode::UccEanMode.code(), 'D');
        assert_eq!(BarcodeMode::default(), BarcodeMode::Default);
    }

    #[test]
    fn test_barcode_defaults_ratio_rendering() {
        assert_eq!(barcode_defaults(2, 2.5, 100), "^BY2,2.5,100");
        assert_eq!(barcode_defaults(3, 3.0, 80), "^BY3,3,80");
        assert_eq!(barcode_defaults(1, 2.0, 50), "^BY1,2,50");
    }

    #[test]
    fn test_code128_bare() {
        assert_eq!(code128(), "^BC");
    }

    #[test]
    fn test_code128_with_options() {
        let bc = code128_with_options(
            Orientation::Rotate90,
            120,
            true,
            BarcodeLabelPosition::Top,
            true,
            BarcodeMode::UccEanMode,
        );
        assert_eq!(bc, "^BCR,120,Y,Y,Y,D");

        let bc = code128_with_options(
            Orientation::Normal,
            60,
            false,
            BarcodeLabelPosition::Bottom,
            false,
            BarcodeMode::Default,
        );
        assert_eq!(bc, "^BCN,60,N,N,N,N");
    }

    #[test]
    fn test_qr_tokens() {
        assert_eq!(qr_code(), "^BQN,2,5");
        assert_eq!(qr_field_data("HELLO"), "^FDLA,HELLO");
    }
}
