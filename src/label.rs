//! # Label Document Builder
//!
//! This module provides [`Label`], a fluent builder that assembles ZPL
//! command fragments into a complete label document.
//!
//! ## Document Model
//!
//! A label is an append-only sequence of text fragments. Every builder
//! operation pushes zero or more fragments and returns `&mut Self` for
//! chaining; [`Label::render`] concatenates them in emission order,
//! optionally separated by newlines for human inspection. Fragments are
//! never reordered or rewritten after the fact.
//!
//! The builder is deliberately permissive: coordinates, dimensions, and
//! payloads are emitted as given, with no range checks and no structural
//! validation of the command sequence. Callers own call ordering
//! (`start()` first, `end()` last).
//!
//! ## Example
//!
//! ```
//! use cebra::label::Label;
//! use cebra::protocol::graphics::{Color, Roundness};
//! use cebra::protocol::text::{Justification, Orientation};
//!
//! let mut label = Label::new();
//! label
//!     .start()
//!     .draw_box_at(50, 50, 100, 100, 2, Color::Black, Roundness::None)
//!     .set_font(50)
//!     .write_text_at(150, 150, "Hello World", Orientation::Normal, Justification::Left)
//!     .end();
//!
//! assert_eq!(
//!     label.render(),
//!     "^XA^FO50,50^GB100,100,2,B,0^FS^CF0,50^FO150,150,0^AON^FH^FDHello_20World^FS~JSN^XZ"
//! );
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::protocol::barcode::{self, BarcodeLabelPosition, BarcodeMode};
use crate::protocol::commands;
use crate::protocol::graphics::{self, Color, Roundness};
use crate::protocol::text::{self, Justification, Orientation};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Session configuration for a label document
///
/// Set once at construction and immutable for the builder's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Printhead resolution in dots per inch
    pub dpi: i32,
    /// Maximum print width in dots; sizes the field block used by
    /// centered text
    pub max_width: i32,
    /// When true (the default), fragments are concatenated without
    /// separators; when false, every fragment is followed by `\n`
    pub suppress_separator: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            dpi: 203,
            max_width: 710,
            suppress_separator: true,
        }
    }
}

// ============================================================================
// LABEL BUILDER
// ============================================================================

/// Fluent ZPL label document builder
///
/// See the [module documentation](self) for the document model and an
/// example.
#[derive(Debug, Clone)]
pub struct Label {
    config: LabelConfig,
    fragments: Vec<String>,
}

impl Label {
    /// Creates a builder with the default configuration
    /// (203 DPI, 710-dot width, separators suppressed).
    pub fn new() -> Self {
        Self::with_config(LabelConfig::default())
    }

    /// Creates a builder with an explicit configuration.
    pub fn with_config(config: LabelConfig) -> Self {
        Self {
            config,
            fragments: Vec::new(),
        }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// The fragments emitted so far, in emission order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    fn append(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    // ------------------------------------------------------------------
    // Lifecycle and raw emission
    // ------------------------------------------------------------------

    /// Opens the label format (`^XA`). Must come first.
    pub fn start(&mut self) -> &mut Self {
        self.append(commands::label_start())
    }

    /// Closes the label format: restores normal backfeed (`~JSN`), then
    /// ends the format (`^XZ`). Two fragments; must come last.
    pub fn end(&mut self) -> &mut Self {
        self.append(commands::backfeed_normal());
        self.append(commands::label_end())
    }

    /// Appends caller-supplied command text verbatim.
    pub fn raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.append(value.into())
    }

    /// Prints subsequent fields color-inverted (`^FR`).
    pub fn reverse_print(&mut self) -> &mut Self {
        self.append(commands::field_reverse())
    }

    /// Opens a field at the given origin (`^FO`) without emitting any
    /// content; pair with [`Label::write_text`] or [`Label::draw_box`]
    /// and close with [`Label::end_field`].
    pub fn set_position(&mut self, x: i32, y: i32) -> &mut Self {
        self.append(commands::field_origin(x, y))
    }

    /// Closes a manually-opened field (`^FS`).
    pub fn end_field(&mut self) -> &mut Self {
        self.append(commands::field_separator())
    }

    /// Sets the default font height in dots (`^CF0,h`); width follows
    /// proportionally.
    pub fn set_font(&mut self, height: i32) -> &mut Self {
        self.append(commands::change_font(height))
    }

    /// Sets the default font, height, and width (`^CFf,h,w`).
    /// `font` is `0`-`9` or `A`-`Z`.
    pub fn set_font_with_options(
        &mut self,
        font: impl Display,
        height: i32,
        width: i32,
    ) -> &mut Self {
        self.append(commands::change_font_with_options(font, height, width))
    }

    // ------------------------------------------------------------------
    // Shapes and lines
    // ------------------------------------------------------------------

    /// Draws a box at the given position: origin, graphic box, and field
    /// separator as one fragment.
    pub fn draw_box_at(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        thickness: i32,
        color: Color,
        roundness: Roundness,
    ) -> &mut Self {
        let fragment = format!(
            "{}{}{}",
            commands::field_origin(x, y),
            graphics::graphic_box(width, height, thickness, color, roundness),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Emits only the graphic box token; the caller positions the field
    /// via [`Label::set_position`] and closes it via [`Label::end_field`].
    pub fn draw_box(
        &mut self,
        width: i32,
        height: i32,
        thickness: i32,
        color: Color,
        roundness: Roundness,
    ) -> &mut Self {
        self.append(graphics::graphic_box(width, height, thickness, color, roundness))
    }

    /// Draws a horizontal rule of the given width and stroke thickness.
    pub fn draw_horizontal_line_at(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        thickness: i32,
    ) -> &mut Self {
        let fragment = format!(
            "{}{}{}",
            commands::field_origin(x, y),
            graphics::horizontal_line(width, thickness),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Draws a vertical rule of the given height and stroke thickness.
    pub fn draw_vertical_line_at(
        &mut self,
        x: i32,
        y: i32,
        height: i32,
        thickness: i32,
    ) -> &mut Self {
        let fragment = format!(
            "{}{}{}",
            commands::field_origin(x, y),
            graphics::vertical_line(height, thickness),
            commands::field_separator()
        );
        self.append(fragment)
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Emits bare field data (`^FD`): no positioning, no escaping, no
    /// field closure. Pair with [`Label::set_position`] and
    /// [`Label::end_field`].
    pub fn write_text(&mut self, value: &str) -> &mut Self {
        self.append(text::field_data(value))
    }

    /// Writes a positioned, hex-escaped text field.
    ///
    /// `Left`/`Right`/`Auto` justification becomes the trailing origin
    /// parameter; `Center` switches to a field block spanning the
    /// configured maximum width and forces the origin to x = 0.
    pub fn write_text_at(
        &mut self,
        x: i32,
        y: i32,
        value: &str,
        orientation: Orientation,
        justification: Justification,
    ) -> &mut Self {
        let escaped = text::hex_escape(value);
        let (x, block) = match justification.origin_parameter() {
            Some(n) => (x, format!(",{n}")),
            None => (0, text::field_block(self.config.max_width)),
        };
        let fragment = format!(
            "{}{}{}{}{}{}",
            commands::field_origin(x, y),
            block,
            text::font_orientation(orientation),
            text::hex_indicator(),
            text::field_data(&escaped),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Draws an underline stroke: a positioned box of the given length,
    /// height, and stroke thickness with interpreter-default color and
    /// corners.
    pub fn write_under_line(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        height: i32,
        thickness: i32,
    ) -> &mut Self {
        let fragment = format!(
            "{}{}{}",
            commands::field_origin(x, y),
            graphics::graphic_box_defaults(length, height, thickness),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Writes text wrapped across multiple lines inside a vertical bound.
    ///
    /// Words (space-delimited) are accumulated greedily; each contributes
    /// its char count plus one to the running line length. When the next
    /// word would push the line past `wrap` characters, the line is
    /// flushed at the current y and the cursor advances by
    /// `line_interval`. Once the cursor passes `max`, remaining words are
    /// discarded. A word longer than `wrap` still goes out as the sole
    /// content of an over-length line.
    ///
    /// Returns the y coordinate of the last emitted line (`y` itself when
    /// nothing is emitted).
    pub fn write_text_at_with_wrap(
        &mut self,
        x: i32,
        y: i32,
        value: &str,
        wrap: usize,
        line_interval: i32,
        max: i32,
        orientation: Orientation,
        justification: Justification,
    ) -> i32 {
        if value.trim().is_empty() {
            return y;
        }

        if value.chars().count() <= wrap {
            self.write_text_at(x, y, value, orientation, justification);
            return y;
        }

        let words: Vec<&str> = value.split(' ').collect();
        let mut line = String::new();
        let mut length = 0usize;
        let mut i = 0;
        let mut y = y;

        while i < words.len() {
            length += words[i].chars().count() + 1;
            if length <= wrap || line.is_empty() {
                line.push_str(words[i]);
                line.push(' ');
                i += 1;
            } else {
                self.write_text_at(x, y, &line, orientation, justification);
                length = 0;
                line.clear();
                y += line_interval;

                if y > max {
                    return y - line_interval;
                }
            }
        }

        self.write_text_at(x, y, &line, orientation, justification);
        y
    }

    // ------------------------------------------------------------------
    // Barcodes and QR codes
    // ------------------------------------------------------------------

    /// Sets the default module width, wide-to-narrow ratio, and bar
    /// height for subsequent barcode fields (`^BY`).
    pub fn bar_code_format(
        &mut self,
        module_width: i32,
        ratio: f64,
        bar_height: i32,
    ) -> &mut Self {
        self.append(barcode::barcode_defaults(module_width, ratio, bar_height))
    }

    /// Writes a Code 128 barcode with all symbology parameters left at
    /// their prevailing defaults.
    pub fn bar_code(&mut self, x: i32, y: i32, value: &str) -> &mut Self {
        let fragment = format!(
            "{}{}{}{}",
            commands::field_origin(x, y),
            barcode::code128(),
            text::field_data(value),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Writes a fully-parameterized Code 128 barcode.
    pub fn bar_code_with_options(
        &mut self,
        x: i32,
        y: i32,
        value: &str,
        orientation: Orientation,
        height: i32,
        print_text: bool,
        text_position: BarcodeLabelPosition,
        use_ucc_check_digit: bool,
        mode: BarcodeMode,
    ) -> &mut Self {
        let fragment = format!(
            "{}{}{}{}",
            commands::field_origin(x, y),
            barcode::code128_with_options(
                orientation,
                height,
                print_text,
                text_position,
                use_ucc_check_digit,
                mode
            ),
            text::field_data(value),
            commands::field_separator()
        );
        self.append(fragment)
    }

    /// Writes a QR code at the given position: module defaults, origin,
    /// symbology token, and `LA,`-prefixed payload as one fragment.
    /// The payload is emitted verbatim (no hex escaping).
    pub fn add_qr_code_at(&mut self, x: i32, y: i32, data: &str) -> &mut Self {
        let fragment = format!(
            "{}{}{}{}{}",
            barcode::barcode_defaults(2, 2.0, 0),
            commands::field_origin(x, y),
            barcode::qr_code(),
            barcode::qr_field_data(data),
            commands::field_separator()
        );
        self.append(fragment)
    }

    // ------------------------------------------------------------------
    // Composites and utilities
    // ------------------------------------------------------------------

    /// Stamps a diagonal VOID watermark across the label: a diagonal
    /// stroke plus the word VOID written vertically, twice.
    ///
    /// The sequence is fixed; the space before the first `^FS` is part of
    /// the canonical byte-exact form.
    pub fn add_void_message(&mut self) -> &mut Self {
        self.append("^FO0,0^GD650,700,10,,R ^FS");
        let letters = [
            (70, 'V'),
            (130, 'O'),
            (190, 'I'),
            (250, 'D'),
            (430, 'V'),
            (490, 'O'),
            (550, 'I'),
            (610, 'D'),
        ];
        for (y, letter) in letters {
            self.append(format!("^ADN,60,40^FO300,{y}^FD{letter}^FS"));
        }
        self
    }

    /// Converts inches to dots at the configured resolution, rounding
    /// ties to even.
    pub fn get_dots_from_inches(&self, inches: f64) -> i32 {
        (inches * f64::from(self.config.dpi)).round_ties_even() as i32
    }

    /// Renders the document: fragments concatenated in emission order,
    /// each followed by `\n` unless separators are suppressed.
    pub fn render(&self) -> String {
        if self.config.suppress_separator {
            self.fragments.concat()
        } else {
            let mut out = String::with_capacity(self.fragments.iter().map(|f| f.len() + 1).sum());
            for fragment in &self.fragments {
                out.push_str(fragment);
                out.push('\n');
            }
            out
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
