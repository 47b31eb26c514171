//! # JSON Label Scripts
//!
//! This module defines a declarative JSON description of a label: a
//! configuration block plus an ordered list of operations, applied
//! one-by-one to a fresh [`Label`].
//!
//! ## Format
//!
//! Each operation is an object tagged with an `"op"` field naming the
//! builder operation in snake_case; the remaining fields are that
//! operation's parameters. Enum parameters (orientation, justification,
//! color, roundness, barcode mode) are snake_case strings and may be
//! omitted where a default exists.
//!
//! ```json
//! {
//!   "config": { "dpi": 203, "max_width": 710, "suppress_separator": true },
//!   "label": [
//!     { "op": "start" },
//!     { "op": "draw_box_at", "x": 50, "y": 50, "width": 100, "height": 100, "thickness": 2 },
//!     { "op": "write_text_at", "x": 150, "y": 150, "value": "Hello World" },
//!     { "op": "end" }
//!   ]
//! }
//! ```
//!
//! Unknown `"op"` names are a parse error; parameter values themselves
//! are not range-checked, matching the builder's permissive contract.

use serde::{Deserialize, Serialize};

use crate::error::CebraError;
use crate::label::{Label, LabelConfig};
use crate::protocol::barcode::{BarcodeLabelPosition, BarcodeMode};
use crate::protocol::graphics::{Color, Roundness};
use crate::protocol::text::{Justification, Orientation};

// ============================================================================
// SCRIPT MODEL
// ============================================================================

/// A parsed label script: configuration plus operation list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScript {
    /// Builder configuration; defaults apply when omitted
    #[serde(default)]
    pub config: LabelConfig,
    /// Operations applied in order
    pub label: Vec<LabelOp>,
}

/// One label operation, tagged by `"op"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LabelOp {
    Start,
    End,
    Raw {
        value: String,
    },
    ReversePrint,
    SetPosition {
        x: i32,
        y: i32,
    },
    EndField,
    SetFont {
        height: i32,
    },
    SetFontWithOptions {
        font: String,
        height: i32,
        width: i32,
    },
    DrawBoxAt {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        thickness: i32,
        #[serde(default)]
        color: Color,
        #[serde(default)]
        roundness: Roundness,
    },
    DrawBox {
        width: i32,
        height: i32,
        thickness: i32,
        #[serde(default)]
        color: Color,
        #[serde(default)]
        roundness: Roundness,
    },
    DrawHorizontalLineAt {
        x: i32,
        y: i32,
        width: i32,
        thickness: i32,
    },
    DrawVerticalLineAt {
        x: i32,
        y: i32,
        height: i32,
        thickness: i32,
    },
    WriteText {
        value: String,
    },
    WriteTextAt {
        x: i32,
        y: i32,
        value: String,
        #[serde(default)]
        orientation: Orientation,
        #[serde(default)]
        justification: Justification,
    },
    WriteUnderLine {
        x: i32,
        y: i32,
        length: i32,
        height: i32,
        thickness: i32,
    },
    WriteTextAtWithWrap {
        x: i32,
        y: i32,
        value: String,
        wrap: usize,
        line_interval: i32,
        max: i32,
        #[serde(default)]
        orientation: Orientation,
        #[serde(default)]
        justification: Justification,
    },
    BarCodeFormat {
        module_width: i32,
        ratio: f64,
        bar_height: i32,
    },
    BarCode {
        x: i32,
        y: i32,
        value: String,
    },
    BarCodeWithOptions {
        x: i32,
        y: i32,
        value: String,
        height: i32,
        #[serde(default)]
        orientation: Orientation,
        #[serde(default)]
        print_text: bool,
        #[serde(default)]
        text_position: BarcodeLabelPosition,
        #[serde(default)]
        use_ucc_check_digit: bool,
        #[serde(default)]
        mode: BarcodeMode,
    },
    AddQrCodeAt {
        x: i32,
        y: i32,
        data: String,
    },
    AddVoidMessage,
}

impl LabelOp {
    /// Applies this operation to a builder.
    ///
    /// The wrap operation's `ending_y` has no JSON surface and is
    /// discarded; scripted layouts carry absolute coordinates.
    pub fn apply(&self, label: &mut Label) {
        match self {
            LabelOp::Start => {
                label.start();
            }
            LabelOp::End => {
                label.end();
            }
            LabelOp::Raw { value } => {
                label.raw(value.clone());
            }
            LabelOp::ReversePrint => {
                label.reverse_print();
            }
            LabelOp::SetPosition { x, y } => {
                label.set_position(*x, *y);
            }
            LabelOp::EndField => {
                label.end_field();
            }
            LabelOp::SetFont { height } => {
                label.set_font(*height);
            }
            LabelOp::SetFontWithOptions {
                font,
                height,
                width,
            } => {
                label.set_font_with_options(font, *height, *width);
            }
            LabelOp::DrawBoxAt {
                x,
                y,
                width,
                height,
                thickness,
                color,
                roundness,
            } => {
                label.draw_box_at(*x, *y, *width, *height, *thickness, *color, *roundness);
            }
            LabelOp::DrawBox {
                width,
                height,
                thickness,
                color,
                roundness,
            } => {
                label.draw_box(*width, *height, *thickness, *color, *roundness);
            }
            LabelOp::DrawHorizontalLineAt {
                x,
                y,
                width,
                thickness,
            } => {
                label.draw_horizontal_line_at(*x, *y, *width, *thickness);
            }
            LabelOp::DrawVerticalLineAt {
                x,
                y,
                height,
                thickness,
            } => {
                label.draw_vertical_line_at(*x, *y, *height, *thickness);
            }
            LabelOp::WriteText { value } => {
                label.write_text(value);
            }
            LabelOp::WriteTextAt {
                x,
                y,
                value,
                orientation,
                justification,
            } => {
                label.write_text_at(*x, *y, value, *orientation, *justification);
            }
            LabelOp::WriteUnderLine {
                x,
                y,
                length,
                height,
                thickness,
            } => {
                label.write_under_line(*x, *y, *length, *height, *thickness);
            }
            LabelOp::WriteTextAtWithWrap {
                x,
                y,
                value,
                wrap,
                line_interval,
                max,
                orientation,
                justification,
            } => {
                label.write_text_at_with_wrap(
                    *x,
                    *y,
                    value,
                    *wrap,
                    *line_interval,
                    *max,
                    *orientation,
                    *justification,
                );
            }
            LabelOp::BarCodeFormat {
                module_width,
                ratio,
                bar_height,
            } => {
                label.bar_code_format(*module_width, *ratio, *bar_height);
            }
            LabelOp::BarCode { x, y, value } => {
                label.bar_code(*x, *y, value);
            }
            LabelOp::BarCodeWithOptions {
                x,
                y,
                value,
                height,
                orientation,
                print_text,
                text_position,
                use_ucc_check_digit,
                mode,
            } => {
                label.bar_code_with_options(
                    *x,
                    *y,
                    value,
                    *orientation,
                    *height,
                    *print_text,
                    *text_position,
                    *use_ucc_check_digit,
                    *mode,
                );
            }
            LabelOp::AddQrCodeAt { x, y, data } => {
                label.add_qr_code_at(*x, *y, data);
            }
            LabelOp::AddVoidMessage => {
                label.add_void_message();
            }
        }
    }
}

impl LabelScript {
    /// Parses a script from JSON text.
    pub fn from_json(input: &str) -> Result<Self, CebraError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Applies all operations to a fresh builder.
    pub fn to_label(&self) -> Label {
        let mut label = Label::with_config(self.config);
        for op in &self.label {
            op.apply(&mut label);
        }
        label
    }

    /// Renders the scripted label to ZPL.
    pub fn render(&self) -> String {
        self.to_label().render()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_script() {
        let script = LabelScript::from_json(
            r#"{
                "label": [
                    { "op": "start" },
                    { "op": "end" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.config, LabelConfig::default());
        assert_eq!(script.render(), "^XA~JSN^XZ");
    }

    #[test]
    fn test_script_with_config() {
        let script = LabelScript::from_json(
            r#"{
                "config": { "dpi": 300, "max_width": 500, "suppress_separator": false },
                "label": [
                    { "op": "start" },
                    { "op": "write_text_at", "x": 9, "y": 9, "value": "M", "justification": "center" },
                    { "op": "end" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            script.render(),
            "^XA\n^FO0,9^FB500,1,0,C,0^AON^FH^FDM^FS\n~JSN\n^XZ\n"
        );
    }

    #[test]
    fn test_script_enum_parameters() {
        let script = LabelScript::from_json(
            r#"{
                "label": [
                    { "op": "draw_box_at", "x": 1, "y": 2, "width": 30, "height": 40,
                      "thickness": 5, "color": "white", "roundness": "level3" },
                    { "op": "write_text_at", "x": 1, "y": 2, "value": "A",
                      "orientation": "rotate270", "justification": "auto" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            script.to_label().fragments(),
            &["^FO1,2^GB30,40,5,W,3^FS", "^FO1,2,2^AOB^FH^FDA^FS"]
        );
    }

    #[test]
    fn test_script_omitted_enums_use_defaults() {
        let script = LabelScript::from_json(
            r#"{
                "label": [
                    { "op": "draw_box_at", "x": 50, "y": 50, "width": 100, "height": 100, "thickness": 2 },
                    { "op": "write_text_at", "x": 150, "y": 150, "value": "Hello World" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            script.to_label().fragments(),
            &[
                "^FO50,50^GB100,100,2,B,0^FS",
                "^FO150,150,0^AON^FH^FDHello_20World^FS"
            ]
        );
    }

    #[test]
    fn test_script_barcodes() {
        let script = LabelScript::from_json(
            r#"{
                "label": [
                    { "op": "bar_code_format", "module_width": 2, "ratio": 2.5, "bar_height": 100 },
                    { "op": "bar_code", "x": 10, "y": 20, "value": "SN-001" },
                    { "op": "bar_code_with_options", "x": 10, "y": 200, "value": "12345678",
                      "height": 80, "print_text": true, "text_position": "top", "mode": "ucc_ean_mode" },
                    { "op": "add_qr_code_at", "x": 200, "y": 200, "data": "Hello World" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            script.to_label().fragments(),
            &[
                "^BY2,2.5,100",
                "^FO10,20^BC^FDSN-001^FS",
                "^FO10,200^BCN,80,Y,Y,N,D^FD12345678^FS",
                "^BY2,2,0^FO200,200^BQN,2,5^FDLA,Hello World^FS",
            ]
        );
    }

    #[test]
    fn test_script_wrap_discards_ending_y() {
        let script = LabelScript::from_json(
            r#"{
                "label": [
                    { "op": "write_text_at_with_wrap", "x": 0, "y": 100,
                      "value": "The quick brown fox", "wrap": 9,
                      "line_interval": 30, "max": 1000 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.to_label().fragments().len(), 4);
    }

    #[test]
    fn test_script_void_message() {
        let script = LabelScript::from_json(
            r#"{ "label": [ { "op": "add_void_message" } ] }"#,
        )
        .unwrap();
        assert_eq!(script.to_label().fragments().len(), 9);
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        let result = LabelScript::from_json(
            r#"{ "label": [ { "op": "launch_missiles" } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_script_round_trips_through_serde() {
        let script = LabelScript {
            config: LabelConfig::default(),
            label: vec![
                LabelOp::Start,
                LabelOp::WriteTextAt {
                    x: 10,
                    y: 20,
                    value: "A B".to_string(),
                    orientation: Orientation::Normal,
                    justification: Justification::Left,
                },
                LabelOp::End,
            ],
        };
        let json = serde_json::to_string(&script).unwrap();
        let reparsed = LabelScript::from_json(&json).unwrap();
        assert_eq!(script.render(), reparsed.render());
    }
}
