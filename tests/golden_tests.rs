//! # Golden Tests
//!
//! These tests ensure that label assembly produces consistent, byte-exact
//! ZPL documents.
//!
//! ## Test Coverage
//!
//! - **Document tests**: complete builder flows compared against inline
//!   expected documents (the documents are short command strings, so the
//!   expected output lives next to the test rather than in fixture files).
//! - **Script tests**: JSON label scripts rendered end-to-end and compared
//!   against the equivalent builder flow.
//! - **Determinism**: identical flows must render identical bytes.

use pretty_assertions::assert_eq;

use cebra::label::{Label, LabelConfig};
use cebra::protocol::barcode::{BarcodeLabelPosition, BarcodeMode};
use cebra::protocol::graphics::{Color, Roundness};
use cebra::protocol::text::{Justification, Orientation};
use cebra::script::LabelScript;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Build the demonstration label: box, font, greeting, QR code.
fn build_demo_label(config: LabelConfig) -> Label {
    let mut label = Label::with_config(config);
    label
        .start()
        .draw_box_at(50, 50, 100, 100, 2, Color::Black, Roundness::None)
        .set_font(50)
        .write_text_at(
            150,
            150,
            "Hello World",
            Orientation::Normal,
            Justification::Left,
        )
        .add_qr_code_at(200, 200, "Hello World")
        .end();
    label
}

/// Build a shipping-style label exercising lines, wrap, and barcodes.
fn build_shipping_label() -> Label {
    let mut label = Label::new();
    label
        .start()
        .set_font(30)
        .draw_box_at(20, 20, 670, 400, 3, Color::Black, Roundness::Level2)
        .draw_horizontal_line_at(20, 220, 670, 3)
        .write_text_at(40, 40, "SHIP TO", Orientation::Normal, Justification::Left);
    label.write_text_at_with_wrap(
        40,
        80,
        "Calle Falsa 123 Springfield",
        12,
        30,
        200,
        Orientation::Normal,
        Justification::Left,
    );
    label
        .bar_code_format(2, 3.0, 100)
        .bar_code_with_options(
            40,
            260,
            "00123456789012345675",
            Orientation::Normal,
            100,
            true,
            BarcodeLabelPosition::Bottom,
            false,
            BarcodeMode::UccEanMode,
        )
        .end();
    label
}

const DEMO_DOCUMENT: &str = "^XA\
^FO50,50^GB100,100,2,B,0^FS\
^CF0,50\
^FO150,150,0^AON^FH^FDHello_20World^FS\
^BY2,2,0^FO200,200^BQN,2,5^FDLA,Hello World^FS\
~JSN\
^XZ";

// ============================================================================
// DOCUMENT TESTS
// ============================================================================

#[test]
fn test_demo_document() {
    let label = build_demo_label(LabelConfig::default());
    assert_eq!(label.render(), DEMO_DOCUMENT);
}

#[test]
fn test_demo_document_with_separators() {
    let config = LabelConfig {
        suppress_separator: false,
        ..LabelConfig::default()
    };
    let label = build_demo_label(config);
    assert_eq!(
        label.render(),
        "^XA\n\
         ^FO50,50^GB100,100,2,B,0^FS\n\
         ^CF0,50\n\
         ^FO150,150,0^AON^FH^FDHello_20World^FS\n\
         ^BY2,2,0^FO200,200^BQN,2,5^FDLA,Hello World^FS\n\
         ~JSN\n\
         ^XZ\n"
    );
}

#[test]
fn test_shipping_document() {
    let label = build_shipping_label();
    assert_eq!(
        label.render(),
        "^XA\
         ^CF0,30\
         ^FO20,20^GB670,400,3,B,2^FS\
         ^FO20,220^GB670,1,3,B,0^FS\
         ^FO40,40,0^AON^FH^FDSHIP_20TO^FS\
         ^FO40,80,0^AON^FH^FDCalle_20Falsa_20^FS\
         ^FO40,110,0^AON^FH^FD123_20^FS\
         ^FO40,140,0^AON^FH^FDSpringfield_20^FS\
         ^BY2,3,100\
         ^FO40,260^BCN,100,Y,N,N,D^FD00123456789012345675^FS\
         ~JSN\
         ^XZ"
    );
}

#[test]
fn test_void_overlay_document() {
    let mut label = Label::new();
    label.start().add_void_message().end();
    assert_eq!(
        label.render(),
        "^XA\
         ^FO0,0^GD650,700,10,,R ^FS\
         ^ADN,60,40^FO300,70^FDV^FS\
         ^ADN,60,40^FO300,130^FDO^FS\
         ^ADN,60,40^FO300,190^FDI^FS\
         ^ADN,60,40^FO300,250^FDD^FS\
         ^ADN,60,40^FO300,430^FDV^FS\
         ^ADN,60,40^FO300,490^FDO^FS\
         ^ADN,60,40^FO300,550^FDI^FS\
         ^ADN,60,40^FO300,610^FDD^FS\
         ~JSN\
         ^XZ"
    );
}

#[test]
fn test_reverse_print_and_raw_document() {
    let mut label = Label::new();
    label
        .start()
        .raw("^LH30,30")
        .reverse_print()
        .draw_box_at(0, 0, 200, 100, 100, Color::Black, Roundness::None)
        .write_text_at(20, 30, "PAID", Orientation::Normal, Justification::Left)
        .end();
    assert_eq!(
        label.render(),
        "^XA\
         ^LH30,30\
         ^FR\
         ^FO0,0^GB200,100,100,B,0^FS\
         ^FO20,30,0^AON^FH^FDPAID^FS\
         ~JSN\
         ^XZ"
    );
}

#[test]
fn test_manual_field_document() {
    let mut label = Label::new();
    label
        .start()
        .set_font_with_options("A", 40, 30)
        .set_position(100, 100)
        .write_text("MANUAL FIELD")
        .end_field()
        .set_position(100, 160)
        .draw_box(80, 80, 4, Color::White, Roundness::Level8)
        .end_field()
        .write_under_line(100, 150, 240, 2, 2)
        .end();
    assert_eq!(
        label.render(),
        "^XA\
         ^CFA,40,30\
         ^FO100,100\
         ^FDMANUAL FIELD\
         ^FS\
         ^FO100,160\
         ^GB80,80,4,W,8\
         ^FS\
         ^FO100,150^GB240,2,2^FS\
         ~JSN\
         ^XZ"
    );
}

// ============================================================================
// WRAP TESTS
// ============================================================================

#[test]
fn test_wrap_document_line_positions() {
    let mut label = Label::new();
    let ending_y = label.write_text_at_with_wrap(
        0,
        100,
        "The quick brown fox",
        9,
        30,
        1000,
        Orientation::Normal,
        Justification::Left,
    );
    assert_eq!(ending_y, 190);
    assert_eq!(
        label.render(),
        "^FO0,100,0^AON^FH^FDThe_20^FS\
         ^FO0,130,0^AON^FH^FDquick_20^FS\
         ^FO0,160,0^AON^FH^FDbrown_20^FS\
         ^FO0,190,0^AON^FH^FDfox_20^FS"
    );
}

#[test]
fn test_wrap_document_vertical_cutoff() {
    let mut label = Label::new();
    let ending_y = label.write_text_at_with_wrap(
        0,
        100,
        "The quick brown fox",
        9,
        30,
        150,
        Orientation::Normal,
        Justification::Left,
    );
    assert_eq!(ending_y, 130);
    assert_eq!(
        label.render(),
        "^FO0,100,0^AON^FH^FDThe_20^FS\
         ^FO0,130,0^AON^FH^FDquick_20^FS"
    );
}

#[test]
fn test_wrap_centered_lines_share_the_block() {
    let mut label = Label::new();
    let ending_y = label.write_text_at_with_wrap(
        400,
        50,
        "one two three",
        5,
        40,
        1000,
        Orientation::Normal,
        Justification::Center,
    );
    assert_eq!(ending_y, 130);
    assert_eq!(
        label.render(),
        "^FO0,50^FB710,1,0,C,0^AON^FH^FDone_20^FS\
         ^FO0,90^FB710,1,0,C,0^AON^FH^FDtwo_20^FS\
         ^FO0,130^FB710,1,0,C,0^AON^FH^FDthree_20^FS"
    );
}

// ============================================================================
// SCRIPT TESTS
// ============================================================================

/// The demo label, expressed as a JSON script.
const DEMO_SCRIPT: &str = r#"{
    "config": { "dpi": 203, "max_width": 710, "suppress_separator": true },
    "label": [
        { "op": "start" },
        { "op": "draw_box_at", "x": 50, "y": 50, "width": 100, "height": 100, "thickness": 2 },
        { "op": "set_font", "height": 50 },
        { "op": "write_text_at", "x": 150, "y": 150, "value": "Hello World" },
        { "op": "add_qr_code_at", "x": 200, "y": 200, "data": "Hello World" },
        { "op": "end" }
    ]
}"#;

#[test]
fn test_script_matches_builder_document() {
    let script = LabelScript::from_json(DEMO_SCRIPT).unwrap();
    assert_eq!(script.render(), DEMO_DOCUMENT);
}

#[test]
fn test_script_default_config_matches_explicit() {
    let explicit = LabelScript::from_json(DEMO_SCRIPT).unwrap();
    let defaulted = LabelScript::from_json(
        &DEMO_SCRIPT.replace(
            r#""config": { "dpi": 203, "max_width": 710, "suppress_separator": true },"#,
            "",
        ),
    )
    .unwrap();
    assert_eq!(explicit.render(), defaulted.render());
}

// ============================================================================
// DETERMINISM TESTS
// ============================================================================

/// Identical flows must produce identical bytes: no timestamps, no
/// randomness, no environment-dependent separators.
#[test]
fn test_document_determinism() {
    let first = build_shipping_label().render();
    let second = build_shipping_label().render();
    assert_eq!(first, second);

    let script = LabelScript::from_json(DEMO_SCRIPT).unwrap();
    assert_eq!(script.render(), script.render());
}
