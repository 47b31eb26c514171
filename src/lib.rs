//! # Cebra - ZPL Label Document Builder
//!
//! Cebra is a Rust library for building ZPL (Zebra Programming Language)
//! label documents for Zebra thermal label printers. It provides:
//!
//! - **Protocol implementation**: ZPL token builders
//! - **Fluent builder**: chained label assembly with boxes, text, wrapped
//!   text, barcodes, and QR codes
//! - **Label scripts**: JSON descriptions of labels rendered to ZPL
//!
//! ## Quick Start
//!
//! ```
//! use cebra::{Label, LabelConfig};
//! use cebra::protocol::graphics::{Color, Roundness};
//! use cebra::protocol::text::{Justification, Orientation};
//!
//! // A 203 DPI label, 710 dots wide, no separators
//! let mut label = Label::with_config(LabelConfig::default());
//!
//! label
//!     .start()
//!     .draw_box_at(50, 50, 100, 100, 2, Color::Black, Roundness::None)
//!     .set_font(50)
//!     .write_text_at(150, 150, "Hello World", Orientation::Normal, Justification::Left)
//!     .add_qr_code_at(200, 200, "Hello World")
//!     .end();
//!
//! let zpl = label.render();
//! assert!(zpl.starts_with("^XA"));
//! assert!(zpl.ends_with("^XZ"));
//! assert!(zpl.contains("^FDHello_20World"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ZPL token builders |
//! | [`label`] | Fluent label document builder |
//! | [`script`] | JSON label scripts |
//! | [`error`] | Error types |
//!
//! ## Output
//!
//! The rendered document is plain ASCII command text. Sending it to a
//! printer (network, USB, or spooler) is the caller's concern; any sink
//! that accepts the final string works.

pub mod error;
pub mod label;
pub mod protocol;
pub mod script;

// Re-exports for convenience
pub use error::CebraError;
pub use label::{Label, LabelConfig};
pub use script::LabelScript;
