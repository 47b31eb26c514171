//! # ZPL Protocol Implementation
//!
//! This module provides low-level command builders for ZPL (Zebra
//! Programming Language), the text-based control language understood by
//! Zebra thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Label lifecycle, field positioning, and font selection
//! - [`graphics`]: Box and line drawing
//! - [`text`]: Text fields, hex escaping, orientation, and justification
//! - [`barcode`]: Code 128 and QR code fields
//!
//! ## Usage Example
//!
//! ```
//! use cebra::protocol::{commands, graphics, text};
//! use cebra::protocol::graphics::{Color, Roundness};
//!
//! // Build a simple label by hand
//! let mut zpl = String::new();
//!
//! // Open the label format
//! zpl.push_str(&commands::label_start());
//!
//! // Draw a 100x100 box at (50, 50) with 2-dot borders
//! zpl.push_str(&commands::field_origin(50, 50));
//! zpl.push_str(&graphics::graphic_box(100, 100, 2, Color::Black, Roundness::None));
//! zpl.push_str(&commands::field_separator());
//!
//! // Write a text field
//! zpl.push_str(&commands::field_origin(50, 200));
//! zpl.push_str(&text::field_data("HELLO"));
//! zpl.push_str(&commands::field_separator());
//!
//! // Close the label format
//! zpl.push_str(&commands::label_end());
//!
//! assert_eq!(zpl, "^XA^FO50,50^GB100,100,2,B,0^FS^FO50,200^FDHELLO^FS^XZ");
//! ```
//!
//! ## Protocol Reference
//!
//! Token spellings follow the "ZPL II Programming Guide" by Zebra
//! Technologies Corp.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
