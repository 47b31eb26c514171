//! # Cebra CLI
//!
//! Command-line interface for rendering ZPL label documents.
//!
//! ## Usage
//!
//! ```bash
//! # Render the built-in demonstration label to stdout
//! cebra demo
//!
//! # Render it with newline separators between commands
//! cebra demo --separators
//!
//! # Render at 300 DPI into a file
//! cebra demo --dpi 300 --output label.zpl
//!
//! # Render a JSON label script
//! cebra render shipping-label.json
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use cebra::{
    CebraError, Label, LabelConfig, LabelScript,
    protocol::graphics::{Color, Roundness},
    protocol::text::{Justification, Orientation},
};

/// Cebra - ZPL label document utility
#[derive(Parser, Debug)]
#[command(name = "cebra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the built-in demonstration label
    Demo {
        /// Printhead resolution in dots per inch
        #[arg(long, default_value = "203")]
        dpi: i32,

        /// Maximum print width in dots
        #[arg(long, default_value = "710")]
        max_width: i32,

        /// Emit a newline after every command fragment
        #[arg(long)]
        separators: bool,

        /// Write the document to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a JSON label script
    Render {
        /// Path to the script file
        script: PathBuf,

        /// Write the document to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CebraError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            dpi,
            max_width,
            separators,
            output,
        } => {
            let config = LabelConfig {
                dpi,
                max_width,
                suppress_separator: !separators,
            };
            let document = demo_label(config).render();
            emit(&document, output.as_deref())?;
        }
        Commands::Render { script, output } => {
            let input = fs::read_to_string(&script)?;
            let document = LabelScript::from_json(&input)?.render();
            emit(&document, output.as_deref())?;
        }
    }

    Ok(())
}

/// The demonstration label: a box, the default font, a greeting, and a
/// QR code carrying the same greeting
fn demo_label(config: LabelConfig) -> Label {
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

/// Write the document to the given path, or print it to stdout
fn emit(document: &str, output: Option<&Path>) -> Result<(), CebraError> {
    match output {
        Some(path) => fs::write(path, document)?,
        None => println!("{document}"),
    }
    Ok(())
}
