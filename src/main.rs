//! Generates the program outline PDF from its HTML source.
//!
//! Run from the directory containing the outline HTML; the input and output
//! paths are fixed and no arguments are taken.

use outline_pdf::{convert_file, Config};

const INPUT_HTML: &str = "Uniquely_Human_Skills_Program_Outline.html";
const OUTPUT_PDF: &str = "Uniquely_Human_Skills_Program_Outline.pdf";

fn main() {
    convert(INPUT_HTML, OUTPUT_PDF);
}

/// Convert one HTML file to PDF, reporting the outcome on stdout.
///
/// Failures are reported the same way as successes; the process exits with
/// status 0 either way.
fn convert(input: &str, output: &str) {
    match convert_file(input, output, Config::new()) {
        Ok(()) => println!("Successfully generated {output}"),
        Err(e) => println!("Error generating PDF: {e}"),
    }
}
