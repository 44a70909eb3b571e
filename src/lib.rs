//! # outline-pdf
//!
//! Converts the Uniquely Human Skills program outline from its HTML source
//! into a paginated PDF, without a browser.
//!
//! HTML/CSS parsing and layout are handled by the
//! [Blitz](https://github.com/DioxusLabs/blitz) engine; the paginated
//! document is assembled with [Krilla](https://github.com/LaurenzV/krilla).
//! Content taller than one page is sliced across as many pages as it needs.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use outline_pdf::{convert_file, Config};
//!
//! convert_file("outline.html", "outline.pdf", Config::default())?;
//! # Ok::<(), outline_pdf::Error>(())
//! ```
//!
//! Rendering from markup held in memory works the same way:
//!
//! ```rust,no_run
//! use outline_pdf::{render, Config};
//!
//! let html = "<html><body><h1>Program Outline</h1></body></html>";
//! let pdf_bytes = render(html, Config::new().margin(96))?;
//! std::fs::write("outline.pdf", pdf_bytes)?;
//! # Ok::<(), outline_pdf::Error>(())
//! ```

mod config;
mod error;
mod pdf;

pub use config::{ColorScheme, Config};
pub use error::{Error, Result};

use std::fs;
use std::path::Path;

use blitz_dom::DocumentConfig;
use blitz_html::HtmlDocument;
use blitz_traits::shell::Viewport;

/// Render HTML markup to PDF bytes.
///
/// Parses the HTML, computes styles and layout against the page content box,
/// and paginates the result into a PDF document.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a font cannot be
/// embedded, or PDF assembly fails.
pub fn render(html: &str, config: Config) -> Result<Vec<u8>> {
    config.validate()?;

    let mut document = create_document(html, &config);

    // Resolve styles and compute layout
    document.resolve(0.0);

    pdf::write_pdf(&document, &config)
}

/// Convert an HTML file on disk into a PDF file.
///
/// Reads `input`, renders it, and writes the result to `output`, replacing
/// any existing file. The output is only written after rendering succeeds,
/// so a failed conversion never leaves a partial PDF behind.
///
/// # Errors
///
/// Returns an error if the input cannot be read, rendering fails, or the
/// output cannot be written.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: Config,
) -> Result<()> {
    let html = fs::read_to_string(input)?;
    let bytes = render(&html, config)?;
    fs::write(output, bytes)?;
    Ok(())
}

/// Create a Blitz document whose viewport is the page content box.
fn create_document(html: &str, config: &Config) -> HtmlDocument {
    let viewport = Viewport::new(
        config.content_width(),
        config.content_height(),
        config.scale,
        config.color_scheme.into(),
    );

    let doc_config = DocumentConfig {
        viewport: Some(viewport),
        ..Default::default()
    };

    HtmlDocument::from_html(html, doc_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new().size(816, 1056).margin(96).scale(2.0);

        assert_eq!(config.width, 816);
        assert_eq!(config.height, 1056);
        assert_eq!(config.margin, 96);
        assert_eq!(config.scale, 2.0);
    }

    #[test]
    fn test_default_config_is_a4() {
        let config = Config::default();
        assert_eq!(config.width, 794);
        assert_eq!(config.height, 1123);
        assert_eq!(config.margin, 48);
        assert_eq!(config.scale, 1.0);
    }

    #[test]
    fn test_config_validation_zero_width() {
        let config = Config::new().width(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_height() {
        let config = Config::new().height(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_scale() {
        let config = Config::new().scale(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_oversized_margin() {
        let config = Config::new().size(200, 200).margin(100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_valid() {
        let config = Config::new().size(100, 100).margin(10).scale(0.5);
        assert!(config.validate().is_ok());
    }
}
