//! Page configuration for PDF conversion.

use crate::error::{Error, Result};

/// Color scheme preference for rendering.
///
/// Affects CSS media queries like `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light color scheme.
    #[default]
    Light,
    /// Dark color scheme.
    Dark,
}

impl From<ColorScheme> for blitz_traits::shell::ColorScheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => blitz_traits::shell::ColorScheme::Light,
            ColorScheme::Dark => blitz_traits::shell::ColorScheme::Dark,
        }
    }
}

/// Page setup for HTML-to-PDF conversion.
///
/// All lengths are CSS pixels (96 per inch). The default is an A4 page with
/// a half-inch margin on every side.
///
/// Use the builder pattern to construct a configuration:
///
/// ```rust
/// use outline_pdf::Config;
///
/// // US Letter with one-inch margins
/// let config = Config::new().size(816, 1056).margin(96);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page width in pixels.
    pub width: u32,

    /// Page height in pixels.
    pub height: u32,

    /// Margin on each side of the page in pixels.
    ///
    /// Content is laid out and painted inside the page rectangle minus the
    /// margins; the margin area stays blank on every page.
    pub margin: u32,

    /// Scale factor applied to the layout viewport.
    pub scale: f32,

    /// Color scheme preference (light or dark mode).
    pub color_scheme: ColorScheme,

    /// Page background color as RGBA (default: white).
    pub background: [u8; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // A4 at 96 dpi, half-inch margins
            width: 794,
            height: 1123,
            margin: 48,
            scale: 1.0,
            color_scheme: ColorScheme::Light,
            background: [255, 255, 255, 255], // White
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    ///
    /// Defaults:
    /// - Page: 794×1123px (A4 at 96 dpi)
    /// - Margin: 48px
    /// - Scale: 1.0
    /// - Color scheme: Light
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the page height in pixels.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set both page dimensions at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outline_pdf::Config;
    ///
    /// let config = Config::new().size(816, 1056);
    /// assert_eq!(config.width, 816);
    /// assert_eq!(config.height, 1056);
    /// ```
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin applied to each side of the page.
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the scale factor for layout.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the color scheme preference.
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Set the page background color as RGBA values.
    ///
    /// An alpha of zero leaves the page unfilled.
    pub fn background(mut self, rgba: [u8; 4]) -> Self {
        self.background = rgba;
        self
    }

    /// Check that the configuration describes a usable page.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfig(
                "page width must be non-zero".to_string(),
            ));
        }
        if self.height == 0 {
            return Err(Error::InvalidConfig(
                "page height must be non-zero".to_string(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig(
                "scale must be a positive, finite number".to_string(),
            ));
        }
        if self.margin.saturating_mul(2) >= self.width
            || self.margin.saturating_mul(2) >= self.height
        {
            return Err(Error::InvalidConfig(
                "margins leave no room for content".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of the page content box (page width minus margins).
    pub(crate) fn content_width(&self) -> u32 {
        self.width - 2 * self.margin
    }

    /// Height of the page content box (page height minus margins).
    pub(crate) fn content_height(&self) -> u32 {
        self.height - 2 * self.margin
    }
}
