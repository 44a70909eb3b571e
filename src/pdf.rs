//! Paginated PDF output.
//!
//! The laid-out document is sliced into page-height bands and each band is
//! painted onto its own PDF page: element background colors first, then text
//! as glyph runs with embedded fonts. Every page clips to the page content
//! box, so a slice never bleeds into the margins of a neighboring page.

use std::collections::HashMap;

use blitz_dom::node::TextLayout;
use blitz_dom::{BaseDocument, Node};
use blitz_html::HtmlDocument;
use krilla::color::rgb;
use krilla::geom::{Path, PathBuilder, Point, Size};
use krilla::num::NormalizedF32;
use krilla::page::PageSettings;
use krilla::paint::{Fill, FillRule};
use krilla::surface::Surface;
use krilla::text::{Font, GlyphId, KrillaGlyph};
use krilla::Document;
use parley::PositionedLayoutItem;

use crate::config::Config;
use crate::error::{Error, Result};

/// Fonts keyed by the id of their backing data, so a face shared by many
/// glyph runs is embedded once per document.
type FontCache = HashMap<u64, Font>;

/// Vertical slack, in ems, when deciding whether a glyph run belongs to a
/// page. Ascenders and descenders stay well inside two em of the baseline.
const LINE_SLACK: f32 = 2.0;

/// Write a laid-out document as a paginated PDF.
///
/// The page count is derived from the content height: at least one page,
/// and one more for each additional content-box height the layout spans.
pub(crate) fn write_pdf(document: &HtmlDocument, config: &Config) -> Result<Vec<u8>> {
    let page_width = config.width as f32;
    let page_height = config.height as f32;
    let margin = config.margin as f32;
    let content_width = config.content_width() as f32;
    let content_height = config.content_height() as f32;

    let doc = document.as_ref();
    let root = doc.root_element();
    let total_height = root.final_layout.size.height;
    let page_count = (total_height / content_height).ceil().max(1.0) as usize;

    let content_box = rect_path(margin, margin, content_width, content_height)
        .ok_or_else(|| Error::PdfCreate("invalid page content box".to_string()))?;

    let mut pdf = Document::new();
    let mut painter = Painter::new(doc, page_width, page_height);

    for index in 0..page_count {
        let size = Size::from_wh(page_width, page_height)
            .ok_or_else(|| Error::PdfCreate("invalid page dimensions".to_string()))?;
        let mut page = pdf.start_page_with(PageSettings::new(size));
        let mut surface = page.surface();

        let [r, g, b, a] = config.background;
        if a > 0 {
            fill_rect(
                &mut surface,
                0.0,
                0.0,
                page_width,
                page_height,
                rgb::Color::new(r, g, b),
            );
        }

        surface.push_clip_path(&content_box, &FillRule::NonZero);

        // Shift the layout tree up by one content-box height per page.
        let band_offset = margin - index as f32 * content_height;
        painter.paint_node(&mut surface, root, margin, band_offset)?;

        surface.pop();
        surface.finish();
        page.finish();
    }

    pdf.finish()
        .map_err(|e| Error::PdfCreate(format!("{:?}", e)))
}

/// Paints one page-sized slice of the layout tree onto a Krilla surface.
///
/// Subtrees and glyph runs that fall entirely outside the current page are
/// skipped, so each page's content stream only carries its own slice.
struct Painter<'a> {
    doc: &'a BaseDocument,
    fonts: FontCache,
    page_width: f32,
    page_height: f32,
}

impl<'a> Painter<'a> {
    fn new(doc: &'a BaseDocument, page_width: f32, page_height: f32) -> Self {
        Self {
            doc,
            fonts: FontCache::new(),
            page_width,
            page_height,
        }
    }

    /// Recursively paint `node` with its layout position translated by
    /// (`offset_x`, `offset_y`) page coordinates.
    fn paint_node(
        &mut self,
        surface: &mut Surface,
        node: &Node,
        offset_x: f32,
        offset_y: f32,
    ) -> Result<()> {
        let layout = &node.final_layout;
        let x = offset_x + layout.location.x;
        let y = offset_y + layout.location.y;
        let width = layout.size.width;
        let height = layout.size.height;

        if width > 0.0 && height > 0.0 && self.intersects_page(x, y, width, height) {
            if let Some(style) = node.primary_styles() {
                let background = style.clone_background_color();
                if let Some((r, g, b, alpha)) = resolve_color(&background) {
                    if alpha > 0.0 {
                        fill_rect(surface, x, y, width, height, rgb::Color::new(r, g, b));
                    }
                }
            }

            if let Some(element) = node.element_data() {
                if let Some(text) = &element.inline_layout_data {
                    self.paint_text(surface, text, x, y)?;
                }
            }
        }

        // Children always get a chance: positioned descendants can escape a
        // zero-sized or off-page ancestor.
        for child_id in node.children.iter() {
            if let Some(child) = self.doc.get_node(*child_id) {
                self.paint_node(surface, child, x, y)?;
            }
        }

        Ok(())
    }

    fn intersects_page(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x + width > 0.0 && x < self.page_width && y + height > 0.0 && y < self.page_height
    }

    /// Paint the glyph runs of one inline layout, skipping runs whose
    /// baseline falls outside the current page.
    fn paint_text(
        &mut self,
        surface: &mut Surface,
        text_layout: &TextLayout,
        origin_x: f32,
        origin_y: f32,
    ) -> Result<()> {
        let text = &text_layout.text;
        let layout = &text_layout.layout;

        for line in layout.lines() {
            for item in line.items() {
                if let PositionedLayoutItem::GlyphRun(glyph_run) = item {
                    let run = glyph_run.run();
                    let font_size = run.font_size();
                    let baseline = origin_y + glyph_run.baseline();

                    let slack = font_size * LINE_SLACK;
                    if baseline + slack < 0.0 || baseline - slack > self.page_height {
                        continue;
                    }

                    let font = self.font_for(run.font().clone())?;
                    let color = self.text_color(glyph_run.style().brush.id);
                    surface.set_fill(Some(Fill {
                        paint: color.into(),
                        opacity: NormalizedF32::ONE,
                        rule: FillRule::NonZero,
                    }));

                    // Build glyphs for this run, folding ligature
                    // continuations into the glyph that carries them.
                    let mut glyphs: Vec<KrillaGlyph> = Vec::new();
                    for cluster in run.visual_clusters() {
                        if cluster.is_ligature_continuation() {
                            if let Some(glyph) = glyphs.last_mut() {
                                glyph.text_range.end = cluster.text_range().end;
                            }
                            continue;
                        }

                        let text_range = cluster.text_range();
                        for glyph in cluster.glyphs() {
                            glyphs.push(KrillaGlyph::new(
                                GlyphId::new(glyph.id),
                                glyph.advance / font_size,
                                glyph.x / font_size,
                                glyph.y / font_size,
                                0.0,
                                text_range.clone(),
                                None,
                            ));
                        }
                    }

                    if !glyphs.is_empty() {
                        surface.draw_glyphs(
                            Point::from_xy(origin_x + glyph_run.offset(), baseline),
                            &glyphs,
                            font,
                            text,
                            font_size,
                            false, // outlined
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Look up a Krilla font for the given Parley font data, embedding it on
    /// first use.
    fn font_for(&mut self, font_data: linebender_resource_handle::FontData) -> Result<Font> {
        let index = font_data.index;
        let (raw_data, font_id) = font_data.data.into_raw_parts();

        if let Some(font) = self.fonts.get(&font_id) {
            return Ok(font.clone());
        }

        let data: krilla::Data = raw_data.into();
        let font = Font::new(data, index)
            .ok_or_else(|| Error::Font("failed to load font from data".to_string()))?;
        self.fonts.insert(font_id, font.clone());
        Ok(font)
    }

    /// Text color of the node a glyph run's brush points at, as sRGB.
    /// Defaults to opaque black.
    fn text_color(&self, node_id: usize) -> rgb::Color {
        self.doc
            .get_node(node_id)
            .and_then(|node| node.primary_styles())
            .map(|styles| {
                let srgb = styles
                    .get_inherited_text()
                    .color
                    .to_color_space(style::color::ColorSpace::Srgb);
                rgb::Color::new(
                    (srgb.components.0.clamp(0.0, 1.0) * 255.0) as u8,
                    (srgb.components.1.clamp(0.0, 1.0) * 255.0) as u8,
                    (srgb.components.2.clamp(0.0, 1.0) * 255.0) as u8,
                )
            })
            .unwrap_or(rgb::Color::new(0, 0, 0))
    }
}

/// Build a closed rectangular path.
fn rect_path(x: f32, y: f32, width: f32, height: f32) -> Option<Path> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(x, y);
    builder.line_to(x + width, y);
    builder.line_to(x + width, y + height);
    builder.line_to(x, y + height);
    builder.close();
    builder.finish()
}

/// Draw a filled rectangle at the given position with the given color.
fn fill_rect(surface: &mut Surface, x: f32, y: f32, width: f32, height: f32, color: rgb::Color) {
    if let Some(path) = rect_path(x, y, width, height) {
        let fill = Fill {
            paint: color.into(),
            opacity: NormalizedF32::ONE,
            rule: FillRule::NonZero,
        };

        surface.set_fill(Some(fill));
        surface.draw_path(&path);
    }
}

/// Resolve a computed CSS color to 8-bit sRGB components plus alpha.
fn resolve_color(color: &style::values::computed::color::Color) -> Option<(u8, u8, u8, f32)> {
    use style::values::generics::color::Color as GenericColor;

    match color {
        GenericColor::Absolute(absolute) => {
            let srgb = absolute.to_color_space(style::color::ColorSpace::Srgb);
            Some((
                (srgb.components.0.clamp(0.0, 1.0) * 255.0) as u8,
                (srgb.components.1.clamp(0.0, 1.0) * 255.0) as u8,
                (srgb.components.2.clamp(0.0, 1.0) * 255.0) as u8,
                srgb.alpha,
            ))
        }
        // currentColor resolves against the parent; fall back to black
        GenericColor::CurrentColor => Some((0, 0, 0, 1.0)),
        _ => None,
    }
}
