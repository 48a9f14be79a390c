//! SVG export backend.
//!
//! [`Svg`] renders a [`LayoutEngine`] into an SVG document shaped like this:
//!
//! ```text
//! <svg class="heatmap" viewBox="0 0 W H">
//!   <rect/>                        optional background
//!   <g transform=labels>           section labels
//!     <text x y>label</text>
//!   </g>
//!   <g transform=sections>         grid
//!     <g transform=section>        one group per section
//!       <rect class x y ...><title>tooltip</title></rect>
//!     </g>
//!   </g>
//! </svg>
//! ```
//!
//! Cells carry `data-section-index` and `data-cell-index` attributes so a host
//! can route clicks back to [`LayoutEngine::handle_click`].

mod cells;
mod labels;

use std::io::Write;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use heatgrid_core::{
    color::Color,
    engine::LayoutEngine,
    geometry::{Point, Size},
};

use crate::{config::StyleConfig, export};

/// CSS class of the root `<svg>` element.
pub const ROOT_CLASS: &str = "heatmap";

/// Builder for [`Svg`] exporters.
pub struct SvgBuilder<'a, W: Write> {
    writer: W,
    style: Option<&'a StyleConfig>,
}

impl<'a, W: Write> SvgBuilder<'a, W> {
    /// Creates a builder writing documents to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: None,
        }
    }

    /// Applies document-level styling.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds the exporter, validating the style.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// is not a valid CSS color.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let background_color = match self.style {
            Some(style) => style.background_color().map_err(export::Error::Render)?,
            None => None,
        };

        Ok(Svg {
            writer: self.writer,
            background_color,
        })
    }
}

/// SVG exporter writing into an [`std::io::Write`] target.
pub struct Svg<W: Write> {
    writer: W,
    background_color: Option<Color>,
}

impl<W: Write> Svg<W> {
    /// Renders the heatmap held by `engine` into an SVG document.
    pub fn render_document(&self, engine: &LayoutEngine) -> Document {
        let geometry = engine.geometry();
        let size = geometry.size();

        debug!(
            view_box = geometry.view_box(),
            orientation:? = geometry.orientation();
            "Rendering heatmap document"
        );

        let mut doc = Document::new()
            .set("class", ROOT_CLASS)
            .set("viewBox", geometry.view_box());

        if let Some(background) = self.render_background(size) {
            doc = doc.add(background);
        }

        doc.add(self.render_section_labels(engine, &geometry))
            .add(self.render_sections(engine, &geometry))
    }

    fn render_background(&self, size: Size) -> Option<svg_element::Rectangle> {
        let color = self.background_color.as_ref()?;
        Some(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", color),
        )
    }

    /// Creates a group translated by `offset`, if any.
    fn translated_group(offset: Option<Point>) -> svg_element::Group {
        match offset {
            Some(offset) if !offset.is_zero() => {
                svg_element::Group::new().set("transform", offset.to_translate())
            }
            _ => svg_element::Group::new(),
        }
    }

    /// Writes an SVG document to the underlying writer.
    pub fn write_document(&mut self, doc: &Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        self.writer.flush().map_err(export::Error::Io)
    }

    /// Consumes the exporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> export::Exporter for Svg<W> {
    fn export_engine(&mut self, engine: &LayoutEngine) -> Result<(), export::Error> {
        let doc = self.render_document(engine);
        debug!("SVG document rendered");

        self.write_document(&doc)?;
        info!(
            section_count = engine.dataset().section_count();
            "SVG exported"
        );
        Ok(())
    }
}

/// Renders `engine` into an SVG string with the given style.
///
/// # Errors
///
/// Returns an [`export::Error`] if the style is invalid or the document
/// cannot be written.
pub fn render_to_string(engine: &LayoutEngine, style: &StyleConfig) -> Result<String, export::Error> {
    use export::Exporter;

    let mut exporter = SvgBuilder::new(Vec::new()).with_style(style).build()?;
    exporter.export_engine(engine)?;

    String::from_utf8(exporter.into_inner())
        .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))
}
