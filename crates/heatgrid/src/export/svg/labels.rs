//! SVG rendering for section labels.

use svg::node::element as svg_element;

use heatgrid_core::{engine::LayoutEngine, layout::GridGeometry};

use super::Svg;

impl<W: std::io::Write> Svg<W> {
    /// Renders the labels group; empty when labels are hidden.
    pub(super) fn render_section_labels(
        &self,
        engine: &LayoutEngine,
        geometry: &GridGeometry,
    ) -> svg_element::Group {
        engine
            .section_labels()
            .map(|label| {
                svg_element::Text::new(label.text())
                    .set("x", label.position().x())
                    .set("y", label.position().y())
            })
            .fold(Self::translated_group(geometry.labels_offset()), |group, text| {
                group.add(text)
            })
    }
}
