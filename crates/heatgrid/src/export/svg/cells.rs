//! SVG rendering for the cell grid.

use indexmap::IndexMap;
use svg::node::element as svg_element;

use heatgrid_core::{
    engine::LayoutEngine,
    layout::{GridGeometry, SQUARE_SIZE},
    presentation::CellPresentation,
};

use super::Svg;

impl<W: std::io::Write> Svg<W> {
    /// Renders the sections group, one translated group per section.
    ///
    /// Only cells backed by a tab are drawn; shorter sections leave their
    /// trailing cells blank.
    pub(super) fn render_sections(
        &self,
        engine: &LayoutEngine,
        geometry: &GridGeometry,
    ) -> svg_element::Group {
        let attributes = engine.presenter().tooltip_attributes();

        engine
            .cache()
            .sections()
            .iter()
            .enumerate()
            .map(|(section_index, row)| {
                let section_group =
                    Self::translated_group(Some(geometry.section_offset(section_index)));
                row.iter()
                    .enumerate()
                    .map(|(cell_index, cell)| {
                        self.render_cell(section_index, cell_index, cell, geometry, attributes)
                    })
                    .fold(section_group, |group, rect| group.add(rect))
            })
            .fold(Self::translated_group(geometry.sections_offset()), |group, section| {
                group.add(section)
            })
    }

    fn render_cell(
        &self,
        section_index: usize,
        cell_index: usize,
        cell: &CellPresentation,
        geometry: &GridGeometry,
        attributes: Option<&IndexMap<String, String>>,
    ) -> svg_element::Rectangle {
        let offset = geometry.cell_offset(cell_index);

        let mut rect = svg_element::Rectangle::new()
            .set("class", cell.class_name())
            .set("x", offset.x())
            .set("y", offset.y())
            .set("width", SQUARE_SIZE)
            .set("height", SQUARE_SIZE)
            .set("data-section-index", section_index.to_string())
            .set("data-cell-index", cell_index.to_string());

        if let Some(title) = cell.title() {
            rect = rect.set("title", title);
        }
        if let Some(url) = cell.url() {
            rect = rect.set("data-url", url);
        }
        for (name, value) in attributes.into_iter().flatten() {
            rect = rect.set(name.as_str(), value.as_str());
        }

        // Native tooltip; overlay widgets read the same text from the cache.
        if !cell.tooltip_text().is_empty() {
            rect = rect.add(svg_element::Title::new(cell.tooltip_text()));
        }

        rect
    }
}

#[cfg(test)]
mod tests {
    use heatgrid_core::{
        layout::LayoutConfig,
        model::{Dataset, Section, Tab},
        presentation::{Presenter, TooltipSource},
    };

    use super::*;
    use crate::{config::PresentationConfig, export::svg::SvgBuilder};

    fn ragged() -> Dataset {
        Dataset::new(vec![
            Section::new("A", vec![Tab::new("a1", 10.0).with_url("/a1"), Tab::new("a2", 70.0)]),
            Section::new("BB", vec![Tab::new("b1", 130.0), Tab::new("b2", 190.0), Tab::new("b3", 250.0)]),
            Section::new("CCC", vec![Tab::new("c1", 0.0)]),
        ])
    }

    fn render(engine: &LayoutEngine) -> String {
        let exporter = SvgBuilder::new(Vec::new()).build().unwrap();
        exporter
            .render_sections(engine, &engine.geometry())
            .to_string()
    }

    #[test]
    fn test_renders_one_rect_per_tab() {
        let engine = LayoutEngine::new(ragged(), LayoutConfig::default(), Presenter::new());
        let group = render(&engine);

        assert_eq!(group.matches("<rect").count(), 6);
        assert_eq!(group.matches(r#"class="color-filled""#).count(), 6);
        assert!(group.contains("translate(0, 22)"));
    }

    #[test]
    fn test_cell_attributes() {
        let engine = LayoutEngine::new(ragged(), LayoutConfig::default(), Presenter::new());
        let group = render(&engine);

        assert!(group.contains(r#"data-url="/a1""#));
        assert!(group.contains(r#"data-section-index="1""#));
        assert!(group.contains(r#"data-cell-index="2""#));
        assert!(group.contains(r#"x="22""#));
        assert!(group.contains("<title>"));
        assert!(group.contains("b3: 250"));
        assert!(!group.contains(r#"title=""#));
    }

    #[test]
    fn test_horizontal_cells_run_downwards() {
        let config = LayoutConfig::default().with_horizontal(true);
        let engine = LayoutEngine::new(ragged(), config, Presenter::new());
        let group = render(&engine);

        // label size 14 pushes the grid down
        assert!(group.contains("translate(0, 14)"));
        assert!(group.contains("translate(11, 0)"));
        assert!(group.contains(r#"y="22""#));
    }

    #[test]
    fn test_configured_presentation() {
        let presenter = PresentationConfig::default()
            .with_color_distribution(vec![60.0, 120.0, 180.0, 240.0])
            .with_class_prefix("color-github")
            .with_titles(true)
            .with_tooltip_attribute("data-toggle", "tooltip")
            .to_presenter();
        let engine = LayoutEngine::new(ragged(), LayoutConfig::default(), presenter);
        let group = render(&engine);

        for bucket in 0..=4 {
            assert!(group.contains(&format!(r#"class="color-github-{bucket}""#)));
        }
        assert_eq!(group.matches(r#"data-toggle="tooltip""#).count(), 6);
        assert!(group.contains(r#"title="BB"#));
    }

    #[test]
    fn test_empty_tooltip_omits_title_element() {
        let presenter =
            Presenter::new().with_tooltip_source(TooltipSource::computed(|_| String::new()));
        let engine = LayoutEngine::new(ragged(), LayoutConfig::default(), presenter);
        let group = render(&engine);

        assert!(!group.contains("<title>"));
    }
}
