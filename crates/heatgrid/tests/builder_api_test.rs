//! Integration tests for the HeatmapBuilder API

use std::{cell::RefCell, rc::Rc};

use float_cmp::assert_approx_eq;

use heatgrid::{
    HeatgridError, HeatmapBuilder,
    config::{AppConfig, LayoutConfig, PresentationConfig, StyleConfig},
    layout::Orientation,
    model::{Dataset, Section, Tab},
};

const WEEK: &str = r#"
    [[sections]]
    section = "Monday"
    tabs = [
        { title = "Morning", value = 30 },
        { title = "Afternoon", value = 130, url = "/mon/pm" },
        { title = "Evening", value = 0 },
    ]

    [[sections]]
    section = "Tuesday"
    tabs = [
        { title = "Morning", value = 250 },
        { title = "Afternoon", value = 70 },
        { title = "Evening", value = 190 },
    ]
"#;

#[test]
fn test_builder_default() {
    let builder = HeatmapBuilder::default();
    assert!(builder.config().presentation().color_distribution().is_empty());
}

#[test]
fn test_parse_dataset() {
    let dataset = HeatmapBuilder::default().parse(WEEK).expect("Failed to parse dataset");

    assert_eq!(dataset.section_count(), 2);
    assert_eq!(dataset.max_section_len(), 3);
    assert_eq!(dataset.tab(0, 1).and_then(Tab::url), Some("/mon/pm"));
    assert_approx_eq!(f64, dataset.tab(1, 0).map(Tab::value).unwrap_or_default(), 250.0);
}

#[test]
fn test_parse_invalid_dataset_returns_error() {
    let result = HeatmapBuilder::default().parse("[[sections]]\ntabs = 3");
    match result {
        Err(HeatgridError::Parse { src, .. }) => assert!(src.contains("tabs = 3")),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_render_week() {
    let builder = HeatmapBuilder::default();
    let dataset = builder.parse(WEEK).unwrap();
    let svg = builder.render_svg(&dataset).expect("Failed to render");

    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    // 3 * 11 - 1 + 42 wide, 2 * 11 high
    assert!(svg.contains(r#"viewBox="0 0 74 22""#));
    assert!(svg.contains("Monda"));
    assert!(!svg.contains(">Monday<"));
    assert_eq!(svg.matches("<rect").count(), 6);
    assert!(svg.contains(r#"data-url="/mon/pm""#));
}

#[test]
fn test_render_with_config() {
    let config = AppConfig::new(
        LayoutConfig::default().with_gutter_size(2.0),
        PresentationConfig::default()
            .with_color_distribution(vec![60.0, 120.0, 180.0, 240.0])
            .with_class_prefix("color-github"),
        StyleConfig::default().with_background_color("#eeeeee"),
    );
    let builder = HeatmapBuilder::new(config);
    let svg = builder.render_svg(&builder.parse(WEEK).unwrap()).unwrap();

    assert!(svg.contains(r#"class="color-github-0""#));
    assert!(svg.contains(r#"class="color-github-4""#));
    assert!(svg.contains("fill="));
}

#[test]
fn test_invalid_style_is_config_error() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        PresentationConfig::default(),
        StyleConfig::default().with_background_color("not-a-color"),
    );
    let builder = HeatmapBuilder::new(config);
    let result = builder.render_svg(&Dataset::default());
    assert!(matches!(result, Err(HeatgridError::Config(_))));
}

#[test]
fn test_empty_dataset_renders() {
    let svg = HeatmapBuilder::default().render_svg(&Dataset::default()).unwrap();
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn test_engine_tracks_updates_and_clicks() {
    let builder = HeatmapBuilder::default();
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&clicks);

    let mut engine = builder
        .engine(builder.parse(WEEK).unwrap())
        .with_on_click(move |event| {
            recorded.borrow_mut().push((
                event.value().map(|cell| cell.value()),
                event.section_index(),
                event.cell_index(),
            ));
        });
    assert_eq!(engine.orientation(), Orientation::Vertical);

    engine.handle_click(1, 2);
    engine.handle_click(1, 9);

    // Three single-tab sections flip the grid.
    engine.update(Dataset::new(vec![
        Section::new("a", vec![Tab::new("x", 1.0)]),
        Section::new("b", vec![Tab::new("y", 2.0)]),
        Section::new("c", vec![Tab::new("z", 3.0)]),
    ]));
    assert_eq!(engine.orientation(), Orientation::Horizontal);
    let svg = builder.render_engine_svg(&engine).unwrap();
    assert_eq!(svg.matches("<rect").count(), 3);

    assert_eq!(*clicks.borrow(), vec![(Some(190.0), 1, 2), (None, 1, 9)]);
}

#[test]
fn test_builder_reusability() {
    let builder = HeatmapBuilder::default();
    let first = builder.render_svg(&builder.parse(WEEK).unwrap()).unwrap();
    let second = builder.render_svg(&builder.parse(WEEK).unwrap()).unwrap();
    assert_eq!(first, second);
}
