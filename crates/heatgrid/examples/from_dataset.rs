//! Example: Rendering a heatmap from a dataset built in code
//!
//! This example builds the dataset directly from the model types, buckets
//! the values with a threshold classifier and prints the resulting SVG.

use heatgrid::{
    HeatmapBuilder,
    config::{AppConfig, LayoutConfig, PresentationConfig, StyleConfig},
    model::{Dataset, Section, Tab},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset: Dataset = (1..=12)
        .map(|chapter| {
            let tabs = (1..=4)
                .map(|page| {
                    let seconds = f64::from((chapter * 37 + page * 53) % 300);
                    Tab::new(format!("Page {page}"), seconds)
                        .with_url(format!("/chapters/{chapter}/pages/{page}"))
                })
                .collect();
            Section::new(f64::from(chapter), tabs)
        })
        .collect();

    // 12 sections of 4 tabs lays out horizontally on its own.
    let config = AppConfig::new(
        LayoutConfig::default(),
        PresentationConfig::default()
            .with_color_distribution(vec![60.0, 120.0, 180.0, 240.0])
            .with_class_prefix("color-github")
            .with_titles(true),
        StyleConfig::default().with_background_color("white"),
    );

    let builder = HeatmapBuilder::new(config);
    let engine = builder.engine(dataset);
    println!("orientation: {:?}", engine.orientation());
    println!("first cell class: {}", engine.class_name_at(0, 0));

    let svg = builder.render_engine_svg(&engine)?;
    println!("{svg}");

    Ok(())
}
