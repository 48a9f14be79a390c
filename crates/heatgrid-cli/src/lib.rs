//! CLI logic for the Heatgrid heatmap tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use heatgrid::{HeatgridError, HeatmapBuilder};

/// Run the Heatgrid CLI application
///
/// This function reads the dataset, renders it to SVG and writes the
/// result to the output file.
///
/// # Errors
///
/// Returns `HeatgridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), HeatgridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing dataset"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.horizontal {
        let layout = app_config.layout().with_horizontal(true);
        app_config = app_config.with_layout(layout);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = HeatmapBuilder::new(app_config);
    let dataset = builder.parse(&source)?;
    let svg = builder.render_svg(&dataset)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
