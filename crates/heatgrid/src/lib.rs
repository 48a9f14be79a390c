//! Heatgrid - Calendar-style heatmaps rendered as SVG.
//!
//! A dataset is an ordered list of sections, each holding an ordered list of
//! tabs with a numeric value. Heatgrid lays the tabs out as a grid of squares
//! (one row or column per section), classifies each square for coloring and
//! renders the result to SVG.

pub mod config;
pub mod export;

mod error;

pub use heatgrid_core::{color, engine, geometry, layout, model, presentation};

pub use error::HeatgridError;

use log::{debug, info, trace};

use heatgrid_core::{engine::LayoutEngine, model::Dataset};

use config::AppConfig;

/// Builder for parsing and rendering Heatgrid heatmaps.
///
/// # Examples
///
/// ```rust
/// use heatgrid::{HeatmapBuilder, config::AppConfig};
///
/// let source = r#"
///     [[sections]]
///     section = "Monday"
///     tabs = [{ title = "Morning", value = 3 }, { title = "Evening", value = 0 }]
/// "#;
///
/// let builder = HeatmapBuilder::new(AppConfig::default());
/// let dataset = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&dataset).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct HeatmapBuilder {
    config: AppConfig,
}

impl HeatmapBuilder {
    /// Create a new heatmap builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, presentation
    ///   and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML dataset.
    ///
    /// # Errors
    ///
    /// Returns [`HeatgridError::Parse`] carrying the source text when the
    /// input is not a valid dataset.
    pub fn parse(&self, source: &str) -> Result<Dataset, HeatgridError> {
        info!("Parsing dataset");

        let dataset: Dataset =
            toml::from_str(source).map_err(|err| HeatgridError::new_parse_error(err, source))?;

        debug!(
            section_count = dataset.section_count(),
            max_section_len = dataset.max_section_len();
            "Dataset parsed successfully"
        );
        trace!(dataset:?; "Parsed dataset");

        Ok(dataset)
    }

    /// Create a layout engine for `dataset` using the configured layout and
    /// presentation.
    ///
    /// The engine can be kept around to answer per-cell queries and route
    /// clicks after rendering.
    pub fn engine(&self, dataset: Dataset) -> LayoutEngine {
        LayoutEngine::new(
            dataset,
            *self.config.layout(),
            self.config.presentation().to_presenter(),
        )
    }

    /// Render a dataset to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`HeatgridError::Config`] for an invalid style and
    /// [`HeatgridError::Export`] if rendering fails.
    pub fn render_svg(&self, dataset: &Dataset) -> Result<String, HeatgridError> {
        let engine = self.engine(dataset.clone());
        self.render_engine_svg(&engine)
    }

    /// Render the current state of an existing engine to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`HeatgridError::Config`] for an invalid style and
    /// [`HeatgridError::Export`] if rendering fails.
    pub fn render_engine_svg(&self, engine: &LayoutEngine) -> Result<String, HeatgridError> {
        let style = self.config.style();
        style.background_color().map_err(HeatgridError::Config)?;

        info!(orientation:? = engine.orientation(); "Rendering heatmap");
        let svg = export::svg::render_to_string(engine, style)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
