//! Configuration types for Heatgrid rendering.
//!
//! This module provides configuration structures that control how heatmaps
//! are laid out, presented and styled. All types implement
//! [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Gutter size, preferred orientation and label visibility.
//! - [`PresentationConfig`] - Declarative stand-ins for the class, title and tooltip callbacks.
//! - [`StyleConfig`] - Document-level styling such as the background color.
//!
//! # Example
//!
//! ```
//! # use heatgrid::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     gutter_size = 2
//!
//!     [presentation]
//!     color_distribution = [60, 120, 180, 240]
//!     class_prefix = "color-github"
//! "#).unwrap();
//!
//! assert_eq!(config.layout().gutter_size(), 2.0);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use heatgrid_core::{
    color::Color,
    presentation::{ClassSource, Presenter, ThresholdClassifier, TitleSource, TooltipSource},
};

pub use heatgrid_core::layout::LayoutConfig;

/// Class prefix used for bucketed classes when none is configured.
pub const DEFAULT_CLASS_PREFIX: &str = "color-scale";

/// Top-level configuration combining layout, presentation and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Presentation configuration section.
    #[serde(default)]
    presentation: PresentationConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Gutter, orientation and label settings.
    /// * `presentation` - Class, title and tooltip settings.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, presentation: PresentationConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            presentation,
            style,
        }
    }

    /// Replaces the layout section.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the presentation configuration.
    pub fn presentation(&self) -> &PresentationConfig {
        &self.presentation
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Declarative presentation settings.
///
/// Callbacks cannot be written in a configuration file, so this section maps
/// onto the built-in sources of [`heatgrid_core::presentation`]:
///
/// - An empty `color_distribution` keeps the default `color-filled` /
///   `color-empty` classification; otherwise values are bucketed by a
///   [`ThresholdClassifier`] using `class_prefix`.
/// - `show_titles` adds a `"{section} - \"{title}\"; {value}"` title to each cell.
/// - `tooltip_attributes` are attached to every cell as data attributes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    color_distribution: Vec<f64>,
    class_prefix: Option<String>,
    show_titles: bool,
    tooltip_attributes: IndexMap<String, String>,
}

impl PresentationConfig {
    pub fn with_color_distribution(mut self, color_distribution: Vec<f64>) -> Self {
        self.color_distribution = color_distribution;
        self
    }

    pub fn with_class_prefix(mut self, class_prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(class_prefix.into());
        self
    }

    pub fn with_titles(mut self, show_titles: bool) -> Self {
        self.show_titles = show_titles;
        self
    }

    pub fn with_tooltip_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tooltip_attributes.insert(name.into(), value.into());
        self
    }

    pub fn color_distribution(&self) -> &[f64] {
        &self.color_distribution
    }

    /// Returns the class prefix for bucketed classes.
    pub fn class_prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or(DEFAULT_CLASS_PREFIX)
    }

    pub fn show_titles(&self) -> bool {
        self.show_titles
    }

    /// Builds the [`Presenter`] described by this configuration.
    pub fn to_presenter(&self) -> Presenter {
        let class_source = if self.color_distribution.is_empty() {
            ClassSource::default()
        } else {
            ThresholdClassifier::new(self.class_prefix()).into_source()
        };

        let title_source = if self.show_titles {
            TitleSource::computed(|tab, section| {
                let tab = tab?;
                let section = section.map(ToString::to_string).unwrap_or_default();
                Some(format!("{section} - \"{}\"; {}", tab.title(), tab.value()))
            })
        } else {
            TitleSource::None
        };

        Presenter::new()
            .with_class_source(class_source)
            .with_title_source(title_source)
            .with_tooltip_source(TooltipSource::Attributes(self.tooltip_attributes.clone()))
            .with_color_distribution(self.color_distribution.clone())
    }
}

/// Visual styling configuration for rendered heatmaps.
///
/// Cell colors come from CSS classes; only document-level options live here.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the document, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use heatgrid_core::{
        model::{Dataset, Section, Tab},
        presentation::build_cache,
    };

    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![Section::new(
            "Chapter 1",
            vec![Tab::new("Intro", 45.0), Tab::new("Deep dive", 200.0)],
        )])
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout(), &LayoutConfig::default());
        assert!(config.presentation().color_distribution().is_empty());
        assert_eq!(config.presentation().class_prefix(), DEFAULT_CLASS_PREFIX);
        assert!(!config.presentation().show_titles());
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            gutter_size = 3
            horizontal = true
            show_section_labels = false

            [presentation]
            color_distribution = [60, 120]
            class_prefix = "level"
            show_titles = true

            [presentation.tooltip_attributes]
            data-toggle = "tooltip"

            [style]
            background_color = "#ffffff"
            "##,
        )
        .unwrap();

        assert!(config.layout().horizontal());
        assert!(!config.layout().show_section_labels());
        assert_eq!(config.presentation().class_prefix(), "level");
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::default().with_background_color("definitely-not");
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_default_presenter_classes() {
        let presenter = PresentationConfig::default().to_presenter();
        let cache = build_cache(&dataset(), &presenter);

        assert_eq!(cache.get(0, 0).unwrap().class_name(), "color-filled");
        assert_eq!(cache.get(0, 0).unwrap().title(), None);
        assert!(presenter.tooltip_attributes().is_none());
    }

    #[test]
    fn test_bucketed_presenter() {
        let presenter = PresentationConfig::default()
            .with_color_distribution(vec![60.0, 120.0, 180.0, 240.0])
            .with_class_prefix("color-github")
            .with_titles(true)
            .with_tooltip_attribute("data-toggle", "tooltip")
            .to_presenter();
        let cache = build_cache(&dataset(), &presenter);

        assert_eq!(cache.get(0, 0).unwrap().class_name(), "color-github-0");
        assert_eq!(cache.get(0, 1).unwrap().class_name(), "color-github-3");
        assert_eq!(
            cache.get(0, 1).unwrap().title(),
            Some("Chapter 1 - \"Deep dive\"; 200")
        );
        assert_eq!(presenter.empty_title(), None);
        assert_eq!(
            presenter.tooltip_attributes().unwrap().get("data-toggle").map(String::as_str),
            Some("tooltip")
        );
    }
}
