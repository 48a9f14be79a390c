//! Per-cell presentation derived from data and caller callbacks.
//!
//! Each tab of a [`Dataset`] is turned into a [`CellPresentation`] carrying the
//! CSS class, title and tooltip text a renderer needs. The derivation is
//! driven by a [`Presenter`], which bundles three callback sources:
//!
//! - [`ClassSource`] - CSS class for a value (default: `color-filled` / `color-empty`)
//! - [`TitleSource`] - Optional title text (default: no title)
//! - [`TooltipSource`] - Tooltip text, or a static map of data attributes
//!
//! Every source is a tagged variant: either a static value or a computed
//! callback. Sources are resolved once per cell while building the
//! [`PresentationCache`], never during geometry queries.
//!
//! # Example
//!
//! ```
//! # use heatgrid_core::model::{Dataset, Section, Tab};
//! # use heatgrid_core::presentation::{build_cache, ClassSource, Presenter};
//! let dataset = Dataset::new(vec![
//!     Section::new("Mon", vec![Tab::new("standup", 15.0), Tab::new("review", 90.0)]),
//! ]);
//!
//! let presenter = Presenter::new().with_class_source(ClassSource::computed(|tab, _| {
//!     match tab {
//!         Some(tab) if tab.value() >= 60.0 => "long".to_string(),
//!         Some(_) => "short".to_string(),
//!         None => "none".to_string(),
//!     }
//! }));
//!
//! let cache = build_cache(&dataset, &presenter);
//! assert_eq!(cache.get(0, 0).unwrap().class_name(), "short");
//! assert_eq!(cache.get(0, 1).unwrap().tooltip_text(), "review: 90");
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::model::{Dataset, Section, SectionId, Tab};

/// Class assigned to cells backed by a tab when no class source is configured.
pub const FILLED_CLASS: &str = "color-filled";

/// Class assigned to cells without a backing tab.
pub const EMPTY_CLASS: &str = "color-empty";

/// Signature of a computed class callback: `(tab, color_distribution) -> class`.
pub type ClassFn = dyn Fn(Option<&Tab>, &[f64]) -> String;

/// Signature of a computed title callback: `(tab, section_id) -> title`.
pub type TitleFn = dyn Fn(Option<&Tab>, Option<&SectionId>) -> Option<String>;

/// Signature of a computed tooltip callback: `(tab) -> text`.
pub type TooltipFn = dyn Fn(Option<&Tab>) -> String;

/// Source of the CSS class name of a cell.
pub enum ClassSource {
    Static(String),
    Computed(Box<ClassFn>),
}

impl ClassSource {
    /// Wraps a closure as a computed class source.
    pub fn computed(f: impl Fn(Option<&Tab>, &[f64]) -> String + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    fn resolve(&self, tab: Option<&Tab>, color_distribution: &[f64]) -> String {
        match self {
            Self::Static(class_name) => class_name.clone(),
            Self::Computed(f) => f(tab, color_distribution),
        }
    }
}

impl Default for ClassSource {
    fn default() -> Self {
        Self::computed(default_class_for_value)
    }
}

impl fmt::Debug for ClassSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(class_name) => f.debug_tuple("Static").field(class_name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Default classification: any present tab is filled, a missing one is empty.
pub fn default_class_for_value(tab: Option<&Tab>, _color_distribution: &[f64]) -> String {
    match tab {
        Some(_) => FILLED_CLASS.to_string(),
        None => EMPTY_CLASS.to_string(),
    }
}

/// Source of the title text of a cell.
#[derive(Default)]
pub enum TitleSource {
    #[default]
    None,
    Static(String),
    Computed(Box<TitleFn>),
}

impl TitleSource {
    /// Wraps a closure as a computed title source.
    pub fn computed(f: impl Fn(Option<&Tab>, Option<&SectionId>) -> Option<String> + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    fn resolve(&self, tab: Option<&Tab>, section: Option<&SectionId>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Static(title) => Some(title.clone()),
            Self::Computed(f) => f(tab, section),
        }
    }
}

impl fmt::Debug for TitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Static(title) => f.debug_tuple("Static").field(title).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Source of the tooltip of a cell.
///
/// `Attributes` is a static map of data attributes attached to every cell
/// (e.g. `data-toggle = "tooltip"` for third-party tooltip widgets). With a
/// static source the tooltip text falls back to `"{title}: {value}"`.
pub enum TooltipSource {
    Attributes(IndexMap<String, String>),
    Computed(Box<TooltipFn>),
}

impl TooltipSource {
    /// Wraps a closure as a computed tooltip source.
    pub fn computed(f: impl Fn(Option<&Tab>) -> String + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    fn resolve(&self, tab: Option<&Tab>) -> String {
        match self {
            Self::Computed(f) => f(tab),
            Self::Attributes(_) => tab
                .map(|tab| format!("{}: {}", tab.title(), tab.value()))
                .unwrap_or_default(),
        }
    }

    /// Returns the static data attributes, if this source has any.
    pub fn attributes(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Attributes(attributes) if !attributes.is_empty() => Some(attributes),
            _ => None,
        }
    }
}

impl Default for TooltipSource {
    fn default() -> Self {
        Self::Attributes(IndexMap::new())
    }
}

impl fmt::Debug for TooltipSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes(attributes) => f.debug_tuple("Attributes").field(attributes).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Class callback bucketing values by an ascending list of thresholds.
///
/// A value lands in bucket `n`, where `n` is the number of thresholds it is
/// greater than or equal to, and is classed `"{prefix}-{n}"`. Missing tabs
/// are classed [`EMPTY_CLASS`].
///
/// # Examples
///
/// ```
/// # use heatgrid_core::model::Tab;
/// # use heatgrid_core::presentation::ThresholdClassifier;
/// let classifier = ThresholdClassifier::new("color-github");
/// let thresholds = [60.0, 120.0, 180.0, 240.0];
///
/// assert_eq!(classifier.classify(Some(&Tab::new("a", 30.0)), &thresholds), "color-github-0");
/// assert_eq!(classifier.classify(Some(&Tab::new("b", 120.0)), &thresholds), "color-github-2");
/// assert_eq!(classifier.classify(Some(&Tab::new("c", 999.0)), &thresholds), "color-github-4");
/// assert_eq!(classifier.classify(None, &thresholds), "color-empty");
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdClassifier {
    prefix: String,
}

impl ThresholdClassifier {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn classify(&self, tab: Option<&Tab>, thresholds: &[f64]) -> String {
        let Some(tab) = tab else {
            return EMPTY_CLASS.to_string();
        };
        let bucket = thresholds
            .iter()
            .filter(|threshold| tab.value() >= **threshold)
            .count();
        format!("{}-{bucket}", self.prefix)
    }

    /// Converts this classifier into a computed [`ClassSource`].
    pub fn into_source(self) -> ClassSource {
        ClassSource::computed(move |tab, thresholds| self.classify(tab, thresholds))
    }
}

/// Derived display attributes of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPresentation {
    section: SectionId,
    title: Option<String>,
    value: f64,
    url: Option<String>,
    class_name: String,
    tooltip_text: String,
}

impl CellPresentation {
    /// Identifier of the section the cell belongs to.
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn tooltip_text(&self) -> &str {
        &self.tooltip_text
    }
}

/// Bundle of callback sources used to present cells.
#[derive(Debug, Default)]
pub struct Presenter {
    class_source: ClassSource,
    title_source: TitleSource,
    tooltip_source: TooltipSource,
    color_distribution: Vec<f64>,
}

impl Presenter {
    /// Creates a presenter with the default sources and no color distribution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_source(mut self, source: ClassSource) -> Self {
        self.class_source = source;
        self
    }

    pub fn with_title_source(mut self, source: TitleSource) -> Self {
        self.title_source = source;
        self
    }

    pub fn with_tooltip_source(mut self, source: TooltipSource) -> Self {
        self.tooltip_source = source;
        self
    }

    /// Sets the thresholds passed through to the class source.
    ///
    /// The presenter does not interpret these values itself.
    pub fn with_color_distribution(mut self, color_distribution: Vec<f64>) -> Self {
        self.color_distribution = color_distribution;
        self
    }

    pub fn color_distribution(&self) -> &[f64] {
        &self.color_distribution
    }

    /// Static data attributes to attach to every cell, if configured.
    pub fn tooltip_attributes(&self) -> Option<&IndexMap<String, String>> {
        self.tooltip_source.attributes()
    }

    /// Presents a tab of `section`.
    pub fn present(&self, section: &Section, tab: &Tab) -> CellPresentation {
        CellPresentation {
            section: section.id().clone(),
            title: self.title_source.resolve(Some(tab), Some(section.id())),
            value: tab.value(),
            url: tab.url().map(str::to_string),
            class_name: self
                .class_source
                .resolve(Some(tab), &self.color_distribution),
            tooltip_text: self.tooltip_source.resolve(Some(tab)),
        }
    }

    /// Class of a cell without a backing tab.
    pub fn empty_class_name(&self) -> String {
        self.class_source.resolve(None, &self.color_distribution)
    }

    /// Title of a cell without a backing tab.
    pub fn empty_title(&self) -> Option<String> {
        self.title_source.resolve(None, None)
    }

    /// Tooltip text of a cell without a backing tab.
    pub fn empty_tooltip_text(&self) -> String {
        self.tooltip_source.resolve(None)
    }
}

/// Presentations of every tab, indexed by section then cell.
///
/// The cache has exactly the shape of the dataset it was built from. It is
/// never mutated; a new dataset produces a new cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationCache {
    sections: Vec<Vec<CellPresentation>>,
}

impl PresentationCache {
    pub fn sections(&self) -> &[Vec<CellPresentation>] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of presented cells in the section at `index`, or 0 if out of range.
    pub fn section_len(&self, index: usize) -> usize {
        self.sections.get(index).map_or(0, Vec::len)
    }

    /// Looks up a presentation, returning `None` for any out-of-range index.
    pub fn get(&self, section_index: usize, cell_index: usize) -> Option<&CellPresentation> {
        self.sections.get(section_index)?.get(cell_index)
    }
}

/// Builds the presentation cache for `dataset`.
pub fn build_cache(dataset: &Dataset, presenter: &Presenter) -> PresentationCache {
    let sections: Vec<Vec<CellPresentation>> = dataset
        .sections()
        .iter()
        .map(|section| {
            section
                .tabs()
                .iter()
                .map(|tab| presenter.present(section, tab))
                .collect()
        })
        .collect();

    debug!(section_count = sections.len(); "Presentation cache built");

    PresentationCache { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Section::new(
                "Intro",
                vec![
                    Tab::new("welcome", 12.0).with_url("/welcome"),
                    Tab::new("setup", 250.0),
                ],
            ),
            Section::new("Empty", vec![]),
            Section::new(7.0, vec![Tab::new("recap", 61.5)]),
        ])
    }

    #[test]
    fn test_cache_shape_matches_dataset() {
        let cache = build_cache(&dataset(), &Presenter::new());
        assert_eq!(cache.section_count(), 3);
        assert_eq!(cache.section_len(0), 2);
        assert_eq!(cache.section_len(1), 0);
        assert_eq!(cache.section_len(2), 1);
        assert_eq!(cache.section_len(3), 0);
    }

    #[test]
    fn test_default_presentation() {
        let cache = build_cache(&dataset(), &Presenter::new());
        let cell = cache.get(0, 0).unwrap();

        assert_eq!(cell.section(), &SectionId::from("Intro"));
        assert_eq!(cell.class_name(), FILLED_CLASS);
        assert_eq!(cell.title(), None);
        assert_eq!(cell.value(), 12.0);
        assert_eq!(cell.url(), Some("/welcome"));
        assert_eq!(cell.tooltip_text(), "welcome: 12");
        assert_eq!(cache.get(2, 0).unwrap().tooltip_text(), "recap: 61.5");
    }

    #[test]
    fn test_default_empty_presentation() {
        let presenter = Presenter::new();
        assert_eq!(presenter.empty_class_name(), EMPTY_CLASS);
        assert_eq!(presenter.empty_title(), None);
        assert_eq!(presenter.empty_tooltip_text(), "");
    }

    #[test]
    fn test_computed_title_receives_section() {
        let presenter = Presenter::new().with_title_source(TitleSource::computed(|tab, section| {
            let tab = tab?;
            Some(format!("{} - \"{}\"", section?, tab.title()))
        }));

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 1).unwrap().title(), Some("Intro - \"setup\""));
        assert_eq!(cache.get(2, 0).unwrap().title(), Some("7 - \"recap\""));
        assert_eq!(presenter.empty_title(), None);
    }

    #[test]
    fn test_static_sources() {
        let presenter = Presenter::new()
            .with_class_source(ClassSource::Static("cell".to_string()))
            .with_title_source(TitleSource::Static("chapter".to_string()));

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 0).unwrap().class_name(), "cell");
        assert_eq!(cache.get(0, 0).unwrap().title(), Some("chapter"));
        assert_eq!(presenter.empty_class_name(), "cell");
    }

    #[test]
    fn test_class_source_receives_distribution() {
        let presenter = Presenter::new()
            .with_color_distribution(vec![60.0, 120.0])
            .with_class_source(ClassSource::computed(|_, distribution| {
                format!("d{}", distribution.len())
            }));

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 0).unwrap().class_name(), "d2");
        assert_eq!(presenter.color_distribution(), &[60.0, 120.0]);
    }

    #[test]
    fn test_threshold_classifier_source() {
        let presenter = Presenter::new()
            .with_color_distribution(vec![60.0, 120.0, 180.0, 240.0])
            .with_class_source(ThresholdClassifier::new("color-github").into_source());

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 0).unwrap().class_name(), "color-github-0");
        assert_eq!(cache.get(0, 1).unwrap().class_name(), "color-github-4");
        assert_eq!(cache.get(2, 0).unwrap().class_name(), "color-github-1");
        assert_eq!(presenter.empty_class_name(), EMPTY_CLASS);
    }

    #[test]
    fn test_computed_tooltip() {
        let presenter = Presenter::new().with_tooltip_source(TooltipSource::computed(|tab| {
            tab.map_or("nothing here".to_string(), |tab| format!("{} sec", tab.value()))
        }));

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 1).unwrap().tooltip_text(), "250 sec");
        assert_eq!(presenter.empty_tooltip_text(), "nothing here");
        assert!(presenter.tooltip_attributes().is_none());
    }

    #[test]
    fn test_tooltip_attributes_keep_order() {
        let mut attributes = IndexMap::new();
        attributes.insert("data-toggle".to_string(), "tooltip".to_string());
        attributes.insert("data-placement".to_string(), "top".to_string());
        let presenter = Presenter::new().with_tooltip_source(TooltipSource::Attributes(attributes));

        let keys: Vec<_> = presenter.tooltip_attributes().unwrap().keys().collect();
        assert_eq!(keys, ["data-toggle", "data-placement"]);

        let cache = build_cache(&dataset(), &presenter);
        assert_eq!(cache.get(0, 0).unwrap().tooltip_text(), "welcome: 12");
    }

    #[test]
    fn test_empty_attributes_are_not_exposed() {
        assert!(Presenter::new().tooltip_attributes().is_none());
    }
}
