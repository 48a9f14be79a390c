//! Input data model for heatmaps.
//!
//! A heatmap is a [`Dataset`]: an ordered list of [`Section`]s, each holding an
//! ordered list of [`Tab`]s. Sections may have different lengths; the longest
//! one fixes the grid width and shorter ones leave trailing empty space.
//!
//! All types implement [`serde::Deserialize`], so a dataset can be loaded from
//! TOML:
//!
//! ```
//! # use heatgrid_core::model::Dataset;
//! let dataset: Dataset = toml::from_str(r#"
//!     [[sections]]
//!     section = "Week 1"
//!     tabs = [
//!         { title = "Mon", value = 3 },
//!         { title = "Tue", value = 0.5, url = "https://example.com/tue" },
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(dataset.section_count(), 1);
//! assert_eq!(dataset.max_section_len(), 2);
//! ```

use std::fmt;

use serde::Deserialize;

/// Identifier of a section, used as the source of its label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SectionId {
    Text(String),
    Number(f64),
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for SectionId {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One data point within a section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tab {
    title: String,
    value: f64,
    #[serde(default)]
    url: Option<String>,
}

impl Tab {
    /// Creates a tab without a URL.
    pub fn new(title: impl Into<String>, value: f64) -> Self {
        Self {
            title: title.into(),
            value,
            url: None,
        }
    }

    /// Attaches a URL to this tab (builder style).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// A row or column group of tabs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    section: SectionId,
    #[serde(default)]
    tabs: Vec<Tab>,
}

impl Section {
    pub fn new(section: impl Into<SectionId>, tabs: Vec<Tab>) -> Self {
        Self {
            section: section.into(),
            tabs,
        }
    }

    /// Returns the identifier this section is labelled with.
    pub fn id(&self) -> &SectionId {
        &self.section
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs in this section.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Ordered sections in display order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    sections: Vec<Section>,
}

impl Dataset {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the tab count of the longest section, or 0 without sections.
    pub fn max_section_len(&self) -> usize {
        self.sections.iter().map(Section::len).max().unwrap_or(0)
    }

    /// Returns the tab count of the section at `index`, or 0 if out of range.
    pub fn section_len(&self, index: usize) -> usize {
        self.section(index).map_or(0, Section::len)
    }

    /// Looks up a tab, returning `None` for any out-of-range index.
    pub fn tab(&self, section_index: usize, cell_index: usize) -> Option<&Tab> {
        self.section(section_index)?.tabs.get(cell_index)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromIterator<Section> for Dataset {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
