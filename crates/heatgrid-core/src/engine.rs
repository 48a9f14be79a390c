//! The stateful layout engine consumed by rendering layers.
//!
//! [`LayoutEngine`] owns a [`Dataset`], the caller's [`LayoutConfig`] and
//! [`Presenter`], and keeps two derived values current: the
//! [`PresentationCache`] and the resolved [`Orientation`]. Both are rebuilt
//! whenever their inputs change; geometry is computed on demand.
//!
//! # Example
//!
//! ```
//! # use std::{cell::RefCell, rc::Rc};
//! # use heatgrid_core::engine::LayoutEngine;
//! # use heatgrid_core::layout::LayoutConfig;
//! # use heatgrid_core::model::{Dataset, Section, Tab};
//! # use heatgrid_core::presentation::Presenter;
//! let dataset = Dataset::new(vec![
//!     Section::new("Mon", vec![Tab::new("a", 1.0), Tab::new("b", 2.0)]),
//!     Section::new("Tue", vec![Tab::new("c", 3.0)]),
//! ]);
//!
//! let clicked = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&clicked);
//! let engine = LayoutEngine::new(dataset, LayoutConfig::default(), Presenter::new())
//!     .with_on_click(move |event| {
//!         sink.borrow_mut().push((event.section_index(), event.cell_index(), event.value().is_some()));
//!     });
//!
//! engine.handle_click(0, 1);
//! engine.handle_click(1, 1);
//! assert_eq!(*clicked.borrow(), vec![(0, 1, true), (1, 1, false)]);
//! ```

use std::{borrow::Cow, fmt};

use log::{debug, trace};

use crate::{
    geometry::{Bounds, Point},
    layout::{
        GridGeometry, LayoutConfig, Orientation, compute_geometry, resolve_orientation,
        truncate_label,
    },
    model::{Dataset, Section},
    presentation::{CellPresentation, PresentationCache, Presenter, build_cache},
};

/// Payload dispatched to the click handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent<'a> {
    value: Option<&'a CellPresentation>,
    section_index: usize,
    cell_index: usize,
}

impl<'a> ClickEvent<'a> {
    /// Presentation of the clicked cell, `None` when no tab backs it.
    pub fn value(&self) -> Option<&'a CellPresentation> {
        self.value
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn cell_index(&self) -> usize {
        self.cell_index
    }
}

/// Signature of a click handler.
pub type ClickHandler = dyn Fn(&ClickEvent<'_>);

/// A presented cell together with its absolute bounds.
#[derive(Debug, Clone, Copy)]
pub struct PositionedCell<'a> {
    section_index: usize,
    cell_index: usize,
    bounds: Bounds,
    presentation: &'a CellPresentation,
}

impl<'a> PositionedCell<'a> {
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn presentation(&self) -> &'a CellPresentation {
        self.presentation
    }
}

/// A truncated section label and its anchor relative to the labels group.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLabel {
    section_index: usize,
    position: Point,
    text: String,
}

impl SectionLabel {
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Layout engine for a single heatmap.
pub struct LayoutEngine {
    dataset: Dataset,
    config: LayoutConfig,
    presenter: Presenter,
    on_click: Option<Box<ClickHandler>>,
    cache: PresentationCache,
    orientation: Orientation,
}

impl LayoutEngine {
    /// Creates an engine, building the cache and resolving the orientation.
    pub fn new(dataset: Dataset, config: LayoutConfig, presenter: Presenter) -> Self {
        let cache = build_cache(&dataset, &presenter);
        let orientation = resolve_orientation(&dataset, config.horizontal());

        debug!(
            section_count = dataset.section_count(),
            max_section_len = dataset.max_section_len(),
            orientation:? = orientation;
            "Layout engine created"
        );

        Self {
            dataset,
            config,
            presenter,
            on_click: None,
            cache,
            orientation,
        }
    }

    /// Sets the handler invoked by [`LayoutEngine::handle_click`].
    pub fn with_on_click(mut self, handler: impl Fn(&ClickEvent<'_>) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Replaces the dataset, rebuilding the cache and the orientation.
    pub fn update(&mut self, dataset: Dataset) {
        self.cache = build_cache(&dataset, &self.presenter);
        self.orientation = resolve_orientation(&dataset, self.config.horizontal());
        self.dataset = dataset;

        debug!(orientation:? = self.orientation; "Layout engine updated");
    }

    /// Replaces the layout configuration and re-resolves the orientation.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.orientation = resolve_orientation(&self.dataset, config.horizontal());
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn cache(&self) -> &PresentationCache {
        &self.cache
    }

    /// The effective orientation, after the auto-flip rule.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn geometry(&self) -> GridGeometry {
        compute_geometry(
            self.orientation,
            self.dataset.section_count(),
            self.dataset.max_section_len(),
            self.config.gutter_size(),
            self.config.show_section_labels(),
        )
    }

    pub fn presentation_at(&self, section_index: usize, cell_index: usize) -> Option<&CellPresentation> {
        self.cache.get(section_index, cell_index)
    }

    /// CSS class of a cell; the empty class for cells without a tab.
    pub fn class_name_at(&self, section_index: usize, cell_index: usize) -> Cow<'_, str> {
        match self.presentation_at(section_index, cell_index) {
            Some(cell) => Cow::Borrowed(cell.class_name()),
            None => Cow::Owned(self.presenter.empty_class_name()),
        }
    }

    pub fn title_at(&self, section_index: usize, cell_index: usize) -> Option<Cow<'_, str>> {
        match self.presentation_at(section_index, cell_index) {
            Some(cell) => cell.title().map(Cow::Borrowed),
            None => self.presenter.empty_title().map(Cow::Owned),
        }
    }

    pub fn tooltip_at(&self, section_index: usize, cell_index: usize) -> Cow<'_, str> {
        match self.presentation_at(section_index, cell_index) {
            Some(cell) => Cow::Borrowed(cell.tooltip_text()),
            None => Cow::Owned(self.presenter.empty_tooltip_text()),
        }
    }

    /// Iterates over every cell backed by a tab, in section then cell order.
    pub fn cells(&self) -> impl Iterator<Item = PositionedCell<'_>> {
        let geometry = self.geometry();
        self.cache
            .sections()
            .iter()
            .enumerate()
            .flat_map(move |(section_index, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(cell_index, presentation)| PositionedCell {
                        section_index,
                        cell_index,
                        bounds: geometry.cell_bounds(section_index, cell_index),
                        presentation,
                    })
            })
    }

    /// Section labels in display order; empty when labels are hidden.
    ///
    /// Numeric section ids are labeled by their display form and truncated
    /// like text ids.
    pub fn section_labels(&self) -> impl Iterator<Item = SectionLabel> {
        let geometry = self.geometry();
        let sections: &[Section] = if self.config.show_section_labels() {
            self.dataset.sections()
        } else {
            &[]
        };

        sections
            .iter()
            .enumerate()
            .map(move |(section_index, section)| SectionLabel {
                section_index,
                position: geometry.section_label_position(section_index),
                text: truncate_label(&section.id().to_string()),
            })
    }

    /// Dispatches a click on a cell to the configured handler.
    ///
    /// Does nothing without a handler. Cells without a tab dispatch an event
    /// whose value is `None`.
    pub fn handle_click(&self, section_index: usize, cell_index: usize) {
        let Some(handler) = &self.on_click else {
            return;
        };

        let event = ClickEvent {
            value: self.presentation_at(section_index, cell_index),
            section_index,
            cell_index,
        };
        trace!(event:?; "Dispatching click");

        handler(&event);
    }
}

impl fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("dataset", &self.dataset)
            .field("config", &self.config)
            .field("presenter", &self.presenter)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}
