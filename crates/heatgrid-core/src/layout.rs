//! Orientation resolution and grid geometry.
//!
//! This module maps a dataset's shape onto absolute SVG coordinates. All
//! functions are pure: the same inputs always produce the same geometry.
//!
//! # Orientations
//!
//! ```text
//!  Vertical (sections are rows)        Horizontal (sections are columns)
//!
//!  ■ ■ ■        A                       A  B  C
//!  ■ ■ ■ ■      BB                      ■  ■  ■
//!  ■            CCC                     ■  ■
//!                                          ■
//! ```
//!
//! In the vertical orientation labels sit to the right of the grid; in the
//! horizontal orientation they sit above it.
//!
//! # Example
//!
//! ```
//! # use heatgrid_core::layout::{compute_geometry, Orientation};
//! let geometry = compute_geometry(Orientation::Vertical, 3, 3, 1.0, true);
//!
//! assert_eq!(geometry.grid_width(), 32.0);
//! assert_eq!(geometry.section_label_size(), 42.0);
//! assert_eq!(geometry.view_box(), "0 0 74 33");
//! ```

use log::debug;
use serde::Deserialize;

use crate::{
    geometry::{Bounds, Point, Size},
    model::Dataset,
};

/// Side length of a cell square.
pub const SQUARE_SIZE: f32 = 10.0;

/// Space between the grid and the section labels.
pub const SECTION_LABEL_GUTTER_SIZE: f32 = 4.0;

/// Nudge aligning vertical label baselines with their row.
pub const LABEL_VERTICAL_OFFSET: f32 = -2.0;

/// Labels longer than this many characters are cut.
pub const MAX_LABEL_CHARS: usize = 5;

/// Direction sections are laid out in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Sections are stacked top-to-bottom, cells run left-to-right.
    #[default]
    Vertical,
    /// Sections run left-to-right, cells run top-to-bottom.
    Horizontal,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

/// Layout options supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Space between adjacent squares.
    gutter_size: f32,

    /// Preferred orientation; may be overridden by [`resolve_orientation`].
    horizontal: bool,

    show_section_labels: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gutter_size: 1.0,
            horizontal: false,
            show_section_labels: true,
        }
    }
}

impl LayoutConfig {
    pub fn new(gutter_size: f32, horizontal: bool, show_section_labels: bool) -> Self {
        Self {
            gutter_size,
            horizontal,
            show_section_labels,
        }
    }

    pub fn with_gutter_size(mut self, gutter_size: f32) -> Self {
        self.gutter_size = gutter_size;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_section_labels(mut self, show_section_labels: bool) -> Self {
        self.show_section_labels = show_section_labels;
        self
    }

    pub fn gutter_size(&self) -> f32 {
        self.gutter_size
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn show_section_labels(&self) -> bool {
        self.show_section_labels
    }
}

/// Resolves the effective orientation of `dataset`.
///
/// When there are more sections than tabs in the longest section, the
/// layout is forced horizontal regardless of `configured_horizontal`.
pub fn resolve_orientation(dataset: &Dataset, configured_horizontal: bool) -> Orientation {
    let section_count = dataset.section_count();
    let max_section_len = dataset.max_section_len();

    if section_count > max_section_len {
        if !configured_horizontal {
            debug!(section_count, max_section_len; "Forcing horizontal orientation");
        }
        return Orientation::Horizontal;
    }

    Orientation::from_horizontal(configured_horizontal)
}

/// Absolute geometry of a heatmap grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    orientation: Orientation,
    square_size_with_gutter: f32,
    section_label_size: f32,
    grid_width: f32,
    total_width: f32,
    height: f32,
}

/// Computes the grid geometry for a dataset shape.
///
/// Width and height are expressed along the vertical orientation's axes;
/// [`GridGeometry::view_box`] swaps them for horizontal layouts.
///
/// The grid width is `max_section_len * (SQUARE_SIZE + gutter) - gutter`,
/// clamped to 0: an empty dataset yields a zero-width grid rather than
/// `-gutter`, so an empty vertical heatmap with labels is `0 0 42 0`.
pub fn compute_geometry(
    orientation: Orientation,
    section_count: usize,
    max_section_len: usize,
    gutter_size: f32,
    show_section_labels: bool,
) -> GridGeometry {
    let square_size_with_gutter = SQUARE_SIZE + gutter_size;

    let section_label_size = match (show_section_labels, orientation) {
        (false, _) => 0.0,
        (true, Orientation::Horizontal) => SQUARE_SIZE + SECTION_LABEL_GUTTER_SIZE,
        (true, Orientation::Vertical) => 3.0 * (SQUARE_SIZE + SECTION_LABEL_GUTTER_SIZE),
    };

    let grid_width =
        (max_section_len as f32 * square_size_with_gutter - gutter_size).max(0.0);

    GridGeometry {
        orientation,
        square_size_with_gutter,
        section_label_size,
        grid_width,
        total_width: grid_width + section_label_size,
        height: section_count as f32 * square_size_with_gutter,
    }
}

impl GridGeometry {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn square_size_with_gutter(&self) -> f32 {
        self.square_size_with_gutter
    }

    /// Space reserved for section labels, 0 when labels are hidden.
    pub fn section_label_size(&self) -> f32 {
        self.section_label_size
    }

    /// Extent of the longest section, without the trailing gutter.
    pub fn grid_width(&self) -> f32 {
        self.grid_width
    }

    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Size of the drawing, with axes swapped for horizontal layouts.
    pub fn size(&self) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(self.height, self.total_width),
            Orientation::Vertical => Size::new(self.total_width, self.height),
        }
    }

    /// The SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        let size = self.size();
        format!("0 0 {} {}", size.width(), size.height())
    }

    /// Position of a cell relative to its section.
    pub fn cell_offset(&self, cell_index: usize) -> Point {
        let along = cell_index as f32 * self.square_size_with_gutter;
        match self.orientation {
            Orientation::Horizontal => Point::new(0.0, along),
            Orientation::Vertical => Point::new(along, 0.0),
        }
    }

    /// Translation of a section relative to the sections group.
    pub fn section_offset(&self, section_index: usize) -> Point {
        let across = section_index as f32 * self.square_size_with_gutter;
        match self.orientation {
            Orientation::Horizontal => Point::new(across, 0.0),
            Orientation::Vertical => Point::new(0.0, across),
        }
    }

    /// Translation of the labels group, if any.
    pub fn labels_offset(&self) -> Option<Point> {
        match self.orientation {
            Orientation::Horizontal => None,
            Orientation::Vertical => Some(Point::new(
                self.grid_width + SECTION_LABEL_GUTTER_SIZE,
                0.0,
            )),
        }
    }

    /// Translation of the sections group, if any.
    pub fn sections_offset(&self) -> Option<Point> {
        match self.orientation {
            Orientation::Horizontal => Some(Point::new(0.0, self.section_label_size)),
            Orientation::Vertical => None,
        }
    }

    /// Text anchor of a section label relative to the labels group.
    pub fn section_label_position(&self, section_index: usize) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(
                section_index as f32 * self.square_size_with_gutter,
                self.section_label_size - SECTION_LABEL_GUTTER_SIZE,
            ),
            Orientation::Vertical => Point::new(
                0.0,
                (section_index + 1) as f32 * self.square_size_with_gutter + LABEL_VERTICAL_OFFSET,
            ),
        }
    }

    /// Absolute top-left corner of a cell.
    pub fn cell_position(&self, section_index: usize, cell_index: usize) -> Point {
        self.sections_offset()
            .unwrap_or_default()
            .add_point(self.section_offset(section_index))
            .add_point(self.cell_offset(cell_index))
    }

    /// Absolute bounds of a cell square.
    pub fn cell_bounds(&self, section_index: usize, cell_index: usize) -> Bounds {
        Bounds::new_from_top_left(
            self.cell_position(section_index, cell_index),
            Size::square(SQUARE_SIZE),
        )
    }

    /// Absolute anchor of a section label.
    pub fn absolute_label_position(&self, section_index: usize) -> Point {
        self.labels_offset()
            .unwrap_or_default()
            .add_point(self.section_label_position(section_index))
    }
}

/// Cuts a label to at most [`MAX_LABEL_CHARS`] characters.
///
/// ```
/// # use heatgrid_core::layout::truncate_label;
/// assert_eq!(truncate_label("Chapter"), "Chapt");
/// assert_eq!(truncate_label("Mon"), "Mon");
/// ```
pub fn truncate_label(label: &str) -> String {
    label.chars().take(MAX_LABEL_CHARS).collect()
}
