//! Geometric primitives for heatmap layout and positioning.
//!
//! This module provides the small set of geometric types the layout engine
//! produces: positions of cells and labels, square sizes and cell bounds.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in grid space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - The box a cell square occupies
//!
//! Coordinates follow SVG: the origin is the top-left corner and y grows
//! downward.

/// A 2D point representing a position in grid coordinate space.
///
/// # Examples
///
/// ```
/// # use heatgrid_core::geometry::Point;
/// let section = Point::new(0.0, 22.0);
/// let cell = Point::new(11.0, 0.0);
///
/// let absolute = section.add_point(cell);
/// assert_eq!(absolute.x(), 11.0);
/// assert_eq!(absolute.y(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Formats the point as an SVG `translate(x, y)` transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heatgrid_core::geometry::Point;
    /// assert_eq!(Point::new(36.0, 0.0).to_translate(), "translate(36, 0)");
    /// ```
    pub fn to_translate(self) -> String {
        format!("translate({}, {})", self.x, self.y)
    }
}

/// Width and height of a cell or of the whole grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size with equal width and height
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// Axis-aligned box covering a cell square, in absolute grid coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}
