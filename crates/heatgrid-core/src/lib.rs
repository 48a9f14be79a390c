//! Heatgrid Core Types and Definitions
//!
//! This crate provides the layout engine behind Heatgrid heatmaps. It
//! includes:
//!
//! - **Model**: Sections and tabs supplied by the caller ([`model`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Presentation**: Per-cell class, title and tooltip derivation ([`presentation`] module)
//! - **Layout**: Orientation resolution and grid geometry ([`layout`] module)
//! - **Engine**: The stateful [`engine::LayoutEngine`] tying the above together
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//!
//! Nothing in this crate performs I/O and no operation can fail: missing
//! data is rendered as empty cells.

pub mod color;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod presentation;
