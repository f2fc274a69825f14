//! Foundation types for the mosaic layout engine.
//!
//! This crate holds the platform-agnostic values shared by the layout
//! engine and its hosts: points, sizes, rectangles, edge insets, the
//! `(section, item)` index pair, and the error type.

pub mod error;
pub mod geometry;
pub mod index;

pub use error::{MosaicError, Result};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use index::ItemIndex;
