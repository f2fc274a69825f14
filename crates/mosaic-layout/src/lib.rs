//! mosaic-layout: geometry for sectioned mosaic grids.
//!
//! Sections stack vertically, each with an optional header and footer.
//! Items inside a section form a uniform grid, except that a section may
//! promote its first item to a big cell spanning `N-1` columns and rows.
//!
//! The engine never renders anything. A [`MosaicDelegate`] answers the
//! per-section questions, [`layout`] turns the answers into a
//! [`LayoutMap`], and hosts query the map for frames.

pub mod delegate;
pub mod engine;
pub mod map;
pub mod placement;
pub mod scene;
pub mod section;
pub mod sizing;

#[cfg(test)]
pub(crate) mod test_utils;

pub use delegate::{ContentDescriptor, MosaicDelegate};
pub use engine::{MosaicLayout, layout};
pub use map::{ElementKind, ElementRef, LayoutEntry, LayoutMap};
pub use placement::{CellKind, GridPosition};
pub use scene::{SceneConfig, SectionConfig};
pub use section::SectionSpec;

pub use mosaic_types::{EdgeInsets, ItemIndex, MosaicError, Point, Rect, Result, Size};
