//! The configuration provider contract and the content snapshot a pass runs on.

use mosaic_types::{EdgeInsets, ItemIndex, MosaicError, Result, Size};

/// Answers the per-section layout questions for a collection.
///
/// Implementations should be cheap and free of side effects. The engine
/// does not cache answers, so a delegate with expensive lookups should
/// memoize internally.
pub trait MosaicDelegate {
    /// Number of grid columns in `section`. Must be at least 1.
    fn number_of_columns(&self, section: usize) -> usize;

    /// Whether the first item of `section` is promoted to a big cell.
    /// Requires at least 3 columns.
    fn shows_big_item(&self, section: usize) -> bool;

    /// Uniform row height, consulted when the section has more than one column.
    fn row_height(&self, section: usize) -> f64;

    /// Height of one item, consulted when the section has exactly one column.
    fn item_height(&self, index: ItemIndex) -> f64;

    fn section_inset(&self, section: usize) -> EdgeInsets;

    /// Vertical gap between consecutive rows.
    fn line_spacing(&self, section: usize) -> f64;

    /// Horizontal gap between neighbouring columns.
    fn interitem_spacing(&self, section: usize) -> f64;

    /// Header size; [`Size::ZERO`] means no header.
    fn header_size(&self, section: usize) -> Size;

    /// Footer size; [`Size::ZERO`] means no footer.
    fn footer_size(&self, section: usize) -> Size;
}

/// Immutable snapshot of what is being laid out: item counts per section
/// and the width available to the content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDescriptor {
    item_counts: Vec<usize>,
    available_width: f64,
}

impl ContentDescriptor {
    /// Create a descriptor from per-section item counts and the available
    /// content width.
    pub fn new(available_width: f64, item_counts: impl Into<Vec<usize>>) -> Self {
        Self {
            item_counts: item_counts.into(),
            available_width,
        }
    }

    /// Derive the available width from the hosting view's bounds width
    /// minus its own horizontal content inset.
    pub fn from_bounds(
        bounds_width: f64,
        content_inset: EdgeInsets,
        item_counts: impl Into<Vec<usize>>,
    ) -> Self {
        Self::new(bounds_width - content_inset.horizontal(), item_counts)
    }

    /// Append a section with `item_count` items.
    pub fn with_section(mut self, item_count: usize) -> Self {
        self.item_counts.push(item_count);
        self
    }

    pub fn section_count(&self) -> usize {
        self.item_counts.len()
    }

    /// Item count of `section`, 0 for sections past the end.
    pub fn item_count(&self, section: usize) -> usize {
        self.item_counts.get(section).copied().unwrap_or(0)
    }

    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// Same content laid out at a different width.
    pub fn with_available_width(&self, available_width: f64) -> Self {
        Self {
            item_counts: self.item_counts.clone(),
            available_width,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.available_width.is_finite() || self.available_width < 0.0 {
            return Err(MosaicError::InvalidWidth(self.available_width));
        }
        Ok(())
    }
}
