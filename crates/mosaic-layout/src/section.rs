//! Per-section parameters and vertical stacking of sections.
//!
//! A section's height is
//! `header + inset.top + grid + inset.bottom + footer`, and section `s`
//! starts where section `s - 1` ends. Header and footer heights always
//! count toward the height, even in an empty section that emits neither.

use mosaic_types::{EdgeInsets, ItemIndex, MosaicError, Result, Size};

use crate::delegate::{ContentDescriptor, MosaicDelegate};
use crate::placement;

/// Everything the engine needs to know about one section, gathered from
/// the delegate at the start of a pass and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub section: usize,
    pub item_count: usize,
    pub columns: usize,
    pub show_big: bool,
    /// Uniform row height; only meaningful with more than one column.
    pub row_height: f64,
    /// Per-item heights; only populated for single-column sections.
    pub item_heights: Vec<f64>,
    pub inset: EdgeInsets,
    pub line_spacing: f64,
    pub interitem_spacing: f64,
    pub header_size: Size,
    pub footer_size: Size,
    pub available_width: f64,
}

impl SectionSpec {
    /// Query the delegate for `section` and check the configuration.
    pub fn resolve<D: MosaicDelegate + ?Sized>(
        delegate: &D,
        content: &ContentDescriptor,
        section: usize,
    ) -> Result<Self> {
        let columns = delegate.number_of_columns(section);
        if columns == 0 {
            return Err(MosaicError::NoColumns { section });
        }

        let show_big = delegate.shows_big_item(section);
        if show_big && columns < 3 {
            return Err(MosaicError::BigItemNeedsThreeColumns { section, columns });
        }

        let available_width = content.available_width();
        let interitem_spacing = delegate.interitem_spacing(section);
        if columns > 1 {
            let spacing = (columns - 1) as f64 * interitem_spacing;
            if spacing > available_width {
                return Err(MosaicError::SpacingExceedsWidth {
                    section,
                    spacing,
                    available: available_width,
                });
            }
        }

        let item_count = content.item_count(section);
        let (row_height, item_heights) = if columns > 1 {
            (delegate.row_height(section), Vec::new())
        } else {
            let heights = (0..item_count)
                .map(|item| delegate.item_height(ItemIndex::new(section, item)))
                .collect();
            (0.0, heights)
        };

        Ok(Self {
            section,
            item_count,
            columns,
            show_big,
            row_height,
            item_heights,
            inset: delegate.section_inset(section),
            line_spacing: delegate.line_spacing(section),
            interitem_spacing,
            header_size: delegate.header_size(section),
            footer_size: delegate.footer_size(section),
            available_width,
        })
    }

    pub fn is_single_column(&self) -> bool {
        self.columns == 1
    }

    /// Height of the row `item` sits in (its own height in a single column).
    pub fn row_height_for(&self, item: usize) -> f64 {
        if self.is_single_column() {
            self.item_heights.get(item).copied().unwrap_or(0.0)
        } else {
            self.row_height
        }
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        if self.is_single_column() {
            self.item_count
        } else {
            placement::row_count(self.columns, self.show_big, self.item_count)
        }
    }

    /// Height of the item grid, without insets, header or footer.
    pub fn grid_height(&self) -> f64 {
        let rows = self.rows();
        if rows == 0 {
            return 0.0;
        }
        let spacing = (rows - 1) as f64 * self.line_spacing;
        if self.is_single_column() {
            self.item_heights.iter().sum::<f64>() + spacing
        } else {
            rows as f64 * self.row_height + spacing
        }
    }

    /// Full height of the section including header, insets and footer.
    pub fn height(&self) -> f64 {
        self.header_size.height
            + self.inset.vertical()
            + self.grid_height()
            + self.footer_size.height
    }

    /// Distance from the top of the grid to the top of `row`.
    ///
    /// Single-column rows accumulate the heights of the items above them.
    pub fn row_offset(&self, row: usize) -> f64 {
        if self.is_single_column() {
            self.item_heights
                .iter()
                .take(row)
                .map(|h| h + self.line_spacing)
                .sum()
        } else {
            row as f64 * (self.row_height + self.line_spacing)
        }
    }
}

/// Vertical placement of one section within the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFrame {
    /// Offset of the section's header (its top edge).
    pub top: f64,
    pub height: f64,
    header_height: f64,
    inset_top: f64,
    footer_height: f64,
}

impl SectionFrame {
    pub fn header_y(&self) -> f64 {
        self.top
    }

    /// Offset where the item grid begins.
    pub fn content_y(&self) -> f64 {
        self.top + self.header_height + self.inset_top
    }

    /// Footers hug the bottom of their section.
    pub fn footer_y(&self) -> f64 {
        self.bottom() - self.footer_height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Stack sections top to bottom, returning one frame per section.
pub fn stack(specs: &[SectionSpec]) -> Vec<SectionFrame> {
    let mut top = 0.0;
    specs
        .iter()
        .map(|spec| {
            let frame = SectionFrame {
                top,
                height: spec.height(),
                header_height: spec.header_size.height,
                inset_top: spec.inset.top,
                footer_height: spec.footer_size.height,
            };
            top += frame.height;
            frame
        })
        .collect()
}

/// Total height of all stacked sections.
pub fn total_height(specs: &[SectionSpec]) -> f64 {
    specs.iter().map(SectionSpec::height).sum()
}
