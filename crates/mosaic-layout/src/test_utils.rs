//! Shared test utilities for mosaic-layout tests.
//!
//! Provides a [`TestDelegate`] backed by a list of [`TestSection`]s and
//! float comparison helpers.

use mosaic_types::{EdgeInsets, ItemIndex, Rect, Size};

use crate::delegate::{ContentDescriptor, MosaicDelegate};

pub const EPSILON: f64 = 1e-6;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn approx_rect(a: Rect, b: Rect) -> bool {
    approx_eq(a.x, b.x)
        && approx_eq(a.y, b.y)
        && approx_eq(a.width, b.width)
        && approx_eq(a.height, b.height)
}

/// Builder-style description of one section.
#[derive(Debug, Clone)]
pub struct TestSection {
    pub items: usize,
    pub columns: usize,
    pub show_big: bool,
    pub row_height: f64,
    pub item_heights: Vec<f64>,
    pub inset: EdgeInsets,
    pub line_spacing: f64,
    pub interitem_spacing: f64,
    pub header: Size,
    pub footer: Size,
}

impl TestSection {
    /// A multi-column grid with 44pt rows and no spacing.
    pub fn grid(columns: usize, items: usize) -> Self {
        Self {
            items,
            columns,
            show_big: false,
            row_height: 44.0,
            item_heights: Vec::new(),
            inset: EdgeInsets::ZERO,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
            header: Size::ZERO,
            footer: Size::ZERO,
        }
    }

    /// A single-column list with one item per height.
    pub fn list(heights: &[f64]) -> Self {
        Self {
            item_heights: heights.to_vec(),
            ..Self::grid(1, heights.len())
        }
    }

    pub fn big(mut self) -> Self {
        self.show_big = true;
        self
    }

    pub fn row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    pub fn line(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn interitem(mut self, spacing: f64) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    pub fn inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    pub fn header(mut self, width: f64, height: f64) -> Self {
        self.header = Size::new(width, height);
        self
    }

    pub fn footer(mut self, width: f64, height: f64) -> Self {
        self.footer = Size::new(width, height);
        self
    }
}

/// A delegate answering from a fixed list of sections.
#[derive(Debug, Clone)]
pub struct TestDelegate {
    pub sections: Vec<TestSection>,
}

impl TestDelegate {
    pub fn new(sections: Vec<TestSection>) -> Self {
        Self { sections }
    }

    /// Content descriptor matching the sections' item counts.
    pub fn content(&self, width: f64) -> ContentDescriptor {
        ContentDescriptor::new(
            width,
            self.sections.iter().map(|s| s.items).collect::<Vec<_>>(),
        )
    }

    fn section(&self, section: usize) -> &TestSection {
        &self.sections[section]
    }
}

impl MosaicDelegate for TestDelegate {
    fn number_of_columns(&self, section: usize) -> usize {
        self.section(section).columns
    }

    fn shows_big_item(&self, section: usize) -> bool {
        self.section(section).show_big
    }

    fn row_height(&self, section: usize) -> f64 {
        self.section(section).row_height
    }

    fn item_height(&self, index: ItemIndex) -> f64 {
        let section = self.section(index.section);
        section
            .item_heights
            .get(index.item)
            .copied()
            .unwrap_or(section.row_height)
    }

    fn section_inset(&self, section: usize) -> EdgeInsets {
        self.section(section).inset
    }

    fn line_spacing(&self, section: usize) -> f64 {
        self.section(section).line_spacing
    }

    fn interitem_spacing(&self, section: usize) -> f64 {
        self.section(section).interitem_spacing
    }

    fn header_size(&self, section: usize) -> Size {
        self.section(section).header
    }

    fn footer_size(&self, section: usize) -> Size {
        self.section(section).footer
    }
}
