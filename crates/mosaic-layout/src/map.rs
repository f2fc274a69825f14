//! The result of a layout pass: one frame per element plus the content size.

use std::collections::HashMap;

use mosaic_types::{ItemIndex, Rect, Size};
use serde::Serialize;

/// The three kinds of element a mosaic lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    Footer,
    Item,
}

/// Identifies one laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRef {
    Header(usize),
    Footer(usize),
    Item(ItemIndex),
}

impl ElementRef {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Header(_) => ElementKind::Header,
            Self::Footer(_) => ElementKind::Footer,
            Self::Item(_) => ElementKind::Item,
        }
    }

    pub fn section(&self) -> usize {
        match self {
            Self::Header(section) | Self::Footer(section) => *section,
            Self::Item(index) => index.section,
        }
    }

    /// Build a reference from a kind and an index. Headers and footers are
    /// addressed by the section of `index`; its item is ignored.
    pub fn from_kind(kind: ElementKind, index: ItemIndex) -> Self {
        match kind {
            ElementKind::Header => Self::Header(index.section),
            ElementKind::Footer => Self::Footer(index.section),
            ElementKind::Item => Self::Item(index),
        }
    }
}

/// A computed frame tagged with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutEntry {
    pub element: ElementRef,
    pub frame: Rect,
}

/// Immutable set of frames produced by one pass.
///
/// Entries keep the order they were produced in: section by section, the
/// header, then the footer, then the items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutMap {
    content_size: Size,
    entries: Vec<LayoutEntry>,
    #[serde(skip)]
    lookup: HashMap<ElementRef, usize>,
}

impl LayoutMap {
    pub(crate) fn from_entries(entries: Vec<LayoutEntry>, content_size: Size) -> Self {
        let lookup = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.element, i))
            .collect();
        Self {
            content_size,
            entries,
            lookup,
        }
    }

    /// Total size of the laid-out content.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Frame of `element`, or `None` if the pass did not produce it.
    pub fn rect(&self, element: &ElementRef) -> Option<Rect> {
        self.lookup.get(element).map(|&i| self.entries[i].frame)
    }

    pub fn item_rect(&self, index: ItemIndex) -> Option<Rect> {
        self.rect(&ElementRef::Item(index))
    }

    pub fn header_rect(&self, section: usize) -> Option<Rect> {
        self.rect(&ElementRef::Header(section))
    }

    pub fn footer_rect(&self, section: usize) -> Option<Rect> {
        self.rect(&ElementRef::Footer(section))
    }

    /// Every element whose frame intersects `rect`, in production order.
    ///
    /// This is a linear scan; maps are rebuilt on every width change rather
    /// than per frame, so no spatial index is kept.
    pub fn elements_intersecting(&self, rect: &Rect) -> Vec<ElementRef> {
        self.entries
            .iter()
            .filter(|entry| rect.intersects(&entry.frame))
            .map(|entry| entry.element)
            .collect()
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
