//! Layout pass orchestration and the invalidation holder.

use mosaic_types::{ItemIndex, Point, Rect, Result, Size};

use crate::delegate::{ContentDescriptor, MosaicDelegate};
use crate::map::{ElementKind, ElementRef, LayoutEntry, LayoutMap};
use crate::placement::{self, CellKind};
use crate::section::{self, SectionFrame, SectionSpec};
use crate::sizing;

/// Compute a fresh [`LayoutMap`] for `content`.
///
/// Every section is resolved and validated before any frame is produced,
/// so a misconfigured section aborts the pass without a partial map.
pub fn layout<D: MosaicDelegate + ?Sized>(
    content: &ContentDescriptor,
    delegate: &D,
) -> Result<LayoutMap> {
    content.validate()?;

    let specs = (0..content.section_count())
        .map(|section| SectionSpec::resolve(delegate, content, section))
        .collect::<Result<Vec<_>>>()?;
    let frames = section::stack(&specs);

    let capacity = specs.iter().map(|s| s.item_count + 2).sum();
    let mut entries = Vec::with_capacity(capacity);
    for (spec, frame) in specs.iter().zip(&frames) {
        log::trace!(
            "section {}: {} items, {} columns, big={}, {} rows, height {}",
            spec.section,
            spec.item_count,
            spec.columns,
            spec.show_big,
            spec.rows(),
            frame.height,
        );
        push_section(spec, frame, &mut entries);
    }

    let content_size = Size::new(
        content.available_width(),
        frames.last().map_or(0.0, SectionFrame::bottom),
    );
    log::debug!(
        "mosaic pass: {} sections at width {}, {} elements, content {}x{}",
        specs.len(),
        content.available_width(),
        entries.len(),
        content_size.width,
        content_size.height,
    );
    Ok(LayoutMap::from_entries(entries, content_size))
}

fn push_section(spec: &SectionSpec, frame: &SectionFrame, entries: &mut Vec<LayoutEntry>) {
    // Supplementaries are anchored to item 0, so empty sections get neither.
    if spec.item_count == 0 {
        return;
    }

    if !spec.header_size.is_zero() {
        entries.push(LayoutEntry {
            element: ElementRef::Header(spec.section),
            frame: Rect::from_origin_size(Point::new(0.0, frame.header_y()), spec.header_size),
        });
    }
    if !spec.footer_size.is_zero() {
        entries.push(LayoutEntry {
            element: ElementRef::Footer(spec.section),
            frame: Rect::from_origin_size(Point::new(0.0, frame.footer_y()), spec.footer_size),
        });
    }

    for item in 0..spec.item_count {
        let kind = CellKind::of(spec.show_big, item);
        let position = placement::position(spec.columns, spec.show_big, item);
        let origin = Point::new(
            sizing::column_x(spec, position.column),
            frame.content_y() + spec.row_offset(position.row),
        );
        entries.push(LayoutEntry {
            element: ElementRef::Item(ItemIndex::new(spec.section, item)),
            frame: Rect::from_origin_size(origin, sizing::cell_size(spec, kind, item)),
        });
    }
}

/// Holds the current [`LayoutMap`] for a hosting view and decides when it
/// must be rebuilt.
///
/// The map is only ever replaced wholesale. Data changes are the host's
/// business: it calls [`MosaicLayout::prepare`] again with a new snapshot.
#[derive(Debug, Default)]
pub struct MosaicLayout {
    map: Option<LayoutMap>,
    prepared_width: Option<f64>,
}

impl MosaicLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current map and compute a new one.
    ///
    /// On error the previous map is dropped as well; a failed pass leaves
    /// nothing to query.
    pub fn prepare<D: MosaicDelegate + ?Sized>(
        &mut self,
        content: &ContentDescriptor,
        delegate: &D,
    ) -> Result<&LayoutMap> {
        self.invalidate();
        let map = layout(content, delegate)?;
        self.prepared_width = Some(content.available_width());
        Ok(self.map.insert(map))
    }

    /// Whether a bounds change to `new_size` requires a new pass.
    ///
    /// Only width matters; the mosaic never reflows on height.
    pub fn should_invalidate(&self, new_size: Size) -> bool {
        self.prepared_width != Some(new_size.width)
    }

    pub fn invalidate(&mut self) {
        self.map = None;
        self.prepared_width = None;
    }

    pub fn layout_map(&self) -> Option<&LayoutMap> {
        self.map.as_ref()
    }

    /// Content size of the current map, zero before the first pass.
    pub fn content_size(&self) -> Size {
        self.map.as_ref().map_or(Size::ZERO, LayoutMap::content_size)
    }

    pub fn rect_for_item(&self, index: ItemIndex) -> Option<Rect> {
        self.map.as_ref()?.item_rect(index)
    }

    /// Frame of a header or footer. `Item` is not a supplementary kind and
    /// yields `None`.
    pub fn rect_for_supplementary(&self, kind: ElementKind, section: usize) -> Option<Rect> {
        let element = match kind {
            ElementKind::Header => ElementRef::Header(section),
            ElementKind::Footer => ElementRef::Footer(section),
            ElementKind::Item => return None,
        };
        self.map.as_ref()?.rect(&element)
    }

    pub fn elements_in(&self, rect: &Rect) -> Vec<ElementRef> {
        self.map
            .as_ref()
            .map(|map| map.elements_intersecting(rect))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestDelegate, TestSection, approx_eq, approx_rect};
    use mosaic_types::MosaicError;

    fn two_sections() -> (TestDelegate, ContentDescriptor) {
        let delegate = TestDelegate::new(vec![
            TestSection::grid(3, 6)
                .row_height(100.0)
                .header(300.0, 40.0),
            TestSection::list(&[50.0, 50.0]).footer(300.0, 30.0),
        ]);
        let content = ContentDescriptor::new(300.0, [6, 2]);
        (delegate, content)
    }

    #[test]
    fn empty_content_has_zero_height() {
        let delegate = TestDelegate::new(Vec::new());
        let map = layout(&ContentDescriptor::new(320.0, Vec::<usize>::new()), &delegate).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.content_size(), Size::new(320.0, 0.0));
    }

    #[test]
    fn plain_grid_frames() {
        let (delegate, content) = two_sections();
        let map = layout(&content, &delegate).unwrap();
        assert!(approx_rect(
            map.header_rect(0).unwrap(),
            Rect::new(0.0, 0.0, 300.0, 40.0)
        ));
        assert!(approx_rect(
            map.item_rect(ItemIndex::new(0, 4)).unwrap(),
            Rect::new(100.0, 140.0, 100.0, 100.0)
        ));
        assert_eq!(map.footer_rect(0), None);
    }

    #[test]
    fn second_section_starts_after_first() {
        let (delegate, content) = two_sections();
        let map = layout(&content, &delegate).unwrap();
        assert!(approx_rect(
            map.item_rect(ItemIndex::new(1, 0)).unwrap(),
            Rect::new(0.0, 240.0, 300.0, 50.0)
        ));
        assert!(approx_rect(
            map.item_rect(ItemIndex::new(1, 1)).unwrap(),
            Rect::new(0.0, 290.0, 300.0, 50.0)
        ));
        assert!(approx_rect(
            map.footer_rect(1).unwrap(),
            Rect::new(0.0, 340.0, 300.0, 30.0)
        ));
        assert!(approx_eq(map.content_size().height, 370.0));
    }

    #[test]
    fn empty_section_emits_no_supplementaries() {
        let delegate = TestDelegate::new(vec![
            TestSection::grid(2, 0).header(300.0, 40.0).footer(300.0, 40.0),
            TestSection::grid(2, 2).row_height(10.0),
        ]);
        let map = layout(&ContentDescriptor::new(300.0, [0, 2]), &delegate).unwrap();
        assert_eq!(map.header_rect(0), None);
        assert_eq!(map.footer_rect(0), None);
        // Their heights still push the next section down.
        assert!(approx_eq(map.item_rect(ItemIndex::new(1, 0)).unwrap().y, 80.0));
    }

    #[test]
    fn failing_section_produces_no_map() {
        let delegate = TestDelegate::new(vec![
            TestSection::grid(3, 3),
            TestSection::grid(2, 3).big(),
        ]);
        let err = layout(&ContentDescriptor::new(300.0, [3, 3]), &delegate).unwrap_err();
        assert!(matches!(
            err,
            MosaicError::BigItemNeedsThreeColumns { section: 1, .. }
        ));
    }

    #[test]
    fn invalid_width_is_rejected() {
        let delegate = TestDelegate::new(vec![TestSection::grid(1, 1)]);
        let err = layout(&ContentDescriptor::new(f64::INFINITY, [1]), &delegate).unwrap_err();
        assert!(matches!(err, MosaicError::InvalidWidth(_)));
    }

    #[test]
    fn holder_invalidates_on_width_only() {
        let (delegate, content) = two_sections();
        let mut holder = MosaicLayout::new();
        assert!(holder.should_invalidate(Size::new(300.0, 500.0)));
        holder.prepare(&content, &delegate).unwrap();
        assert!(!holder.should_invalidate(Size::new(300.0, 500.0)));
        assert!(!holder.should_invalidate(Size::new(300.0, 900.0)));
        assert!(holder.should_invalidate(Size::new(320.0, 500.0)));
    }

    #[test]
    fn holder_rebuilds_at_new_width() {
        let (delegate, content) = two_sections();
        let mut holder = MosaicLayout::new();
        holder.prepare(&content, &delegate).unwrap();
        let narrow = holder.rect_for_item(ItemIndex::new(0, 1)).unwrap();

        holder
            .prepare(&content.with_available_width(600.0), &delegate)
            .unwrap();
        let wide = holder.rect_for_item(ItemIndex::new(0, 1)).unwrap();
        assert!(approx_eq(narrow.width, 100.0));
        assert!(approx_eq(wide.width, 200.0));
        assert!(approx_eq(holder.content_size().width, 600.0));
    }

    #[test]
    fn holder_queries() {
        let (delegate, content) = two_sections();
        let mut holder = MosaicLayout::new();
        assert_eq!(holder.content_size(), Size::ZERO);
        assert!(holder.elements_in(&Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());

        holder.prepare(&content, &delegate).unwrap();
        assert!(holder.rect_for_supplementary(ElementKind::Header, 0).is_some());
        assert!(holder.rect_for_supplementary(ElementKind::Footer, 1).is_some());
        assert!(holder.rect_for_supplementary(ElementKind::Item, 0).is_none());
        let hits = holder.elements_in(&Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(
            hits,
            vec![ElementRef::Header(0), ElementRef::Item(ItemIndex::new(0, 0))]
        );
    }

    #[test]
    fn holder_drops_map_after_failed_pass() {
        let (delegate, content) = two_sections();
        let mut holder = MosaicLayout::new();
        holder.prepare(&content, &delegate).unwrap();

        let bad = TestDelegate::new(vec![TestSection::grid(0, 1)]);
        assert!(holder.prepare(&ContentDescriptor::new(300.0, [1]), &bad).is_err());
        assert!(holder.layout_map().is_none());
        assert!(holder.should_invalidate(Size::new(300.0, 100.0)));
    }
}
