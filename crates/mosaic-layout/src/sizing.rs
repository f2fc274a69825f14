//! Cell widths, heights and horizontal origins.

use mosaic_types::Size;

use crate::placement::{self, CellKind};
use crate::section::SectionSpec;

/// Width of one column after insets and interitem gaps.
pub fn column_width(spec: &SectionSpec) -> f64 {
    let columns = spec.columns as f64;
    let gaps = (columns - 1.0) * spec.interitem_spacing;
    (spec.available_width - spec.inset.horizontal() - gaps) / columns
}

/// Horizontal origin of `column`, relative to the content's left edge.
pub fn column_x(spec: &SectionSpec, column: usize) -> f64 {
    let column = column as f64;
    spec.inset.left + column * (column_width(spec) + spec.interitem_spacing)
}

/// Size of the cell for `item`.
///
/// A big cell spans `N-1` columns and `N-1` rows including the gaps
/// between them.
pub fn cell_size(spec: &SectionSpec, kind: CellKind, item: usize) -> Size {
    let width = column_width(spec);
    let height = spec.row_height_for(item);
    match kind {
        CellKind::Small => Size::new(width, height),
        CellKind::Big => {
            let span = placement::big_block_rows(spec.columns) as f64;
            Size::new(
                width * span + spec.interitem_spacing * (span - 1.0),
                height * span + spec.line_spacing * (span - 1.0),
            )
        },
    }
}
