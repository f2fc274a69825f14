//! Scene descriptions loaded from TOML.
//!
//! A scene bundles the content snapshot and every delegate answer, so a
//! whole layout pass can be driven from a file:
//!
//! ```toml
//! bounds_width = 375.0
//!
//! [[sections]]
//! items = 12
//! columns = 3
//! show_big = true
//! row_height = 200.0
//! line_spacing = 2.0
//! interitem_spacing = 2.0
//! header = { width = 375.0, height = 80.0 }
//! ```

use std::path::Path;

use mosaic_types::{EdgeInsets, ItemIndex, MosaicError, Result, Size};
use serde::Deserialize;

use crate::delegate::{ContentDescriptor, MosaicDelegate};

/// A whole collection: bounds, content inset and sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneConfig {
    pub bounds_width: f64,
    #[serde(default)]
    pub content_inset: EdgeInsets,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

/// One section of a scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionConfig {
    pub items: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub show_big: bool,
    /// Row height for multi-column sections.
    #[serde(default = "default_height")]
    pub row_height: f64,
    /// Height for single-column items without an entry in `item_heights`.
    #[serde(default = "default_height")]
    pub item_height: f64,
    #[serde(default)]
    pub item_heights: Vec<f64>,
    #[serde(default)]
    pub inset: EdgeInsets,
    #[serde(default)]
    pub line_spacing: f64,
    #[serde(default)]
    pub interitem_spacing: f64,
    #[serde(default)]
    pub header: Size,
    #[serde(default)]
    pub footer: Size,
}

fn default_columns() -> usize {
    1
}
fn default_height() -> f64 {
    44.0
}

impl SectionConfig {
    /// A section with `items` items and every other field at its default.
    pub fn new(items: usize) -> Self {
        Self {
            items,
            columns: default_columns(),
            show_big: false,
            row_height: default_height(),
            item_height: default_height(),
            item_heights: Vec::new(),
            inset: EdgeInsets::ZERO,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
            header: Size::ZERO,
            footer: Size::ZERO,
        }
    }
}

impl SceneConfig {
    /// Parse a scene from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scene: Self = toml::from_str(text)?;
        scene.check()?;
        Ok(scene)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_toml_str(&text)?;
        log::info!(
            "Loaded scene {} ({} sections)",
            path.display(),
            scene.sections.len()
        );
        Ok(scene)
    }

    /// Five sections of twelve items: 3 columns with a big item, 3 columns
    /// inset by 16, a single column, 2 columns, and 4 columns with a big
    /// item inside 16pt insets. Headers and footers are 80pt tall.
    pub fn demo(bounds_width: f64) -> Self {
        let section = |columns: usize, show_big: bool, inset: EdgeInsets| SectionConfig {
            columns,
            show_big,
            row_height: 200.0,
            item_height: 100.0,
            inset,
            line_spacing: 2.0,
            interitem_spacing: 2.0,
            header: Size::new(bounds_width, 80.0),
            footer: Size::new(bounds_width, 80.0),
            ..SectionConfig::new(12)
        };
        Self {
            bounds_width,
            content_inset: EdgeInsets::ZERO,
            sections: vec![
                section(3, true, EdgeInsets::ZERO),
                section(3, false, EdgeInsets::new(0.0, 16.0, 0.0, 16.0)),
                section(1, false, EdgeInsets::ZERO),
                section(2, false, EdgeInsets::ZERO),
                section(4, true, EdgeInsets::uniform(16.0)),
            ],
        }
    }

    /// The content snapshot this scene describes.
    pub fn content(&self) -> ContentDescriptor {
        ContentDescriptor::from_bounds(
            self.bounds_width,
            self.content_inset,
            self.sections.iter().map(|s| s.items).collect::<Vec<_>>(),
        )
    }

    /// Catch values no delegate could sensibly answer with. Column and
    /// spacing rules are left to the engine.
    fn check(&self) -> Result<()> {
        let edges = |i: EdgeInsets| [i.top, i.left, i.bottom, i.right];
        let non_negative = [self.bounds_width]
            .into_iter()
            .chain(edges(self.content_inset))
            .chain(self.sections.iter().flat_map(|s| {
                [
                    s.row_height,
                    s.item_height,
                    s.line_spacing,
                    s.interitem_spacing,
                    s.header.width,
                    s.header.height,
                    s.footer.width,
                    s.footer.height,
                ]
                .into_iter()
                .chain(edges(s.inset))
                .chain(s.item_heights.iter().copied())
            }))
            .all(|v| v.is_finite() && v >= 0.0);
        if !non_negative {
            return Err(MosaicError::Config(
                "sizes and spacings must be finite and non-negative".into(),
            ));
        }
        for (i, s) in self.sections.iter().enumerate() {
            if s.columns > 1 && !s.item_heights.is_empty() {
                log::warn!("section {i}: item_heights ignored for a {}-column section", s.columns);
            }
        }
        Ok(())
    }

    fn section(&self, section: usize) -> &SectionConfig {
        &self.sections[section]
    }
}

impl MosaicDelegate for SceneConfig {
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
            .unwrap_or(section.item_height)
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
