//! Error types for the mosaic layout engine.

use std::io;

/// Errors produced while configuring or running a layout pass.
///
/// The first four variants are configuration violations detected by the
/// engine. A pass that hits one of them produces no layout at all.
#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error("section {section} must have at least one column")]
    NoColumns { section: usize },

    #[error("section {section} has {columns} columns; big-item sections need at least 3 columns")]
    BigItemNeedsThreeColumns { section: usize, columns: usize },

    #[error(
        "interitem spacing {spacing} exceeds available width {available} in section {section}"
    )]
    SpacingExceedsWidth {
        section: usize,
        spacing: f64,
        available: f64,
    },

    #[error("available width must be finite and non-negative, got {0}")]
    InvalidWidth(f64),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MosaicError {
    /// True for errors raised by the engine's configuration checks, as
    /// opposed to failures loading or encoding a scene.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NoColumns { .. }
                | Self::BigItemNeedsThreeColumns { .. }
                | Self::SpacingExceedsWidth { .. }
                | Self::InvalidWidth(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MosaicError>;
