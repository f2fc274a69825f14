//! Command-line options.

use anyhow::{Context, Result, bail};
use mosaic_layout::Rect;

/// What to lay out and what to print.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Scene file; the built-in demo scene when absent.
    pub scene: Option<String>,
    /// Overrides the scene's bounds width.
    pub width: Option<f64>,
    /// Only report elements intersecting this rectangle.
    pub visible: Option<Rect>,
    /// Print the content size instead of every frame.
    pub summary: bool,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => {
                    let value = args.next().context("--width needs a value")?;
                    options.width = Some(parse_number(&value)?);
                },
                "--visible" => {
                    let value = args.next().context("--visible needs x,y,w,h")?;
                    options.visible = Some(parse_rect(&value)?);
                },
                "--summary" => options.summary = true,
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                path => {
                    if options.scene.is_some() {
                        bail!("only one scene file may be given");
                    }
                    options.scene = Some(path.to_string());
                },
            }
        }
        Ok(options)
    }
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("not a number: {value}"))
}

fn parse_rect(value: &str) -> Result<Rect> {
    let parts = value
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Rect::new(*x, *y, *w, *h)),
        _ => bail!("expected x,y,w,h but got {value}"),
    }
}
