//! Mosaic layout inspector.
//!
//! Loads a scene (a TOML file given as the first argument, the
//! `MOSAIC_SCENE` environment variable, or the built-in demo scene), runs
//! one layout pass and prints the result as JSON on stdout.
//!
//! `--width W` lays the scene out at another bounds width,
//! `--visible x,y,w,h` restricts output to the elements intersecting that
//! rectangle and `--summary` prints only the content size.

mod options;

use anyhow::{Context, Result};
use mosaic_layout::{ElementRef, SceneConfig, Size, layout};
use serde::Serialize;

use options::Options;

const DEMO_WIDTH: f64 = 375.0;

#[derive(Debug, Serialize)]
struct VisibleReport<'a> {
    content_size: Size,
    visible: &'a [ElementRef],
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse(std::env::args().skip(1))?;

    let scene_path = options
        .scene
        .clone()
        .or_else(|| std::env::var("MOSAIC_SCENE").ok());
    let mut scene = match &scene_path {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => {
            log::info!("No scene given, using the demo scene");
            SceneConfig::demo(options.width.unwrap_or(DEMO_WIDTH))
        },
    };
    if let Some(width) = options.width {
        scene.bounds_width = width;
    }

    let content = scene.content();
    let map = layout(&content, &scene).context("layout pass failed")?;
    log::info!(
        "Laid out {} sections, {} elements, content {}x{}",
        content.section_count(),
        map.len(),
        map.content_size().width,
        map.content_size().height,
    );

    let stdout = std::io::stdout().lock();
    match (options.visible, options.summary) {
        (_, true) => serde_json::to_writer_pretty(stdout, &map.content_size())?,
        (Some(rect), false) => {
            let visible = map.elements_intersecting(&rect);
            log::info!("{} elements intersect {rect:?}", visible.len());
            let report = VisibleReport {
                content_size: map.content_size(),
                visible: &visible,
            };
            serde_json::to_writer_pretty(stdout, &report)?;
        },
        (None, false) => serde_json::to_writer_pretty(stdout, &map)?,
    }
    println!();
    Ok(())
}
