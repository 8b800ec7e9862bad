//! CLI handler for the render command.

use crate::render::{RenderConfig, RenderStats, Renderer};
use std::path::PathBuf;

/// Run the render command with the given options
#[allow(clippy::too_many_arguments)]
pub fn run(
    template: Option<String>,
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    delimiter: Option<String>,
    progress: bool,
    json: bool,
) -> anyhow::Result<()> {
    let render_config = RenderConfig::builder()
        .template(template)
        .template_file(file)
        .config_file(config)
        .count(count)
        .seed(seed)
        .output(output)
        .delimiter(delimiter)
        .progress(progress)
        .build()?;

    let renderer = Renderer::new(render_config)?;
    let stats = renderer.run()?;

    // Rows may own stdout, so stats always go to stderr
    output_stats(&stats, json)
}

fn output_stats(stats: &RenderStats, json: bool) -> anyhow::Result<()> {
    if json {
        eprintln!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        eprintln!("\nRender complete:");
        eprintln!("  Rows written: {}", stats.rows);
        eprintln!("  Bytes written: {}", stats.bytes);
        eprintln!("  Placeholders per row: {}", stats.generators_per_row);
        eprintln!("  Seed: {}", stats.seed);
    }
    Ok(())
}
