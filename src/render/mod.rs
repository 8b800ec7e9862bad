//! Renders many rows from one compiled template.
//!
//! The template is compiled once; every row is a fresh write of the same
//! callstack. Rows are buffered individually, so a row that fails to write
//! never reaches the output.

mod config;

pub use config::{load_template, RenderConfig, RenderConfigBuilder, RenderYamlConfig};

use crate::callstack::Callstack;
use crate::source::Sources;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

/// Statistics from a render run
#[derive(Debug, Default, Serialize)]
pub struct RenderStats {
    /// Rows written
    pub rows: usize,
    /// Bytes written, delimiters included
    pub bytes: u64,
    /// Placeholders per row
    pub generators_per_row: usize,
    /// Seed used, for reproducing the run
    pub seed: u64,
}

pub struct Renderer {
    config: RenderConfig,
    callstack: Callstack,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> anyhow::Result<Self> {
        let callstack = Callstack::build(&config.template).context("Failed to compile template")?;
        for (position, reference) in callstack.dangling_ordinals() {
            warn!(
                position,
                reference, "ordinal does not point to an earlier placeholder; every row will fail"
            );
        }
        Ok(Self { config, callstack })
    }

    pub fn callstack(&self) -> &Callstack {
        &self.callstack
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render to the configured output file, or stdout.
    pub fn run(&self) -> anyhow::Result<RenderStats> {
        match &self.config.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                let stats = self.render_to(&mut writer)?;
                writer.flush()?;
                Ok(stats)
            }
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                let stats = self.render_to(&mut writer)?;
                writer.flush()?;
                Ok(stats)
            }
        }
    }

    pub fn render_to<W: Write>(&self, out: &mut W) -> anyhow::Result<RenderStats> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut sources = Sources::seeded(seed);
        let delimiter = self.config.delimiter.as_bytes();

        let progress_bar = if self.config.progress {
            let pb = ProgressBar::new(self.config.count as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({per_sec}) {msg}",
                )?
                .progress_chars("█▓▒░  ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb.set_message("Rendering...");
            Some(pb)
        } else {
            None
        };

        let mut stats = RenderStats {
            generators_per_row: self.callstack.generator_count(),
            seed,
            ..Default::default()
        };
        let mut row = Vec::new();

        for index in 0..self.config.count {
            row.clear();
            self.callstack
                .write_with(&mut row, &mut sources)
                .with_context(|| format!("Failed to render row {}", index + 1))?;

            out.write_all(&row)?;
            out.write_all(delimiter)?;
            stats.rows += 1;
            stats.bytes += (row.len() + delimiter.len()) as u64;

            if let Some(ref pb) = progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message("done");
        }

        info!(rows = stats.rows, bytes = stats.bytes, seed, "render complete");
        Ok(stats)
    }
}
