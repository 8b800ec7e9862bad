//! Configuration types for the renderer.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime configuration for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Template text
    pub template: String,
    /// Output file (None for stdout)
    pub output: Option<PathBuf>,
    /// Number of rows to render
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Written after every row
    pub delimiter: String,
    /// Show progress
    pub progress: bool,
}

impl RenderConfig {
    /// Create a new builder
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.template.is_empty() {
            anyhow::bail!("Template is empty");
        }
        if self.count == 0 {
            anyhow::bail!("--count must be greater than 0");
        }
        Ok(())
    }
}

/// Job file accepted by `render --config`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderYamlConfig {
    /// Inline template
    pub template: Option<String>,
    /// Template file, relative to the job file
    pub template_file: Option<PathBuf>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub delimiter: Option<String>,
    /// Output file, relative to the job file
    pub output: Option<PathBuf>,
}

impl RenderYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: RenderYamlConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

/// Read a template file, dropping one trailing line ending.
pub fn load_template(path: &Path) -> anyhow::Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    let trimmed = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content.as_str());
    Ok(trimmed.to_string())
}

/// Builder for RenderConfig. CLI values win over the job file.
#[derive(Default)]
pub struct RenderConfigBuilder {
    template: Option<String>,
    template_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    output: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    delimiter: Option<String>,
    progress: bool,
}

impl RenderConfigBuilder {
    pub fn template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    pub fn template_file(mut self, path: Option<PathBuf>) -> Self {
        self.template_file = path;
        self
    }

    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    pub fn count(mut self, count: Option<usize>) -> Self {
        self.count = count;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn build(self) -> anyhow::Result<RenderConfig> {
        let (yaml, base_dir) = match &self.config_file {
            Some(path) => (
                RenderYamlConfig::load(path)?,
                path.parent().map(Path::to_path_buf).unwrap_or_default(),
            ),
            None => (RenderYamlConfig::default(), PathBuf::new()),
        };

        let template = if let Some(template) = self.template {
            template
        } else if let Some(path) = &self.template_file {
            load_template(path)?
        } else if let Some(template) = yaml.template {
            template
        } else if let Some(path) = &yaml.template_file {
            load_template(&base_dir.join(path))?
        } else {
            anyhow::bail!(
                "No template given. Pass a TEMPLATE argument, --file, or a --config with `template`"
            );
        };

        let config = RenderConfig {
            template,
            output: self
                .output
                .or_else(|| yaml.output.map(|path| base_dir.join(path))),
            count: self.count.or(yaml.count).unwrap_or(1),
            seed: self.seed.or(yaml.seed),
            delimiter: self
                .delimiter
                .or(yaml.delimiter)
                .unwrap_or_else(|| "\n".to_string()),
            progress: self.progress,
        };
        config.validate()?;
        Ok(config)
    }
}
