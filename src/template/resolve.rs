//! Validates a parsed placeholder against its generator definition.

use super::placeholder::PlaceholderSpec;
use crate::error::BuildError;
use crate::generator::registry::{self, OptionError, ORDINAL_KEY};
use crate::generator::{GeneratorConfig, GeneratorKind};
use serde::Serialize;
use std::fmt;

/// A validated placeholder, ready to execute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placeholder {
    pub config: GeneratorConfig,
    /// Earlier position whose value is replayed instead of generating one.
    /// Only checked against execution order when the callstack is written.
    pub ordinal: Option<usize>,
    /// Template text, braces included
    pub raw: String,
}

impl Placeholder {
    pub fn kind(&self) -> GeneratorKind {
        self.config.kind()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub fn resolve(spec: &PlaceholderSpec<'_>) -> Result<Placeholder, BuildError> {
    let definition =
        registry::lookup(spec.type_name).ok_or_else(|| BuildError::UnknownGeneratorType {
            placeholder: spec.raw.to_string(),
            type_name: spec.type_name.to_string(),
        })?;

    if let Some((key, _)) = spec.options.iter().find(|(key, _)| !definition.accepts(key)) {
        return Err(BuildError::UnknownOption {
            placeholder: spec.raw.to_string(),
            kind: definition.kind,
            key: key.to_string(),
        });
    }

    let ordinal = spec
        .options
        .get(ORDINAL_KEY)
        .map(registry::parse_ordinal)
        .transpose()
        .map_err(|e| option_error(spec.raw, e))?;

    let config = definition
        .resolve(&spec.options)
        .map_err(|e| option_error(spec.raw, e))?;

    Ok(Placeholder {
        config,
        ordinal,
        raw: spec.raw.to_string(),
    })
}

fn option_error(raw: &str, error: OptionError) -> BuildError {
    match error {
        OptionError::Invalid { key, reason } => BuildError::InvalidOption {
            placeholder: raw.to_string(),
            key: key.to_string(),
            reason,
        },
        OptionError::Range { min, max } => BuildError::InvalidRange {
            placeholder: raw.to_string(),
            min,
            max,
        },
    }
}
