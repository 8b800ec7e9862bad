//! Value generators for placeholder types.
//!
//! Each supported type has:
//! - an entry in the [`registry`] naming its option keys and how they convert
//! - a [`GeneratorConfig`] variant carrying only its own validated fields
//! - a module producing the value (`guid`, `datetime`, `numeric`, `country`, `unicode`)

pub mod country;
pub mod datetime;
pub mod guid;
pub mod numeric;
pub mod registry;
pub mod unicode;

pub use registry::{lookup, GeneratorDefinition, REGISTRY};

use crate::source::{RandomSource, SourceError, Sources};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported placeholder types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Guid,
    Now,
    Time,
    Int,
    Float,
    Country,
    Unicode,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::Guid,
        GeneratorKind::Now,
        GeneratorKind::Time,
        GeneratorKind::Int,
        GeneratorKind::Float,
        GeneratorKind::Country,
        GeneratorKind::Unicode,
    ];

    /// Name used in templates
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Guid => "guid",
            GeneratorKind::Now => "now",
            GeneratorKind::Time => "time",
            GeneratorKind::Int => "int",
            GeneratorKind::Float => "float",
            GeneratorKind::Country => "country",
            GeneratorKind::Unicode => "unicode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Casing applied to textual generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// Keep the value as stored
    #[default]
    AsIs,
    Up,
    Down,
}

impl Case {
    pub fn apply(self, value: &str) -> String {
        match self {
            Case::AsIs => value.to_string(),
            Case::Up => value.to_uppercase(),
            Case::Down => value.to_lowercase(),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Case::Up),
            "down" => Ok(Case::Down),
            "none" => Ok(Case::AsIs),
            _ => Err(format!("unknown case `{}`. Use: up, down, none", s)),
        }
    }
}

/// Validated configuration of one placeholder, one variant per type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Guid,
    Now,
    Time {
        /// Lower bound, Unix seconds
        min: i64,
        /// Upper bound, Unix seconds; `None` means the clock at execution time
        max: Option<i64>,
        /// strftime layout
        format: String,
    },
    Int {
        min: i64,
        max: i64,
    },
    Float {
        min: f64,
        max: f64,
    },
    Country {
        case: Case,
    },
    Unicode {
        length: usize,
        case: Case,
    },
}

impl GeneratorConfig {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorConfig::Guid => GeneratorKind::Guid,
            GeneratorConfig::Now => GeneratorKind::Now,
            GeneratorConfig::Time { .. } => GeneratorKind::Time,
            GeneratorConfig::Int { .. } => GeneratorKind::Int,
            GeneratorConfig::Float { .. } => GeneratorKind::Float,
            GeneratorConfig::Country { .. } => GeneratorKind::Country,
            GeneratorConfig::Unicode { .. } => GeneratorKind::Unicode,
        }
    }

    /// Produce a fresh value from the given sources.
    pub fn generate<R: RandomSource>(
        &self,
        sources: &mut Sources<R>,
    ) -> Result<String, GenerateError> {
        match self {
            GeneratorConfig::Guid => guid::generate(&mut sources.rng),
            GeneratorConfig::Now => datetime::now(sources.clock.as_ref()),
            GeneratorConfig::Time { min, max, format } => datetime::time(
                &mut sources.rng,
                sources.clock.as_ref(),
                *min,
                *max,
                format,
            ),
            GeneratorConfig::Int { min, max } => numeric::int(&mut sources.rng, *min, *max),
            GeneratorConfig::Float { min, max } => numeric::float(&mut sources.rng, *min, *max),
            GeneratorConfig::Country { case } => {
                Ok(sources.countries.next_country(*case, &mut sources.rng)?)
            }
            GeneratorConfig::Unicode { length, case } => {
                unicode::generate(&mut sources.rng, *length, *case)
            }
        }
    }
}

/// Failure while producing a single value.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("time range is empty: min {min} is after max {max}")]
    EmptyTimeRange { min: i64, max: i64 },

    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("cannot format timestamp with `{0}`")]
    Format(String),
}
