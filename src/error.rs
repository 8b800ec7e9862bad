//! Error types for template compilation and execution.
//!
//! Compilation and execution fail in two disjoint ways: a [`BuildError`]
//! means no callstack exists, a [`WriteError`] leaves the callstack intact
//! so the caller may simply write again.

use crate::generator::{GenerateError, GeneratorKind};

/// Failure while compiling a template into a callstack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Unbalanced or nested braces
    #[error("malformed template at byte {offset}: {reason}")]
    MalformedTemplate { offset: usize, reason: &'static str },

    /// Placeholder body that does not follow `type:key:value|key:value`
    #[error("invalid placeholder syntax in {placeholder}: {reason}")]
    InvalidPlaceholderSyntax { placeholder: String, reason: String },

    /// No generator is registered under this name
    #[error("unknown generator type `{type_name}` in {placeholder}")]
    UnknownGeneratorType {
        placeholder: String,
        type_name: String,
    },

    /// Option key the generator does not recognize
    #[error("unknown option `{key}` for generator `{kind}` in {placeholder}")]
    UnknownOption {
        placeholder: String,
        kind: GeneratorKind,
        key: String,
    },

    /// Option value that failed conversion or validation
    #[error("invalid value for option `{key}` in {placeholder}: {reason}")]
    InvalidOption {
        placeholder: String,
        key: String,
        reason: String,
    },

    /// `min` greater than `max`
    #[error("invalid range in {placeholder}: min {min} is greater than max {max}")]
    InvalidRange {
        placeholder: String,
        min: String,
        max: String,
    },
}

impl BuildError {
    /// Raw text of the offending placeholder, if the error concerns one.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            BuildError::MalformedTemplate { .. } => None,
            BuildError::InvalidPlaceholderSyntax { placeholder, .. }
            | BuildError::UnknownGeneratorType { placeholder, .. }
            | BuildError::UnknownOption { placeholder, .. }
            | BuildError::InvalidOption { placeholder, .. }
            | BuildError::InvalidRange { placeholder, .. } => Some(placeholder),
        }
    }
}

/// Failure while executing a callstack into a sink.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Ordinal that points at a position not generated yet (self, forward or out of range)
    #[error(
        "placeholder #{position} references position {reference}, which has not been generated yet"
    )]
    OrdinalResolution { position: usize, reference: usize },

    /// Generator or one of its collaborators failed
    #[error("placeholder #{position} ({kind}) failed: {source}")]
    Generator {
        position: usize,
        kind: GeneratorKind,
        #[source]
        source: GenerateError,
    },

    /// Sink rejected the output
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl WriteError {
    /// Position of the placeholder that failed, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            WriteError::OrdinalResolution { position, .. }
            | WriteError::Generator { position, .. } => Some(*position),
            WriteError::Io(_) => None,
        }
    }
}
