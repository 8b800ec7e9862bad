//! Parses a placeholder span into a type name and raw options.
//!
//! Grammar: `type (":" key ":" value ("|" key ":" value)*)?`. Only the first
//! `:` of each option separates key from value, so values may contain colons
//! (`format:%H:%M`).

use super::lexer::Span;
use crate::error::BuildError;

/// Ordered `(key, value)` pairs as written. On duplicate keys the last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions<'a>(Vec<(&'a str, &'a str)>);

impl<'a> RawOptions<'a> {
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<Vec<(&'a str, &'a str)>> for RawOptions<'a> {
    fn from(pairs: Vec<(&'a str, &'a str)>) -> Self {
        Self(pairs)
    }
}

/// Unvalidated placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec<'a> {
    pub raw: &'a str,
    pub type_name: &'a str,
    pub options: RawOptions<'a>,
}

pub fn parse(span: Span<'_>) -> Result<PlaceholderSpec<'_>, BuildError> {
    let (type_name, rest) = span.inner.split_once(':').unwrap_or((span.inner, ""));
    let type_name = type_name.trim();
    if type_name.is_empty() {
        return Err(BuildError::InvalidPlaceholderSyntax {
            placeholder: span.raw.to_string(),
            reason: "missing generator type".to_string(),
        });
    }

    let mut options = Vec::new();
    for fragment in rest.split('|') {
        if fragment.trim().is_empty() {
            continue;
        }
        let (key, value) =
            fragment
                .split_once(':')
                .ok_or_else(|| BuildError::InvalidPlaceholderSyntax {
                    placeholder: span.raw.to_string(),
                    reason: format!("option `{}` has no `:` separator", fragment),
                })?;
        options.push((key.trim(), value));
    }

    Ok(PlaceholderSpec {
        raw: span.raw,
        type_name,
        options: RawOptions(options),
    })
}
