//! Compiled execution plans.
//!
//! A [`Callstack`] is built once from a template and is immutable afterwards.
//! Each placeholder becomes a generator item with a position: its 0-based
//! index among all placeholders in template order, regardless of type.
//! Positions are what `ordinal` options refer to.

mod engine;

use crate::error::BuildError;
use crate::template::{self, Placeholder, Token};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// One step of the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum CallstackItem {
    /// Text written verbatim
    Literal { text: String },
    /// Value generated (or replayed) and recorded at `position`
    Generator {
        position: usize,
        placeholder: Placeholder,
    },
}

/// Ordered, immutable plan compiled from a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callstack {
    items: Vec<CallstackItem>,
    generator_count: usize,
}

impl Callstack {
    /// Compile a template. Ordinals are not checked here; see [`Callstack::write`].
    pub fn build(template: &str) -> Result<Self, BuildError> {
        let tokens = template::tokenize(template)?;
        let mut items = Vec::with_capacity(tokens.len());
        let mut position = 0;

        for token in tokens {
            match token {
                Token::Literal(text) => items.push(CallstackItem::Literal {
                    text: text.to_string(),
                }),
                Token::Placeholder(span) => {
                    let placeholder = template::compile_placeholder(span)?;
                    items.push(CallstackItem::Generator {
                        position,
                        placeholder,
                    });
                    position += 1;
                }
            }
        }

        debug!(
            items = items.len(),
            generators = position,
            "compiled template"
        );

        Ok(Self {
            items,
            generator_count: position,
        })
    }

    pub fn items(&self) -> &[CallstackItem] {
        &self.items
    }

    /// Number of generator positions, `N` in `[0, N)`.
    pub fn generator_count(&self) -> usize {
        self.generator_count
    }

    /// Generator items with their positions, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = (usize, &Placeholder)> + '_ {
        self.items.iter().filter_map(|item| match item {
            CallstackItem::Generator {
                position,
                placeholder,
            } => Some((*position, placeholder)),
            CallstackItem::Literal { .. } => None,
        })
    }

    /// `(position, reference)` pairs whose ordinal does not point strictly
    /// backward. Every write of this callstack will fail on the first one.
    pub fn dangling_ordinals(&self) -> Vec<(usize, usize)> {
        self.placeholders()
            .filter_map(|(position, p)| p.ordinal.map(|reference| (position, reference)))
            .filter(|(position, reference)| reference >= position)
            .collect()
    }
}

impl FromStr for Callstack {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s)
    }
}

/// Compile `template` into a callstack.
pub fn build_callstack(template: &str) -> Result<Callstack, BuildError> {
    Callstack::build(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorKind;

    #[test]
    fn test_positions_are_contiguous_across_types() {
        let cs = Callstack::build("{guid}-{int}-{country}-{now:ordinal:0}").unwrap();
        assert_eq!(cs.generator_count(), 4);
        let positions: Vec<usize> = cs.placeholders().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        let kinds: Vec<GeneratorKind> = cs.placeholders().map(|(_, p)| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                GeneratorKind::Guid,
                GeneratorKind::Int,
                GeneratorKind::Country,
                GeneratorKind::Now
            ]
        );
    }

    #[test]
    fn test_literal_interleaving() {
        let cs = Callstack::build("a{guid}b").unwrap();
        assert_eq!(cs.items().len(), 3);
        assert!(matches!(&cs.items()[0], CallstackItem::Literal { text } if text == "a"));
        assert!(matches!(
            &cs.items()[1],
            CallstackItem::Generator { position: 0, .. }
        ));
        assert!(matches!(&cs.items()[2], CallstackItem::Literal { text } if text == "b"));
    }

    #[test]
    fn test_no_placeholders() {
        let cs = Callstack::build("SELECT 1;").unwrap();
        assert_eq!(cs.generator_count(), 0);
        assert_eq!(cs.items().len(), 1);
    }

    #[test]
    fn test_forward_reference_still_builds() {
        let cs = Callstack::build("{guid:ordinal:5}{guid}{guid:ordinal:2}").unwrap();
        assert_eq!(cs.dangling_ordinals(), vec![(0, 5), (2, 2)]);
    }

    #[test]
    fn test_backward_reference_not_dangling() {
        let cs = Callstack::build("{guid}@{guid:ordinal:0}").unwrap();
        assert!(cs.dangling_ordinals().is_empty());
    }

    #[test]
    fn test_from_str() {
        let cs: Callstack = "{int:min:1|max:2}".parse().unwrap();
        assert_eq!(cs.generator_count(), 1);
        assert!("{badtype}".parse::<Callstack>().is_err());
    }
}
