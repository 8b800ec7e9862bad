//! Executes a callstack into an output sink.

use super::{Callstack, CallstackItem};
use crate::error::WriteError;
use crate::source::{RandomSource, Sources};
use std::io::Write;
use tracing::{debug, trace};

/// Values produced during one write, indexed by position.
///
/// Positions are visited in increasing order, so a reference is resolvable
/// exactly when it is below the number of recorded values.
struct ExecutionHistory {
    values: Vec<String>,
}

impl ExecutionHistory {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    fn get(&self, reference: usize) -> Option<&str> {
        self.values.get(reference).map(String::as_str)
    }

    fn record(&mut self, position: usize, value: String) {
        debug_assert_eq!(position, self.values.len());
        self.values.push(value);
    }
}

impl Callstack {
    /// Execute with thread-local randomness, the system clock and `fake`
    /// country names.
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), WriteError> {
        self.write_with(sink, &mut Sources::system())
    }

    /// Execute against injected sources.
    ///
    /// Stops at the first failure. Output already handed to `sink` is not
    /// retracted; use [`Callstack::render_with`] to get all or nothing.
    pub fn write_with<W, R>(&self, sink: &mut W, sources: &mut Sources<R>) -> Result<(), WriteError>
    where
        W: Write + ?Sized,
        R: RandomSource,
    {
        let mut history = ExecutionHistory::with_capacity(self.generator_count);

        for item in &self.items {
            let (position, placeholder) = match item {
                CallstackItem::Literal { text } => {
                    sink.write_all(text.as_bytes())?;
                    continue;
                }
                CallstackItem::Generator {
                    position,
                    placeholder,
                } => (*position, placeholder),
            };

            let value = match placeholder.ordinal {
                Some(reference) => history
                    .get(reference)
                    .map(str::to_string)
                    .ok_or(WriteError::OrdinalResolution {
                        position,
                        reference,
                    })?,
                None => placeholder
                    .config
                    .generate(sources)
                    .map_err(|source| WriteError::Generator {
                        position,
                        kind: placeholder.kind(),
                        source,
                    })?,
            };
            trace!(position, kind = %placeholder.kind(), value = %value, "generated");

            sink.write_all(value.as_bytes())?;
            history.record(position, value);
        }

        debug!(generators = self.generator_count, "wrote callstack");
        Ok(())
    }

    /// Execute into a fresh string with system sources.
    pub fn render(&self) -> Result<String, WriteError> {
        self.render_with(&mut Sources::system())
    }

    /// Execute into a fresh string; nothing is returned on failure.
    pub fn render_with<R: RandomSource>(&self, sources: &mut Sources<R>) -> Result<String, WriteError> {
        let mut buf = Vec::new();
        self.write_with(&mut buf, sources)?;
        // Templates and generated values are all valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
