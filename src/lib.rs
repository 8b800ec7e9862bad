//! Compile placeholder templates into callstacks that render test data.
//!
//! A template is literal text with typed placeholders:
//!
//! ```rust
//! use datastencil::{Callstack, Sources};
//!
//! let callstack = Callstack::build(
//!     "INSERT INTO users VALUES ('{guid}', '{guid:ordinal:0}', {int:min:18|max:99});",
//! )
//! .unwrap();
//!
//! // Seeded sources make the output reproducible
//! let sql = callstack.render_with(&mut Sources::seeded(42)).unwrap();
//! assert!(sql.starts_with("INSERT INTO users VALUES ('"));
//! ```
//!
//! # Placeholders
//!
//! - `{guid}` - random v4 UUID
//! - `{now}` - current time
//! - `{time:min:N|max:N|format:F}` - random Unix time in range, strftime layout
//! - `{int:min:N|max:N}` - integer in inclusive range
//! - `{float:min:N|max:N}` - real in inclusive range
//! - `{country:case:up|down}` - country name
//! - `{unicode:length:N|case:up|down}` - printable characters
//!
//! Every placeholder also accepts `ordinal:N`, replaying the value generated
//! at position `N` (0-based, counted across all placeholders) instead of
//! generating a new one. Ordinals are resolved while writing, so a reference
//! to the same or a later position compiles but fails every write.

// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod callstack;
pub mod error;
pub mod generator;
pub mod render;
pub mod source;
pub mod template;

pub use callstack::{build_callstack, Callstack, CallstackItem};
pub use error::{BuildError, WriteError};
pub use generator::{Case, GenerateError, GeneratorConfig, GeneratorKind};
pub use render::{RenderConfig, RenderStats, Renderer};
pub use source::{
    Clock, CountryProvider, FixedClock, RandomSource, RngSource, SourceError, Sources, SystemClock,
};
pub use template::Placeholder;
