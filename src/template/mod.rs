//! Template front end: lexing, placeholder parsing and option resolution.
//!
//! ```text
//! "('{guid}',{int:min:1|max:9})"
//!        │ lexer::tokenize
//!        ▼
//! Literal("('") Placeholder("{guid}") Literal("',") Placeholder(...) Literal(")")
//!        │ placeholder::parse
//!        ▼
//! PlaceholderSpec { type_name: "int", options: [("min","1"), ("max","9")] }
//!        │ resolve::resolve
//!        ▼
//! Placeholder { config: Int { min: 1, max: 9 }, ordinal: None }
//! ```

pub mod lexer;
pub mod placeholder;
pub mod resolve;

pub use lexer::{tokenize, Span, Token};
pub use placeholder::{PlaceholderSpec, RawOptions};
pub use resolve::Placeholder;

use crate::error::BuildError;

/// Parse and validate one placeholder span.
pub fn compile_placeholder(span: Span<'_>) -> Result<Placeholder, BuildError> {
    let spec = placeholder::parse(span)?;
    resolve::resolve(&spec)
}
