//! Snippet table for the MES scripting API.
//!
//! Snippet definitions are parsed once from a line-oriented source text
//! (`snippet <trigger>` header lines followed by tab-indented body lines)
//! into an immutable, declaration-ordered [`SnippetTable`]. Lookups are
//! exact-match and case-sensitive; expansion substitutes `${N:default}`
//! placeholders with caller-supplied values or their own defaults.

mod builtins;
mod render;
mod syntax;
mod table;

pub use builtins::{BUILTIN_SOURCE, builtins};
pub use render::{RenderedSnippet, render, render_with_overrides};
pub use syntax::{Field, FieldKind, Node, SnippetParseError, SnippetTemplate, parse_snippet_template};
pub use table::{MalformedSnippetError, SnippetDefinition, SnippetLoadError, SnippetTable};
