//! Renders a parsed template to expanded text.
//!
//! Besides the text, the renderer reports the char range each tab stop
//! occupies in the output so an editor host can drive field navigation.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use crate::syntax::{Node, SnippetTemplate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSnippet {
	pub text: String,
	/// Char ranges per tab-stop index; repeated indices get one range per
	/// occurrence. The final cursor (`$0`) is a point range under index 0.
	pub tabstops: BTreeMap<u32, Vec<Range<usize>>>,
}

/// Renders with every placeholder showing its own default text.
pub fn render(template: &SnippetTemplate) -> RenderedSnippet {
	render_with_overrides(template, &HashMap::new())
}

/// Renders with caller-supplied values substituted by tab-stop index; stops
/// without an override keep their default text.
pub fn render_with_overrides(template: &SnippetTemplate, overrides: &HashMap<u32, String>) -> RenderedSnippet {
	let mut text = String::new();
	let mut tabstops: BTreeMap<u32, Vec<Range<usize>>> = BTreeMap::new();
	let mut out_chars = 0usize;

	for node in &template.nodes {
		match node {
			Node::Text(literal) => {
				text.push_str(literal);
				out_chars = out_chars.saturating_add(literal.chars().count());
			}
			Node::Field(field) => {
				let value = overrides.get(&field.index).map(String::as_str).unwrap_or(field.kind.default_text());
				let start = out_chars;
				text.push_str(value);
				out_chars = out_chars.saturating_add(value.chars().count());
				tabstops.entry(field.index).or_default().push(start..out_chars);
			}
		}
	}

	RenderedSnippet { text, tabstops }
}
