//! Load-once snippet table keyed by trigger.
//!
//! The source is line-oriented: a line starting with the word `snippet`
//! followed by whitespace and a trigger opens a definition; every following
//! line until the next header (or end of input) is a body line, with one
//! leading tab stripped if present. The table preserves declaration order
//! and is immutable after [`SnippetTable::load`].

use std::collections::HashMap;

use indexmap::IndexMap;
use thiserror::Error;

use crate::render::render_with_overrides;
use crate::syntax::{SnippetParseError, SnippetTemplate, parse_snippet_template};

/// One snippet: trigger, raw body text, and the parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetDefinition {
	pub trigger: String,
	pub body: String,
	pub template: SnippetTemplate,
}

impl SnippetDefinition {
	/// Ordered `(index, default)` pairs for the definition's tab stops.
	pub fn placeholders(&self) -> impl Iterator<Item = (u32, &str)> {
		self.template.placeholders()
	}
}

/// Load-time failure. The source is static and trusted, so any of these is
/// fatal to session startup and must reach the operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnippetLoadError {
	#[error(transparent)]
	Malformed(#[from] MalformedSnippetError),
	#[error("line {line}: duplicate snippet trigger '{trigger}'")]
	DuplicateTrigger { trigger: String, line: usize },
}

/// The source text violates the line or placeholder grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedSnippetError {
	#[error("snippet source is empty")]
	EmptySource,
	#[error("line {line}: template line outside any snippet definition")]
	OrphanTemplateLine { line: usize },
	#[error("line {line}: snippet header is missing a trigger name")]
	MissingTrigger { line: usize },
	#[error("line {line}: snippet '{trigger}': {source}")]
	Template {
		trigger: String,
		line: usize,
		#[source]
		source: SnippetParseError,
	},
	#[error("snippet '{trigger}': tab stops must be numbered contiguously from 1 (missing ${missing})")]
	NonContiguousTabStops { trigger: String, missing: u32 },
}

/// Immutable trigger -> definition map in declaration order.
#[derive(Debug, Clone)]
pub struct SnippetTable {
	defs: IndexMap<String, SnippetDefinition>,
}

impl SnippetTable {
	/// Parses the snippet source into a table.
	pub fn load(source: &str) -> Result<Self, SnippetLoadError> {
		if source.is_empty() {
			return Err(MalformedSnippetError::EmptySource.into());
		}

		let mut defs: IndexMap<String, SnippetDefinition> = IndexMap::new();
		let mut open: Option<(String, usize, Vec<String>)> = None;

		for (idx, raw) in source.lines().enumerate() {
			let line = idx + 1;
			if let Some(rest) = header_rest(raw) {
				let trigger = rest.trim();
				if trigger.is_empty() {
					return Err(MalformedSnippetError::MissingTrigger { line }.into());
				}
				if let Some(open) = open.take() {
					close_definition(&mut defs, open)?;
				}
				if defs.contains_key(trigger) {
					return Err(SnippetLoadError::DuplicateTrigger {
						trigger: trigger.to_string(),
						line,
					});
				}
				open = Some((trigger.to_string(), line, Vec::new()));
			} else {
				match open.as_mut() {
					Some((_, _, body)) => body.push(raw.strip_prefix('\t').unwrap_or(raw).to_string()),
					None => return Err(MalformedSnippetError::OrphanTemplateLine { line }.into()),
				}
			}
		}
		if let Some(open) = open.take() {
			close_definition(&mut defs, open)?;
		}

		tracing::debug!(snippets = defs.len(), "loaded snippet table");
		Ok(Self { defs })
	}

	/// Exact-match, case-sensitive lookup.
	pub fn get(&self, trigger: &str) -> Option<&SnippetDefinition> {
		self.defs.get(trigger)
	}

	/// All triggers in declaration order.
	pub fn triggers(&self) -> impl Iterator<Item = &str> {
		self.defs.keys().map(String::as_str)
	}

	/// All definitions in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &SnippetDefinition> {
		self.defs.values()
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Renders the trigger's template, substituting each tab stop with the
	/// caller's value for its index when present, else its own default.
	/// `None` when the trigger is absent.
	pub fn expand(&self, trigger: &str, overrides: &HashMap<u32, String>) -> Option<String> {
		let def = self.get(trigger)?;
		Some(render_with_overrides(&def.template, overrides).text)
	}
}

fn header_rest(line: &str) -> Option<&str> {
	let rest = line.strip_prefix("snippet")?;
	rest.starts_with([' ', '\t']).then_some(rest)
}

fn close_definition(
	defs: &mut IndexMap<String, SnippetDefinition>,
	(trigger, header_line, body): (String, usize, Vec<String>),
) -> Result<(), SnippetLoadError> {
	let body = body.join("\n");
	let template = parse_snippet_template(&body).map_err(|source| MalformedSnippetError::Template {
		trigger: trigger.clone(),
		line: header_line + 1 + body[..source.at()].matches('\n').count(),
		source,
	})?;
	check_tab_stops(&trigger, &template)?;
	defs.insert(trigger.clone(), SnippetDefinition { trigger, body, template });
	Ok(())
}

// Tab-stop indices within one template must be 1..=max with no gaps; the
// final cursor ($0) is exempt and repeats are allowed.
fn check_tab_stops(trigger: &str, template: &SnippetTemplate) -> Result<(), MalformedSnippetError> {
	let mut indices: Vec<u32> = template.placeholders().map(|(index, _)| index).collect();
	indices.sort_unstable();
	indices.dedup();
	for (pos, index) in indices.iter().enumerate() {
		let expected = pos as u32 + 1;
		if *index != expected {
			return Err(MalformedSnippetError::NonContiguousTabStops {
				trigger: trigger.to_string(),
				missing: expected,
			});
		}
	}
	Ok(())
}
