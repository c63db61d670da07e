//! Template grammar for snippet bodies.
//!
//! A body is literal text interleaved with tab-stop markers: `${N:default}`
//! (placeholder with default text), `${N}` / `$N` (default-less tab stop),
//! and `$0` for the final cursor position. Defaults are plain text up to the
//! closing brace; markers never nest.

use thiserror::Error;

/// One element of a parsed snippet body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Field(Field),
}

/// A numbered, editable region within an expanded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub index: u32,
	pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// `$N` or `${N}`: a tab stop with no default text. Index 0 marks the
	/// final cursor position.
	Tabstop,
	/// `${N:default}`: a tab stop pre-filled with default text.
	Placeholder(String),
}

impl FieldKind {
	/// The text this field renders to when the caller supplies no value.
	pub fn default_text(&self) -> &str {
		match self {
			FieldKind::Tabstop => "",
			FieldKind::Placeholder(default) => default,
		}
	}
}

/// A parsed snippet body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTemplate {
	pub nodes: Vec<Node>,
}

impl SnippetTemplate {
	/// Ordered `(index, default)` pairs for every tab stop except the final
	/// cursor. Repeated indices mirror the same input and appear once per
	/// occurrence.
	pub fn placeholders(&self) -> impl Iterator<Item = (u32, &str)> {
		self.nodes.iter().filter_map(|node| match node {
			Node::Field(field) if field.index != 0 => Some((field.index, field.kind.default_text())),
			_ => None,
		})
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnippetParseError {
	#[error("unterminated placeholder at byte {at}")]
	UnterminatedPlaceholder { at: usize },
	#[error("tab stop index at byte {at} is out of range")]
	IndexOutOfRange { at: usize },
}

impl SnippetParseError {
	/// Byte offset of the offending marker within the template body.
	pub fn at(&self) -> usize {
		match self {
			SnippetParseError::UnterminatedPlaceholder { at } | SnippetParseError::IndexOutOfRange { at } => *at,
		}
	}
}

/// Parses a snippet body into its node sequence.
///
/// Braced constructs that do not match the grammar (`${name}`, `${1x}`) fall
/// back to literal text; only a digit-led `${N` missing its closing brace on
/// the same line is an error.
pub fn parse_snippet_template(text: &str) -> Result<SnippetTemplate, SnippetParseError> {
	let mut nodes = Vec::new();
	let mut literal = String::new();
	let mut i = 0;

	while let Some(rel) = text[i..].find('$') {
		let dollar = i + rel;
		literal.push_str(&text[i..dollar]);
		let rest = &text[dollar + 1..];

		if let Some(inner) = rest.strip_prefix('{') {
			let digits = leading_digits(inner);
			if digits == 0 {
				literal.push('$');
				i = dollar + 1;
				continue;
			}
			let index = parse_index(&inner[..digits], dollar)?;
			match inner[digits..].chars().next() {
				Some('}') => {
					flush(&mut literal, &mut nodes);
					nodes.push(Node::Field(Field { index, kind: FieldKind::Tabstop }));
					i = dollar + 2 + digits + 1;
				}
				Some(':') => {
					let default_start = dollar + 2 + digits + 1;
					let default = &text[default_start..];
					match default.find(['}', '\n']) {
						Some(close) if default.as_bytes()[close] == b'}' => {
							flush(&mut literal, &mut nodes);
							nodes.push(Node::Field(Field {
								index,
								kind: FieldKind::Placeholder(default[..close].to_string()),
							}));
							i = default_start + close + 1;
						}
						_ => return Err(SnippetParseError::UnterminatedPlaceholder { at: dollar }),
					}
				}
				Some(_) => {
					literal.push('$');
					i = dollar + 1;
				}
				None => return Err(SnippetParseError::UnterminatedPlaceholder { at: dollar }),
			}
			continue;
		}

		let digits = leading_digits(rest);
		if digits == 0 {
			literal.push('$');
			i = dollar + 1;
			continue;
		}
		let index = parse_index(&rest[..digits], dollar)?;
		flush(&mut literal, &mut nodes);
		nodes.push(Node::Field(Field { index, kind: FieldKind::Tabstop }));
		i = dollar + 1 + digits;
	}

	literal.push_str(&text[i..]);
	flush(&mut literal, &mut nodes);
	Ok(SnippetTemplate { nodes })
}

fn flush(literal: &mut String, nodes: &mut Vec<Node>) {
	if !literal.is_empty() {
		nodes.push(Node::Text(std::mem::take(literal)));
	}
}

fn leading_digits(s: &str) -> usize {
	s.bytes().take_while(u8::is_ascii_digit).count()
}

fn parse_index(digits: &str, at: usize) -> Result<u32, SnippetParseError> {
	digits.parse().map_err(|_| SnippetParseError::IndexOutOfRange { at })
}
