//! Named template catalogs loaded from JSON5 streams
//!
//! Message templates are authored data: a catalog file holds concatenated
//! JSON5 objects, one per template, in either single-line JSONL or
//! multi-line JSON5 form (comments, trailing commas, and unquoted keys are
//! allowed). Parsing is lenient: malformed objects produce warnings, not
//! failures, and the remaining templates still load.

use crate::scanner::Scanner;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Error type for single-object parse failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A non-fatal diagnostic tied to a catalog source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

/// A named line template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    /// Template text with `{n[:spec]}` placeholders
    pub text: String,
}

/// A single object in a catalog stream, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogObject {
    Template(Template),
}

/// Parse one JSON5 object into a catalog object.
pub fn parse_object(source: &str, line: usize) -> Result<CatalogObject, ParseError> {
    json5::from_str(source).map_err(|e| ParseError {
        message: e.to_string(),
        line,
    })
}

/// Result of parsing a catalog stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub objects: Vec<CatalogObject>,
    pub warnings: Vec<Warning>,
}

/// Accumulates stream lines until they form one balanced JSON5 object.
///
/// Depth counting ignores braces and brackets inside string literals, which
/// template text is full of (`"{0} used {1}"`).
#[derive(Debug, Default)]
struct ObjectAccumulator {
    buffer: String,
    depth: i32,
    in_string: bool,
    escaped: bool,
}

impl ObjectAccumulator {
    fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Feed one line; returns true once the buffered object is balanced.
    fn feed(&mut self, line: &str) -> bool {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);

        for c in line.chars() {
            if self.escaped {
                self.escaped = false;
                continue;
            }
            match c {
                '\\' if self.in_string => self.escaped = true,
                '"' => self.in_string = !self.in_string,
                '{' | '[' if !self.in_string => self.depth += 1,
                '}' | ']' if !self.in_string => self.depth -= 1,
                _ => {}
            }
        }

        self.depth == 0 && !self.is_empty()
    }

    fn take(&mut self) -> String {
        self.in_string = false;
        self.escaped = false;
        std::mem::take(&mut self.buffer)
    }
}

/// Parse a stream of concatenated JSON5 catalog objects.
///
/// A malformed object stops the stream with a warning; objects already
/// parsed are kept (an object boundary cannot be recovered reliably after
/// a syntax error).
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();
    let mut accumulator = ObjectAccumulator::default();
    let mut start_line = 1;

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line_number = index + 1;
        let Ok(line) = line else {
            result.warnings.push(Warning {
                message: "unreadable line in catalog stream".to_string(),
                line: line_number,
            });
            return result;
        };

        if accumulator.is_empty() {
            if line.trim().is_empty() {
                continue;
            }
            start_line = line_number;
        }

        if accumulator.feed(&line) {
            match parse_object(&accumulator.take(), start_line) {
                Ok(obj) => result.objects.push(obj),
                Err(e) => {
                    result.warnings.push(Warning {
                        message: e.message,
                        line: e.line,
                    });
                    return result;
                }
            }
        }
    }

    if !accumulator.is_empty() {
        match parse_object(&accumulator.take(), start_line) {
            Ok(obj) => result.objects.push(obj),
            Err(e) => result.warnings.push(Warning {
                message: e.message,
                line: e.line,
            }),
        }
    }

    result
}

/// Registry of named templates.
///
/// # Examples
///
/// ```
/// use richline::catalog::{Catalog, Template};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Template {
///     name: "kill_feed".to_string(),
///     text: "{0} used {1} {2:image} on you".to_string(),
/// });
/// assert!(catalog.contains("kill_feed"));
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<String, Template>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous one with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Build a catalog from a JSON5 stream, collecting warnings for
    /// malformed objects, duplicate names, and image placeholders whose
    /// index digits cannot address any argument slot.
    pub fn from_reader<R: Read>(reader: R) -> (Self, Vec<Warning>) {
        let mut parsed = parse_stream(reader);
        let mut catalog = Self::new();
        let scanner = Scanner::new();

        for obj in parsed.objects.drain(..) {
            let CatalogObject::Template(template) = obj;
            if catalog.contains(&template.name) {
                parsed.warnings.push(Warning {
                    message: format!(
                        "duplicate template '{}' replaces an earlier definition",
                        template.name
                    ),
                    line: 0,
                });
            }
            for m in scanner.scan(&template.text) {
                if m.is_image() && m.arg_index().is_none() {
                    parsed.warnings.push(Warning {
                        message: format!(
                            "template '{}': image index '{}' does not parse",
                            template.name, m.index_raw
                        ),
                        line: 0,
                    });
                }
            }
            catalog.register(template);
        }

        (catalog, parsed.warnings)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> std::io::Result<(Self, Vec<Warning>)> {
        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}
