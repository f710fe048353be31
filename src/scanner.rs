//! Placeholder extraction from template strings
//!
//! A template interleaves literal text with positional placeholders of the
//! form `{0}`, `{1:N2}` or `{2:image}`. The scanner finds every conforming
//! placeholder; anything brace-shaped that does not match the grammar is
//! simply left for the literal stream.

use regex::Regex;

/// Placeholder grammar: `{<digits>[:<anything-but-}>]}`.
///
/// Group 1 captures the argument index digits, group 3 the optional format
/// spec. Matching is case-insensitive; the spec capture keeps its original
/// case.
const PATTERN: &str = r"(?i)\{(\d+)(:([^}]+))?\}";

/// Format spec that marks a placeholder as an image slot. Compared
/// case-sensitively against the spec capture, so `{0:Image}` is an ordinary
/// text placeholder.
pub const IMAGE_SPEC: &str = "image";

/// A single conforming placeholder found in a template.
///
/// Borrows from the scanned template. The index is kept as the raw digit
/// capture; digits that overflow `usize` surface later as an unparseable
/// index, not as a scan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderMatch<'t> {
    /// Byte offset of the opening brace
    pub start: usize,
    /// Byte length of the full `{...}` span
    pub len: usize,
    /// Raw digit capture of the argument index
    pub index_raw: &'t str,
    /// Format spec capture, if any (text between `:` and `}`)
    pub spec: Option<&'t str>,
}

impl PlaceholderMatch<'_> {
    /// Byte offset just past the closing brace.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// True if the spec is exactly the image marker.
    pub fn is_image(&self) -> bool {
        self.spec == Some(IMAGE_SPEC)
    }

    /// The argument index, if the digit capture fits in `usize`.
    pub fn arg_index(&self) -> Option<usize> {
        self.index_raw.parse().ok()
    }
}

/// Compiled placeholder grammar.
///
/// Compile once and reuse; every [`Compositor`](crate::compositor::Compositor)
/// owns one for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use richline::scanner::Scanner;
///
/// let scanner = Scanner::new();
/// let matches: Vec<_> = scanner.scan("{0} used {1} {2:image} on you").collect();
/// assert_eq!(matches.len(), 3);
/// assert_eq!(matches[0].index_raw, "0");
/// assert!(matches[2].is_image());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(PATTERN).expect("placeholder grammar must compile"),
        }
    }

    /// Scan a template for conforming placeholders, left to right.
    ///
    /// Matches are non-overlapping and ordered by position. Malformed
    /// brace runs (`{}`, `{name}`, `{1:}`, unclosed `{2`) produce no match
    /// and no error; they stay part of the surrounding literal text.
    pub fn scan<'t>(&'t self, template: &'t str) -> impl Iterator<Item = PlaceholderMatch<'t>> + 't {
        self.pattern.captures_iter(template).filter_map(|caps| {
            let whole = caps.get(0)?;
            let index = caps.get(1)?;
            Some(PlaceholderMatch {
                start: whole.start(),
                len: whole.len(),
                index_raw: index.as_str(),
                spec: caps.get(3).map(|m| m.as_str()),
            })
        })
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
