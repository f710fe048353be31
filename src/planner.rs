//! Segment planning over scanned templates
//!
//! The planner walks the scanner's matches in order and partitions the
//! template into alternating literal and image segments. Only placeholders
//! carrying the image marker are lifted out; plain placeholders like `{0}`
//! or `{1:N2}` stay embedded in the literal text and are resolved later by
//! positional substitution.

use crate::scanner::Scanner;

/// One ordered unit of a planned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal template text, possibly containing plain placeholders that
    /// substitution resolves at render time.
    Literal(String),
    /// An image placeholder. The index is kept raw so an overflowing digit
    /// run degrades at render time instead of failing the plan.
    Image {
        /// Raw digit capture of the argument index
        index_raw: String,
    },
}

impl Segment {
    /// Convenience constructor used by tests and the CLI.
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Segment::Image { .. })
    }
}

/// Partition a template into ordered literal/image segments.
///
/// Invariants:
/// - Segments cover the template left to right with no gaps and no
///   overlaps, except for the spans of image placeholders themselves.
/// - Text between the previous consumed region and an image placeholder is
///   emitted as a literal (only if non-empty); trailing text after the last
///   image placeholder becomes a final literal.
/// - A template with no image placeholders yields exactly one literal
///   segment equal to the whole template.
///
/// # Examples
///
/// ```
/// use richline::planner::{plan, Segment};
/// use richline::scanner::Scanner;
///
/// let scanner = Scanner::new();
/// let segments = plan(&scanner, "{0} used {1} {2:image} on you");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::literal("{0} used {1} "));
/// assert!(segments[1].is_image());
/// assert_eq!(segments[2], Segment::literal(" on you"));
/// ```
pub fn plan(scanner: &Scanner, template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in scanner.scan(template) {
        if !m.is_image() {
            continue;
        }
        if m.start > cursor {
            segments.push(Segment::Literal(template[cursor..m.start].to_string()));
        }
        segments.push(Segment::Image {
            index_raw: m.index_raw.to_string(),
        });
        cursor = m.end();
    }

    // Trailing text, or the single-literal case for templates without
    // image placeholders (including the empty template).
    if cursor < template.len() || segments.is_empty() {
        segments.push(Segment::Literal(template[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_str(template: &str) -> Vec<Segment> {
        plan(&Scanner::new(), template)
    }

    #[test]
    fn test_no_image_placeholders_single_literal() {
        let segments = plan_str("{0} picked up {1}");
        assert_eq!(segments, vec![Segment::literal("{0} picked up {1}")]);
    }

    #[test]
    fn test_empty_template_single_empty_literal() {
        assert_eq!(plan_str(""), vec![Segment::literal("")]);
    }

    #[test]
    fn test_image_between_literals() {
        let segments = plan_str("{0} used {1} {2:image} on you");
        assert_eq!(
            segments,
            vec![
                Segment::literal("{0} used {1} "),
                Segment::Image { index_raw: "2".to_string() },
                Segment::literal(" on you"),
            ]
        );
    }

    #[test]
    fn test_leading_image_no_empty_literal() {
        let segments = plan_str("{0:image} down");
        assert_eq!(
            segments,
            vec![
                Segment::Image { index_raw: "0".to_string() },
                Segment::literal(" down"),
            ]
        );
    }

    #[test]
    fn test_trailing_image_no_empty_literal() {
        let segments = plan_str("Destroyed by {0} ({1}) {2:image}");
        assert_eq!(
            segments,
            vec![
                Segment::literal("Destroyed by {0} ({1}) "),
                Segment::Image { index_raw: "2".to_string() },
            ]
        );
    }

    #[test]
    fn test_image_only_template() {
        let segments = plan_str("{0:image}");
        assert_eq!(segments, vec![Segment::Image { index_raw: "0".to_string() }]);
    }

    #[test]
    fn test_adjacent_images() {
        let segments = plan_str("{0:image}{1:image}");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_image));
    }

    #[test]
    fn test_uppercase_marker_stays_literal() {
        let segments = plan_str("{0:IMAGE}");
        assert_eq!(segments, vec![Segment::literal("{0:IMAGE}")]);
    }

    #[test]
    fn test_malformed_braces_stay_literal() {
        let segments = plan_str("hp {bar} {0:image}");
        assert_eq!(
            segments,
            vec![
                Segment::literal("hp {bar} "),
                Segment::Image { index_raw: "0".to_string() },
            ]
        );
    }

    #[test]
    fn test_overflow_index_kept_raw() {
        let segments = plan_str("{99999999999999999999999:image}");
        assert_eq!(
            segments,
            vec![Segment::Image { index_raw: "99999999999999999999999".to_string() }]
        );
    }

    #[test]
    fn test_multibyte_literals() {
        let segments = plan_str("{0} 使用 {1} {2:image} 擊殺了你");
        assert_eq!(
            segments,
            vec![
                Segment::literal("{0} 使用 {1} "),
                Segment::Image { index_raw: "2".to_string() },
                Segment::literal(" 擊殺了你"),
            ]
        );
    }
}
