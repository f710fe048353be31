//! Positional format substitution for literal segments
//!
//! Implements the `{n[:spec]}` substitution a literal segment goes through
//! at render time. Supported spec families, modeled on the numeric formats
//! the templates of the original data set used:
//! - `N`/`N<d>`: fixed decimals (default 2) with `,` thousands grouping
//! - `F`/`F<d>`: fixed decimals, no grouping
//! - `D`/`D<d>`: integers, zero-padded to `<d>` digits
//! - `X`/`x<d>`: integers, upper/lowercase hex, zero-padded
//!
//! Any spec applied to a string, bool, or image value is ignored and the
//! value renders in its display form. `{{` and `}}` escape literal braces.
//! Brace runs that do not conform to the placeholder shape pass through
//! verbatim rather than failing the call.

use crate::value::Value;
use thiserror::Error;

/// Error type for substitution failures. Both kinds are fatal to the
/// format call that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A text placeholder addressed an argument slot that does not exist
    #[error("format index {index} out of range for {len} argument(s)")]
    IndexOutOfRange { index: usize, len: usize },
    /// A numeric value was given a spec no format family understands
    #[error("unknown format spec '{spec}' for {kind} value")]
    UnknownSpec { spec: String, kind: &'static str },
}

/// Substitute every conforming `{n[:spec]}` in `text` against `args`.
///
/// # Examples
///
/// ```
/// use richline::fmt::substitute;
/// use richline::value::Value;
///
/// let args = vec![Value::from("simon"), Value::from(3.14159)];
/// assert_eq!(substitute("{0}: {1:N2}", &args).unwrap(), "simon: 3.14");
/// assert_eq!(substitute("{{0}} literal", &args).unwrap(), "{0} literal");
/// ```
///
/// # Errors
///
/// Returns [`FormatError`] for an out-of-range index or a spec the value's
/// kind cannot honor. Non-conforming brace runs are not errors.
pub fn substitute(text: &str, args: &[Value]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('}') {
            // Lone closing brace, passes through
            out.push('}');
            rest = after;
        } else if let Some(ph) = parse_placeholder(tail) {
            let len = args.len();
            let value = args.get(ph.index).ok_or(FormatError::IndexOutOfRange {
                index: ph.index,
                len,
            })?;
            out.push_str(&format_value(value, ph.spec)?);
            rest = &tail[ph.consumed..];
        } else {
            // Non-conforming run such as "{name}" or "{1:}"
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Format a single value under an optional spec.
pub fn format_value(value: &Value, spec: Option<&str>) -> Result<String, FormatError> {
    let Some(spec) = spec else {
        return Ok(value.to_string());
    };
    match value {
        // Specs only apply to numbers; everything else keeps its display form
        Value::Str(_) | Value::Bool(_) | Value::Image(_) => Ok(value.to_string()),
        Value::Int(i) => format_int(*i, spec),
        Value::Float(v) => format_float(*v, spec),
    }
}

struct Placeholder<'t> {
    /// Bytes of the full `{...}` span
    consumed: usize,
    index: usize,
    spec: Option<&'t str>,
}

/// Parse a conforming `{index[:spec]}` at the start of `s`. Returns `None`
/// for anything that should stay literal, including index digits that
/// overflow `usize`.
fn parse_placeholder(s: &str) -> Option<Placeholder<'_>> {
    let inner = s.strip_prefix('{')?;
    let close = inner.find('}')?;
    let body = &inner[..close];

    let (digits, spec) = match body.split_once(':') {
        Some((_, "")) => return None,
        Some((digits, spec)) => (digits, Some(spec)),
        None => (body, None),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(Placeholder {
        consumed: close + 2,
        index: digits.parse().ok()?,
        spec,
    })
}

/// Split a spec like `N2` into its family letter and optional precision.
fn split_spec(spec: &str) -> Option<(char, Option<usize>)> {
    let mut chars = spec.chars();
    let family = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        Some((family, None))
    } else {
        rest.parse().ok().map(|precision| (family, Some(precision)))
    }
}

fn format_int(value: i64, spec: &str) -> Result<String, FormatError> {
    let unknown = || FormatError::UnknownSpec {
        spec: spec.to_string(),
        kind: "integer",
    };
    let (family, precision) = split_spec(spec).ok_or_else(unknown)?;
    match family {
        'N' | 'n' => Ok(group_thousands(&format!(
            "{:.*}",
            precision.unwrap_or(2),
            value as f64
        ))),
        'F' | 'f' => Ok(format!("{:.*}", precision.unwrap_or(2), value as f64)),
        'D' | 'd' => Ok(format!("{:0width$}", value, width = precision.unwrap_or(0))),
        'X' => Ok(format!("{:0width$X}", value, width = precision.unwrap_or(0))),
        'x' => Ok(format!("{:0width$x}", value, width = precision.unwrap_or(0))),
        _ => Err(unknown()),
    }
}

fn format_float(value: f64, spec: &str) -> Result<String, FormatError> {
    let unknown = || FormatError::UnknownSpec {
        spec: spec.to_string(),
        kind: "float",
    };
    let (family, precision) = split_spec(spec).ok_or_else(unknown)?;
    match family {
        'N' | 'n' => Ok(group_thousands(&format!(
            "{:.*}",
            precision.unwrap_or(2),
            value
        ))),
        'F' | 'f' => Ok(format!("{:.*}", precision.unwrap_or(2), value)),
        _ => Err(unknown()),
    }
}

/// Insert `,` thousands separators into an already-formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
