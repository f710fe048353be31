//! Argument values passed to a format call
//!
//! Arguments are opaque to the scanner and planner; only the compositor and
//! the format subsystem inspect them. `Value` covers the scalar kinds a line
//! template substitutes as text, plus `ImageRef` for icon slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to an image asset used by an icon placeholder.
///
/// The `width`/`height` are the natural content size the owning display
/// object adopts on `resize_to_content`. Asset loading itself happens
/// outside this crate; `source` is an opaque key into whatever store the
/// display implementation uses.
///
/// # Examples
///
/// ```
/// use richline::value::ImageRef;
///
/// let icon: ImageRef = json5::from_str(r#"{image: "rocket", width: 32, height: 32}"#).unwrap();
/// assert_eq!(icon.source, "rocket");
/// assert_eq!((icon.width, icon.height), (32, 32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Asset key or path
    #[serde(rename = "image")]
    pub source: String,
    /// Natural width in pixels
    #[serde(default)]
    pub width: u32,
    /// Natural height in pixels
    #[serde(default)]
    pub height: u32,
}

impl ImageRef {
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }
}

/// A positional argument supplied to a format call.
///
/// Deserializes untagged, so argument lists read naturally from JSON5:
/// scalars stay scalars and maps with an `image` key become [`ImageRef`]s.
///
/// # Examples
///
/// ```
/// use richline::value::Value;
///
/// let args: Vec<Value> = json5::from_str(
///     r#"["simon", 3, 3.5, true, {image: "rocket", width: 16, height: 16}]"#,
/// ).unwrap();
/// assert!(matches!(args[0], Value::Str(_)));
/// assert!(matches!(args[1], Value::Int(3)));
/// assert!(matches!(args[2], Value::Float(_)));
/// assert!(matches!(args[4], Value::Image(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Image reference for icon placeholders
    Image(ImageRef),
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Plain text
    Str(String),
}

impl Value {
    /// Returns the image reference if this value is one.
    pub fn as_image(&self) -> Option<&ImageRef> {
        match self {
            Value::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// Display form used by text substitution. Image values render as their
/// source key; whether an image belongs in a text slot is the caller's
/// concern, not validated here.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Image(image) => f.write_str(&image.source),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<ImageRef> for Value {
    fn from(image: ImageRef) -> Self {
        Value::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::from("simon").to_string(), "simon");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(3.5f64).to_string(), "3.5");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn test_display_image_is_source_key() {
        let value = Value::from(ImageRef::new("rocket_icon", 32, 32));
        assert_eq!(value.to_string(), "rocket_icon");
    }

    #[test]
    fn test_untagged_integer_stays_integer() {
        let value: Value = json5::from_str("7").unwrap();
        assert_eq!(value, Value::Int(7));
    }

    #[test]
    fn test_untagged_image_map() {
        let value: Value = json5::from_str(r#"{image: "skull"}"#).unwrap();
        let image = value.as_image().expect("expected image");
        assert_eq!(image.source, "skull");
        assert_eq!((image.width, image.height), (0, 0));
    }

    #[test]
    fn test_as_image_on_scalar() {
        assert!(Value::from("skull").as_image().is_none());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let args = vec![
            Value::from("a"),
            Value::from(1i64),
            Value::from(ImageRef::new("x", 8, 8)),
        ];
        let json = serde_json::to_string(&args).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, args);
    }
}
