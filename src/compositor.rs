//! Template-to-element compositing against pooled display objects
//!
//! `Compositor::format` is the call surface of the crate: it plans a
//! template into segments, draws display objects from the text and image
//! pools in reading order, applies content, and hides whatever the
//! previous render left behind. Pools grow on demand and never shrink, so
//! steady-state renders allocate nothing.

use crate::display::{ElementFactory, ImageElement, TextElement};
use crate::fmt::{self, FormatError};
use crate::planner::{self, Segment};
use crate::pool::ElementPool;
use crate::scanner::Scanner;
use crate::value::Value;
use thiserror::Error;

/// A non-fatal diagnostic generated during a format call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error type for fatal format-call failures.
///
/// A failed call leaves pool elements already touched by this call in
/// their partially-applied state; there is no rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// An image placeholder addressed an argument slot that does not exist
    #[error("args length {len}, image index {index}")]
    ImageIndexOutOfRange { index: usize, len: usize },
    /// Text substitution failed (bad index or spec in a literal segment)
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Compiles templates into ordered, pooled display elements.
///
/// Owns one pool per element kind and the factory that populates them.
/// Single-threaded by construction: `format` mutates pool state in place
/// and must not run concurrently with any other access to this instance.
///
/// # Examples
///
/// ```
/// use richline::compositor::Compositor;
/// use richline::terminal::{compose_line, TermFactory};
/// use richline::value::{ImageRef, Value};
///
/// let mut compositor = Compositor::new(TermFactory::new());
/// let args = vec![
///     Value::from("simon"),
///     Value::from("rocket"),
///     Value::from(ImageRef::new("boom", 16, 16)),
/// ];
/// let warnings = compositor.format("{0} used {1} {2:image} on you", &args).unwrap();
/// assert!(warnings.is_empty());
/// assert_eq!(compose_line(&compositor), "simon used rocket [boom 16x16] on you");
/// ```
pub struct Compositor<F: ElementFactory> {
    scanner: Scanner,
    factory: F,
    text_pool: ElementPool<F::Text>,
    image_pool: ElementPool<F::Image>,
}

impl<F: ElementFactory> Compositor<F> {
    pub fn new(factory: F) -> Self {
        Self {
            scanner: Scanner::new(),
            factory,
            text_pool: ElementPool::new(),
            image_pool: ElementPool::new(),
        }
    }

    /// Render `template` against `args` onto the pooled elements.
    ///
    /// On success returns the non-fatal warnings of this call (an image
    /// placeholder whose index digits overflow is logged and skipped,
    /// consuming no element and no order slot).
    ///
    /// # Errors
    ///
    /// - [`ComposeError::ImageIndexOutOfRange`] when an image placeholder's
    ///   index falls outside the argument list. Fatal; the remainder of the
    ///   call is abandoned.
    /// - [`ComposeError::Format`] when literal substitution fails.
    pub fn format(&mut self, template: &str, args: &[Value]) -> Result<Vec<Warning>, ComposeError> {
        let Self {
            scanner,
            factory,
            text_pool,
            image_pool,
        } = self;

        // Full per-call reset: rewind cursors, hide everything from the
        // previous render.
        text_pool.reset();
        image_pool.reset();
        for element in text_pool.iter_mut() {
            element.set_active(false);
        }
        for element in image_pool.iter_mut() {
            element.set_active(false);
        }

        let mut warnings = Vec::new();
        let mut order = 0;

        for segment in planner::plan(scanner, template) {
            match segment {
                Segment::Literal(text) => {
                    let content = fmt::substitute(&text, args)?;
                    let element = text_pool.acquire_with(|| factory.create_text());
                    element.set_text(&content);
                    element.set_order(order);
                    element.set_active(true);
                    order += 1;
                }
                Segment::Image { index_raw } => {
                    let Ok(index) = index_raw.parse::<usize>() else {
                        warnings.push(Warning::new(format!(
                            "image index '{index_raw}' does not parse, placeholder skipped"
                        )));
                        continue;
                    };
                    if index >= args.len() {
                        return Err(ComposeError::ImageIndexOutOfRange {
                            index,
                            len: args.len(),
                        });
                    }
                    let element = image_pool.acquire_with(|| factory.create_image());
                    element.set_source(&args[index]);
                    element.resize_to_content();
                    element.set_order(order);
                    element.set_active(true);
                    order += 1;
                }
            }
        }

        Ok(warnings)
    }

    /// The text element pool, in allocation order.
    pub fn text_pool(&self) -> &ElementPool<F::Text> {
        &self.text_pool
    }

    /// The image element pool, in allocation order.
    pub fn image_pool(&self) -> &ElementPool<F::Image> {
        &self.image_pool
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
