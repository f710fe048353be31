//! Capability traits for the display objects the compositor drives
//!
//! The crate never draws anything itself. It compiles a template into an
//! ordered set of elements and pushes content, ordering, and visibility
//! into whatever display implementation the embedder supplies: a game UI
//! node, a terminal line, a test recorder. See [`crate::terminal`] for the
//! implementation the CLI uses.

use crate::value::Value;

/// A pooled text element.
///
/// Implementations are created inactive by their factory and are toggled,
/// reordered, and refilled across renders; they must tolerate any call
/// sequence of these setters.
pub trait TextElement {
    /// Replace the element's text content.
    fn set_text(&mut self, text: &str);

    /// Sibling-ordering hint consumed by the embedder's layout. Orders are
    /// strictly increasing across all elements of one render, shared with
    /// image elements.
    fn set_order(&mut self, order: usize);

    /// Show or hide the element. Hidden elements keep their last content.
    fn set_active(&mut self, active: bool);
}

/// A pooled image element.
pub trait ImageElement {
    /// Assign the element's content. The compositor hands over the
    /// argument value as-is; an implementation decides what a non-image
    /// value means for it (spec'd slots are expected to carry
    /// [`Value::Image`], but the compositor does not enforce that).
    fn set_source(&mut self, source: &Value);

    /// Adopt the natural size of the current content.
    fn resize_to_content(&mut self);

    /// Sibling-ordering hint, shared with text elements. See
    /// [`TextElement::set_order`].
    fn set_order(&mut self, order: usize);

    /// Show or hide the element.
    fn set_active(&mut self, active: bool);
}

/// Creates display objects for the compositor's pools.
///
/// A factory call happens at most once per pool position for the lifetime
/// of a compositor. New elements must come out inactive, parented under the
/// embedder's container with default transform; the compositor immediately
/// assigns content and ordering before activating them.
pub trait ElementFactory {
    type Text: TextElement;
    type Image: ImageElement;

    fn create_text(&mut self) -> Self::Text;
    fn create_image(&mut self) -> Self::Image;
}
