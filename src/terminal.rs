//! Terminal implementation of the display traits
//!
//! Used by the CLI and by integration tests. Text elements hold their
//! substituted content verbatim; image elements render as a bracketed chip
//! such as `[rocket 32x32]`, optionally decorated with ANSI reverse video
//! for terminals. `compose_line` reassembles active elements in placement
//! order into a single printable line.

use crate::compositor::Compositor;
use crate::display::{ElementFactory, ImageElement, TextElement};
use crate::value::Value;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape sequence for reverse video, used for image chips
pub const ANSI_REVERSE: &str = "\x1b[7m";

/// Terminal text element: remembers content, order, and visibility.
#[derive(Debug, Clone, Default)]
pub struct TermText {
    text: String,
    order: usize,
    active: bool,
}

impl TermText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl TextElement for TermText {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Terminal image element: renders its source as a bracketed chip.
#[derive(Debug, Clone, Default)]
pub struct TermImage {
    source: Option<Value>,
    width: u32,
    height: u32,
    order: usize,
    active: bool,
    ansi: bool,
}

impl TermImage {
    /// The chip text for the current content, e.g. `[rocket 32x32]`.
    ///
    /// A non-image source renders its display form with a 0x0 size; what a
    /// wrong-typed slot means is this implementation's choice, not the
    /// compositor's.
    pub fn chip(&self) -> String {
        let label = match &self.source {
            Some(value) => value.to_string(),
            None => "?".to_string(),
        };
        let chip = format!("[{} {}x{}]", label, self.width, self.height);
        if self.ansi {
            format!("{ANSI_REVERSE}{chip}{ANSI_RESET}")
        } else {
            chip
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl ImageElement for TermImage {
    fn set_source(&mut self, source: &Value) {
        self.source = Some(source.clone());
    }

    fn resize_to_content(&mut self) {
        let size = self
            .source
            .as_ref()
            .and_then(Value::as_image)
            .map(|image| (image.width, image.height))
            .unwrap_or((0, 0));
        self.width = size.0;
        self.height = size.1;
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Factory for terminal elements.
///
/// # Examples
///
/// ```
/// use richline::compositor::Compositor;
/// use richline::terminal::{compose_line, TermFactory};
/// use richline::value::Value;
///
/// let mut compositor = Compositor::new(TermFactory::new());
/// compositor.format("hp: {0:N0}", &[Value::from(1250i64)]).unwrap();
/// assert_eq!(compose_line(&compositor), "hp: 1,250");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFactory {
    ansi: bool,
}

impl TermFactory {
    /// Plain factory: chips render without escape sequences.
    pub fn new() -> Self {
        Self { ansi: false }
    }

    /// Decorate image chips with ANSI reverse video.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

impl ElementFactory for TermFactory {
    type Text = TermText;
    type Image = TermImage;

    fn create_text(&mut self) -> TermText {
        TermText::default()
    }

    fn create_image(&mut self) -> TermImage {
        TermImage {
            ansi: self.ansi,
            ..TermImage::default()
        }
    }
}

/// Concatenate the active elements of the last render in placement order.
pub fn compose_line(compositor: &Compositor<TermFactory>) -> String {
    let mut pieces: Vec<(usize, String)> = Vec::new();
    for text in compositor.text_pool().iter().filter(|t| t.is_active()) {
        pieces.push((text.order(), text.text().to_string()));
    }
    for image in compositor.image_pool().iter().filter(|i| i.is_active()) {
        pieces.push((image.order(), image.chip()));
    }
    pieces.sort_by_key(|(order, _)| *order);
    pieces.into_iter().map(|(_, piece)| piece).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ImageRef;

    fn demo_args() -> Vec<Value> {
        vec![
            Value::from("simon"),
            Value::from("rocket"),
            Value::from(ImageRef::new("boom", 32, 32)),
        ]
    }

    #[test]
    fn test_compose_line_interleaves_in_order() {
        let mut compositor = Compositor::new(TermFactory::new());
        compositor
            .format("{0} used {1} {2:image} on you", &demo_args())
            .unwrap();
        assert_eq!(
            compose_line(&compositor),
            "simon used rocket [boom 32x32] on you"
        );
    }

    #[test]
    fn test_chip_after_resize() {
        let mut image = TermImage::default();
        image.set_source(&Value::from(ImageRef::new("skull", 8, 16)));
        image.resize_to_content();
        assert_eq!(image.chip(), "[skull 8x16]");
        assert_eq!(image.size(), (8, 16));
    }

    #[test]
    fn test_chip_for_wrong_typed_source() {
        let mut image = TermImage::default();
        image.set_source(&Value::from("not an image"));
        image.resize_to_content();
        assert_eq!(image.chip(), "[not an image 0x0]");
    }

    #[test]
    fn test_ansi_chip_is_decorated() {
        let mut factory = TermFactory::new().with_ansi(true);
        let mut image = factory.create_image();
        image.set_source(&Value::from(ImageRef::new("boom", 4, 4)));
        image.resize_to_content();
        assert_eq!(image.chip(), "\x1b[7m[boom 4x4]\x1b[0m");
    }

    #[test]
    fn test_compose_line_skips_inactive_surplus() {
        let mut compositor = Compositor::new(TermFactory::new());
        compositor
            .format("{0} used {1} {2:image} on you", &demo_args())
            .unwrap();
        compositor.format("{0} fell", &demo_args()).unwrap();
        assert_eq!(compose_line(&compositor), "simon fell");
    }
}
