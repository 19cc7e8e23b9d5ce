use std::cell::RefCell;
use std::rc::Rc;

use parley::FontContext;
use parley::Layout;
use parley::LayoutContext;
use tracing::trace;

use crate::Color;
use crate::TextStyle;

/// Text that has been shaped and measured, ready to be blitted.
///
/// The style and colors it was produced with are kept so that it can be
/// re-rendered with different contents later.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedText {
    text: Rc<str>,
    style: TextStyle,
    color: Color,
    background: Option<Color>,
    size: [f32; 2],
}

impl RenderedText {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    #[must_use]
    pub fn size(&self) -> [f32; 2] {
        self.size
    }
}

#[derive(Clone, Default)]
pub struct TextSystem {
    inner: Rc<RefCell<TextSystemInner>>,
}

impl TextSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes `text` with `style` and returns it along with its extent.
    pub fn render(
        &self,
        text: &str,
        style: &TextStyle,
        color: Color,
        background: Option<Color>,
    ) -> RenderedText {
        let size = self.inner.borrow_mut().measure(text, style, color);
        trace!(text, ?size, "rendered text");

        RenderedText {
            text: Rc::from(text),
            style: style.clone(),
            color,
            background,
            size,
        }
    }

    /// Renders `text` with the same style and colors as `previous`.
    pub fn rerender(&self, previous: &RenderedText, text: &str) -> RenderedText {
        self.render(text, &previous.style, previous.color, previous.background)
    }
}

struct TextSystemInner {
    fonts: FontContext,
    layouts: LayoutContext<Color>,

    quick_layout: Layout<Color>,
}

impl Default for TextSystemInner {
    fn default() -> Self {
        Self {
            fonts: FontContext::new(),
            layouts: LayoutContext::new(),
            quick_layout: Layout::new(),
        }
    }
}

impl TextSystemInner {
    fn measure(&mut self, text: &str, style: &TextStyle, color: Color) -> [f32; 2] {
        let mut compute = self
            .layouts
            .ranged_builder(&mut self.fonts, text, 1.0, true);

        style.as_defaults(&mut compute, color);
        compute.build_into(&mut self.quick_layout, text);

        self.quick_layout.break_all_lines(None);

        [self.quick_layout.width(), self.quick_layout.height()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rerender_keeps_attributes() {
        let system = TextSystem::new();
        let style = TextStyle::new("Arial", 14.0).italic(true);

        let first = system.render("first", &style, Color::RED, Some(Color::BLACK));
        let second = system.rerender(&first, "second");

        assert_eq!(first.text(), "first");
        assert_eq!(second.text(), "second");
        assert_eq!(second.style(), &style);
        assert_eq!(second.color(), Color::RED);
        assert_eq!(second.background(), Some(Color::BLACK));
    }

    #[test]
    fn extent_is_never_negative() {
        let system = TextSystem::new();
        let text = system.render("measure me", &TextStyle::default(), Color::BLACK, None);

        let [width, height] = text.size();
        assert!(width >= 0.0);
        assert!(height >= 0.0);
    }
}
