use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::RenderedText;
use graphics::TextPrimitive;
use graphics::TextStyle;
use graphics::TextSystem;
use tracing::debug;

use crate::input::Pixels;
use crate::input::placement;

use super::Renderable;

/// Static text with an optional background, blitted at a fixed position.
#[derive(Debug)]
pub struct Label {
    placement: Rect<Pixels>,
    text: RenderedText,
    alpha: u8,
}

impl Label {
    pub fn new(
        text_system: &TextSystem,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
        color: Color,
        background: Option<Color>,
    ) -> Self {
        Self::from_rendered(text_system.render(text, style, color, background), x, y)
    }

    pub fn from_rendered(text: RenderedText, x: f32, y: f32) -> Self {
        let [width, height] = text.size();

        Self {
            placement: placement(x, y, width, height),
            text,
            alpha: u8::MAX,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn placement(&self) -> Rect<Pixels> {
        self.placement
    }

    pub fn text(&self) -> &RenderedText {
        &self.text
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Takes effect from the next `render`.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Replaces the contents, keeping the font, colors and background. The
    /// placement grows or shrinks to fit the new text.
    pub fn update_text(&mut self, text_system: &TextSystem, text: &str) {
        debug!(from = self.text.text(), to = text, "updating label text");

        self.text = text_system.rerender(&self.text, text);

        let [width, height] = self.text.size();
        self.placement = placement(self.placement.origin.x, self.placement.origin.y, width, height);
    }
}

impl Renderable for Label {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw_text(
            TextPrimitive::new(
                self.text.clone(),
                self.placement.origin.x,
                self.placement.origin.y,
            )
            .with_alpha(self.alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text_system: &TextSystem) -> Label {
        Label::new(
            text_system,
            12.0,
            16.0,
            "Score: 0",
            &TextStyle::new("Arial", 18.0).bold(true),
            Color::BLACK,
            Some(Color::WHITE),
        )
    }

    #[test]
    fn update_text_is_reflected_in_next_render() {
        let text_system = TextSystem::new();
        let mut label = label(&text_system);

        label.update_text(&text_system, "X");

        let mut canvas = Canvas::new(100.0, 100.0);
        label.render(&mut canvas);

        let blit = canvas.texts().next().unwrap();
        assert_eq!(blit.text.text(), "X");
        assert_eq!(blit.point, [12.0, 16.0]);
    }

    #[test]
    fn update_text_keeps_attributes() {
        let text_system = TextSystem::new();
        let mut label = label(&text_system);
        let before = label.text().clone();

        label.update_text(&text_system, "Score: 10");

        assert_eq!(label.text().style(), before.style());
        assert_eq!(label.text().color(), before.color());
        assert_eq!(label.text().background(), Some(Color::WHITE));
    }

    #[test]
    fn alpha_applies_at_render_time() {
        let text_system = TextSystem::new();
        let mut label = label(&text_system);

        let mut canvas = Canvas::new(100.0, 100.0);
        label.render(&mut canvas);
        label.set_alpha(64);
        label.render(&mut canvas);

        let alphas: Vec<_> = canvas.texts().map(|text| text.alpha).collect();
        assert_eq!(alphas, [255, 64]);
    }
}
