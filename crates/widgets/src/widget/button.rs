use glamour::Point2;
use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::RenderedText;
use graphics::TextPrimitive;
use graphics::TextStyle;
use graphics::TextSystem;

use crate::input::Pixels;
use crate::input::hit_test;
use crate::input::placement;

use super::Action;
use super::Clickable;
use super::Hoverable;
use super::Outline;
use super::Renderable;
use super::fill;

/// A flat rectangular button with an optional text label.
#[derive(Debug)]
pub struct Button {
    placement: Rect<Pixels>,

    color: Color,
    default_color: Color,
    hover_color: Color,
    outline: Option<Outline>,

    label: Option<RenderedText>,
    action: Action,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let default_color = Color::WHITE;

        Self {
            placement: placement(x, y, width, height),
            color: default_color,
            default_color,
            hover_color: Color::rgb8(124, 124, 124),
            outline: Some(Outline::new(Color::BLACK, 1.0)),
            label: None,
            action: Action::unbound("Button"),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    #[must_use]
    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    #[must_use]
    pub fn without_outline(mut self) -> Self {
        self.outline = None;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: RenderedText) -> Self {
        self.label = Some(label);
        self
    }

    /// Shapes `text` and uses it as the label, drawn from the button's
    /// top-left corner.
    #[must_use]
    pub fn with_text(
        self,
        text_system: &TextSystem,
        text: &str,
        style: &TextStyle,
        color: Color,
    ) -> Self {
        let label = text_system.render(text, style, color, None);
        self.with_label(label)
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = action.into();
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> Option<&RenderedText> {
        self.label.as_ref()
    }
}

impl Clickable for Button {
    fn placement(&self) -> Rect<Pixels> {
        self.placement
    }

    fn check_input(&mut self, pointer: Point2<Pixels>) -> bool {
        let is_hit = hit_test(&self.placement, pointer);
        if is_hit {
            self.action.invoke();
        }
        is_hit
    }
}

impl Hoverable for Button {
    fn check_hovering(&mut self, pointer: Point2<Pixels>) {
        self.color = if hit_test(&self.placement, pointer) {
            self.hover_color
        } else {
            self.default_color
        };
    }
}

impl Renderable for Button {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw(fill(&self.placement, self.color));

        if let Some(outline) = &self.outline {
            outline.draw(canvas, &self.placement);
        }

        if let Some(label) = &self.label {
            canvas.draw_text(TextPrimitive::new(
                label.clone(),
                self.placement.origin.x,
                self.placement.origin.y,
            ));
        }
    }
}
