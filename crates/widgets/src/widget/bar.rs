use glamour::Rect;
use graphics::Canvas;
use graphics::Color;

use crate::input::Pixels;
use crate::input::placement;

use super::Outline;
use super::Renderable;
use super::fill;

/// A horizontal gauge (health, progress, and so on).
///
/// The bar is `value * scale` pixels wide at construction and that width is
/// its capacity. Later updates take logical values in the same units and are
/// scaled the same way, then clamped into `[0, capacity]`.
#[derive(Debug)]
pub struct Bar {
    under: Rect<Pixels>,
    fill: Rect<Pixels>,
    scale: f32,

    fill_color: Color,
    under_color: Color,
    outline: Option<Outline>,
}

impl Bar {
    pub fn new(x: f32, y: f32, value: f32, scale: f32, height: f32) -> Self {
        let capacity = (value * scale).max(0.0);

        Self {
            under: placement(x, y, capacity, height),
            fill: placement(x, y, capacity, height),
            scale,
            fill_color: Color::rgb8(57, 255, 60),
            under_color: Color::RED,
            outline: Some(Outline::new(Color::BLACK, 1.0)),
        }
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    #[must_use]
    pub fn with_under_color(mut self, color: Color) -> Self {
        self.under_color = color;
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

    pub fn capacity(&self) -> f32 {
        self.under.size.width
    }

    pub fn fill_width(&self) -> f32 {
        self.fill.size.width
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the filled amount from a logical value. Values below zero empty
    /// the bar and values past the construction value saturate at capacity.
    pub fn update(&mut self, value: f32) {
        self.set_fill_width(value * self.scale);
    }

    /// Sets the filled width directly, in pixels, clamped to `[0, capacity]`.
    pub fn set_fill_width(&mut self, width: f32) {
        self.fill.size.width = width.max(0.0).min(self.capacity());
    }
}

impl Renderable for Bar {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw(fill(&self.under, self.under_color));
        canvas.draw(fill(&self.fill, self.fill_color));

        if let Some(outline) = &self.outline {
            outline.draw(canvas, &self.under);
        }
    }
}
