use std::path::Path;

use glamour::Point2;
use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::RenderedText;
use graphics::TextPrimitive;
use graphics::Texture;
use graphics::TextureLoadError;

use crate::input::Pixels;
use crate::input::hit_test;
use crate::input::placement;

use super::Action;
use super::Clickable;
use super::Hoverable;
use super::Outline;
use super::Renderable;
use super::fill;

/// A button whose face is an image. The hit-region takes the image's
/// dimensions and hovering swaps the tint the image is drawn with.
#[derive(Debug)]
pub struct ImageButton {
    placement: Rect<Pixels>,
    texture: Texture,

    tint: Color,
    default_tint: Color,
    hover_tint: Color,
    outline: Option<Outline>,

    label: Option<RenderedText>,
    action: Action,
}

impl ImageButton {
    pub fn new(texture: Texture, x: f32, y: f32) -> Self {
        let [width, height] = texture.size();

        Self {
            placement: placement(x, y, width as f32, height as f32),
            texture,
            tint: Color::WHITE,
            default_tint: Color::WHITE,
            hover_tint: Color::rgb8(124, 124, 124),
            outline: Some(Outline::new(Color::BLACK, 1.0)),
            label: None,
            action: Action::unbound("ImageButton"),
        }
    }

    pub fn load(path: impl AsRef<Path>, x: f32, y: f32) -> Result<Self, TextureLoadError> {
        Ok(Self::new(Texture::load(path)?, x, y))
    }

    #[must_use]
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.default_tint = tint;
        self.tint = tint;
        self
    }

    #[must_use]
    pub fn with_hover_tint(mut self, tint: Color) -> Self {
        self.hover_tint = tint;
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

    #[must_use]
    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = action.into();
        self
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}

impl Clickable for ImageButton {
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

impl Hoverable for ImageButton {
    fn check_hovering(&mut self, pointer: Point2<Pixels>) {
        self.tint = if hit_test(&self.placement, pointer) {
            self.hover_tint
        } else {
            self.default_tint
        };
    }
}

impl Renderable for ImageButton {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw(fill(&self.placement, self.tint).with_texture(self.texture.clone()));

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

#[cfg(test)]
mod tests {
    use super::super::test_support::counter;
    use super::super::test_support::solid_texture;
    use super::super::test_support::write_png;
    use super::*;

    #[test]
    fn placement_follows_image_size() {
        let button = ImageButton::new(solid_texture(24, 16), 5.0, 6.0);
        let rect = button.placement();

        assert_eq!((rect.origin.x, rect.origin.y), (5.0, 6.0));
        assert_eq!((rect.size.width, rect.size.height), (24.0, 16.0));
    }

    #[test]
    fn hover_and_click() {
        let (action, count) = counter();
        let mut button = ImageButton::new(solid_texture(10, 10), 0.0, 0.0)
            .with_hover_tint(Color::RED)
            .with_action(action);

        button.check_hovering(Point2::new(3.0, 3.0));
        assert_eq!(button.tint(), Color::RED);
        button.check_hovering(Point2::new(30.0, 3.0));
        assert_eq!(button.tint(), Color::WHITE);

        button.check_input(Point2::new(3.0, 3.0));
        button.check_input(Point2::new(10.0, 10.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn renders_textured_face() {
        let texture = solid_texture(8, 8);
        let button = ImageButton::new(texture.clone(), 0.0, 0.0).without_outline();

        let mut canvas = Canvas::new(8.0, 8.0);
        button.render(&mut canvas);

        let face = canvas.primitives().next().unwrap();
        assert_eq!(face.color_texture.as_ref(), Some(&texture));
        assert_eq!(face.color, Color::WHITE);
    }

    #[test]
    fn load_reads_dimensions_from_disk() {
        let path = write_png("image-button.png", 12, 7);
        let button = ImageButton::load(&path, 0.0, 0.0).unwrap();
        assert_eq!(button.texture().size(), [12, 7]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_image_is_fatal() {
        let result = ImageButton::load("/nonexistent/button.png", 0.0, 0.0);
        assert!(matches!(result, Err(TextureLoadError::Io(_))));
    }
}
