use std::path::Path;

use glamour::Point2;
use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::Texture;
use graphics::TextureLoadError;

use crate::input::Pixels;
use crate::input::hit_test;
use crate::input::placement;

use super::Action;
use super::Clickable;
use super::Renderable;
use super::fill;
use super::stroke;

/// How thick an [`Icon`]'s outline is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutlineWidth {
    #[default]
    Fine,
    Fixed(f32),
    /// `max(width % 10, 1)` pixels. Only useful for matching older scenes
    /// pixel for pixel.
    WidthModTen,
}

impl OutlineWidth {
    fn resolve(self, width: f32) -> f32 {
        match self {
            OutlineWidth::Fine => 1.0,
            OutlineWidth::Fixed(width) => width,
            OutlineWidth::WidthModTen => ((width as u32) % 10).max(1) as f32,
        }
    }
}

/// An image scaled into a fixed box that acts as a button. Never changes
/// color.
#[derive(Debug)]
pub struct Icon {
    placement: Rect<Pixels>,
    texture: Texture,

    outline: Option<(Color, OutlineWidth)>,
    action: Action,
}

impl Icon {
    pub fn new(texture: &Texture, x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            placement: placement(x, y, width as f32, height as f32),
            texture: texture.scaled(width, height),
            outline: Some((Color::BLACK, OutlineWidth::default())),
            action: Action::unbound("Icon"),
        }
    }

    pub fn load(
        path: impl AsRef<Path>,
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, TextureLoadError> {
        Ok(Self::new(&Texture::load(path)?, x, y, width, height))
    }

    #[must_use]
    pub fn with_outline(mut self, color: Color, width: OutlineWidth) -> Self {
        self.outline = Some((color, width));
        self
    }

    #[must_use]
    pub fn without_outline(mut self) -> Self {
        self.outline = None;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = action.into();
        self
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn outline_width(&self) -> Option<f32> {
        self.outline
            .map(|(_, width)| width.resolve(self.placement.size.width))
    }
}

impl Clickable for Icon {
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

impl Renderable for Icon {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw(fill(&self.placement, Color::WHITE).with_texture(self.texture.clone()));

        if let Some((color, width)) = self.outline {
            let width = width.resolve(self.placement.size.width);
            canvas.draw(stroke(&self.placement, color, width));
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
    fn load_scales_from_disk() {
        let path = write_png("icon.png", 3, 9);
        let icon = Icon::load(&path, 0.0, 0.0, 18, 18).unwrap();
        assert_eq!(icon.texture().size(), [18, 18]);
        std::fs::remove_file(path).ok();

        assert!(Icon::load("/nonexistent/icon.png", 0.0, 0.0, 18, 18).is_err());
    }

    #[test]
    fn image_is_scaled_to_box() {
        let icon = Icon::new(&solid_texture(4, 4), 0.0, 0.0, 32, 20);

        assert_eq!(icon.texture().size(), [32, 20]);
        let rect = icon.placement();
        assert_eq!((rect.size.width, rect.size.height), (32.0, 20.0));
    }

    #[test]
    fn zero_sized_box_contains_nothing() {
        let (action, count) = counter();
        let mut flat = Icon::new(&solid_texture(4, 4), 10.0, 10.0, 0, 16).with_action(action);
        assert!(!flat.check_input(Point2::new(10.0, 12.0)));

        let (action, short_count) = counter();
        let mut short = Icon::new(&solid_texture(4, 4), 10.0, 10.0, 16, 0).with_action(action);
        assert!(!short.check_input(Point2::new(12.0, 10.0)));

        assert_eq!(count.get(), 0);
        assert_eq!(short_count.get(), 0);
        assert_eq!(flat.texture().size(), [1, 16]);
    }

    #[test]
    fn fires_once_per_call_inside() {
        let (action, count) = counter();
        let mut icon = Icon::new(&solid_texture(4, 4), 10.0, 10.0, 16, 16).with_action(action);

        icon.check_input(Point2::new(12.0, 12.0));
        icon.check_input(Point2::new(12.0, 12.0));
        icon.check_input(Point2::new(0.0, 0.0));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn outline_widths() {
        let texture = solid_texture(2, 2);

        assert_eq!(Icon::new(&texture, 0.0, 0.0, 37, 8).outline_width(), Some(1.0));

        let legacy = |width| {
            Icon::new(&texture, 0.0, 0.0, width, 8)
                .with_outline(Color::BLACK, OutlineWidth::WidthModTen)
                .outline_width()
        };
        assert_eq!(legacy(37), Some(7.0));
        assert_eq!(legacy(40), Some(1.0));
        assert_eq!(legacy(64), Some(4.0));

        let fixed = Icon::new(&texture, 0.0, 0.0, 37, 8)
            .with_outline(Color::BLACK, OutlineWidth::Fixed(3.0));
        assert_eq!(fixed.outline_width(), Some(3.0));

        assert_eq!(
            Icon::new(&texture, 0.0, 0.0, 37, 8)
                .without_outline()
                .outline_width(),
            None
        );
    }

    #[test]
    fn renders_image_then_outline() {
        let icon = Icon::new(&solid_texture(4, 4), 0.0, 0.0, 8, 8);

        let mut canvas = Canvas::new(8.0, 8.0);
        icon.render(&mut canvas);

        let primitives: Vec<_> = canvas.primitives().collect();
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[0].color_texture.as_ref(), Some(icon.texture()));
        assert!(primitives[1].is_outline());
    }
}
