use std::path::Path;

use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::Texture;
use graphics::TextureLoadError;

use crate::input::Pixels;
use crate::input::placement;

use super::Renderable;
use super::fill;

#[derive(Debug)]
enum Fill {
    Image(Texture),
    Tint(Color),
}

/// A non-interactive layer drawn behind (or over) a screen: either a scaled
/// image or a translucent box.
#[derive(Debug)]
pub struct Backdrop {
    placement: Rect<Pixels>,
    fill: Fill,
}

impl Backdrop {
    /// An image stretched over the region.
    pub fn image(
        path: impl AsRef<Path>,
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, TextureLoadError> {
        Ok(Self::from_texture(&Texture::load(path)?, x, y, width, height))
    }

    pub fn from_texture(texture: &Texture, x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            placement: placement(x, y, width as f32, height as f32),
            fill: Fill::Image(texture.scaled(width, height)),
        }
    }

    /// A solid box of `color` blended at `alpha`.
    pub fn solid(x: f32, y: f32, width: f32, height: f32, color: Color, alpha: u8) -> Self {
        Self {
            placement: placement(x, y, width, height),
            fill: Fill::Tint(color.with_alpha8(alpha)),
        }
    }

    pub fn placement(&self) -> Rect<Pixels> {
        self.placement
    }

    pub fn is_image(&self) -> bool {
        matches!(self.fill, Fill::Image(_))
    }
}

impl Renderable for Backdrop {
    fn render(&self, canvas: &mut Canvas) {
        match &self.fill {
            Fill::Image(texture) => {
                canvas.draw(fill(&self.placement, Color::WHITE).with_texture(texture.clone()));
            }
            Fill::Tint(color) => canvas.draw(fill(&self.placement, *color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::solid_texture;
    use super::super::test_support::write_png;
    use super::*;

    #[test]
    fn solid_backdrop_is_translucent_box() {
        let backdrop = Backdrop::solid(0.0, 0.0, 640.0, 480.0, Color::BLACK, 128);
        assert!(!backdrop.is_image());

        let mut canvas = Canvas::new(640.0, 480.0);
        backdrop.render(&mut canvas);

        let primitive = canvas.primitives().next().unwrap();
        assert!(primitive.color_texture.is_none());
        assert!((primitive.color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(primitive.size, [640.0, 480.0]);
    }

    #[test]
    fn image_backdrop_is_scaled_blit() {
        let backdrop = Backdrop::from_texture(&solid_texture(4, 3), 0.0, 0.0, 64, 48);
        assert!(backdrop.is_image());

        let mut canvas = Canvas::new(64.0, 48.0);
        backdrop.render(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 1);

        let primitive = canvas.primitives().next().unwrap();
        assert_eq!(primitive.color_texture.as_ref().map(Texture::size), Some([64, 48]));
    }

    #[test]
    fn zero_sized_image_backdrop_has_empty_region() {
        let wide = Backdrop::from_texture(&solid_texture(4, 3), 0.0, 0.0, 0, 48);
        let rect = wide.placement();
        assert_eq!((rect.size.width, rect.size.height), (0.0, 48.0));
        assert!(!crate::input::hit_test(&rect, glamour::Point2::new(0.0, 10.0)));

        let tall = Backdrop::from_texture(&solid_texture(4, 3), 0.0, 0.0, 64, 0);
        let rect = tall.placement();
        assert_eq!((rect.size.width, rect.size.height), (64.0, 0.0));
        assert!(!crate::input::hit_test(&rect, glamour::Point2::new(10.0, 0.0)));
    }

    #[test]
    fn image_backdrop_loads_from_disk() {
        let path = write_png("backdrop.png", 5, 5);
        let backdrop = Backdrop::image(&path, 0.0, 0.0, 20, 10).unwrap();

        let rect = backdrop.placement();
        assert_eq!((rect.size.width, rect.size.height), (20.0, 10.0));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_image_is_fatal() {
        assert!(Backdrop::image("/nonexistent/backdrop.png", 0.0, 0.0, 10, 10).is_err());
    }
}
