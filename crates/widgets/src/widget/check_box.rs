use glamour::Point2;
use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use tracing::debug;

use crate::input::Pixels;
use crate::input::hit_test;
use crate::input::placement;

use super::Clickable;
use super::Outline;
use super::Renderable;
use super::fill;

/// A two-state toggle.
///
/// Every press inside flips the state, so a pointer held down across several
/// frames toggles once per frame. Gate calls on a press edge (see
/// [`super::PressEdge`]) to get one toggle per click.
#[derive(Debug)]
pub struct CheckBox {
    placement: Rect<Pixels>,

    marked: bool,
    color: Color,
    default_color: Color,
    marked_color: Color,
    outline: Option<Outline>,
}

impl CheckBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let default_color = Color::WHITE;

        Self {
            placement: placement(x, y, width, height),
            marked: false,
            color: default_color,
            default_color,
            marked_color: Color::rgb8(255, 0, 255),
            outline: Some(Outline::new(Color::BLACK, 5.0)),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_marked_color(mut self, color: Color) -> Self {
        self.marked_color = color;
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

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Toggles the box if `pointer` is inside it.
    ///
    /// Marking paints the default color and unmarking paints the marked
    /// color; existing scenes are styled around this pairing.
    pub fn check_press(&mut self, pointer: Point2<Pixels>) -> bool {
        if !hit_test(&self.placement, pointer) {
            return false;
        }

        if self.marked {
            self.color = self.marked_color;
            self.marked = false;
        } else {
            self.color = self.default_color;
            self.marked = true;
        }

        debug!(marked = self.marked, "check box toggled");
        true
    }
}

impl Clickable for CheckBox {
    fn placement(&self) -> Rect<Pixels> {
        self.placement
    }

    fn check_input(&mut self, pointer: Point2<Pixels>) -> bool {
        self.check_press(pointer)
    }
}

impl Renderable for CheckBox {
    fn render(&self, canvas: &mut Canvas) {
        canvas.draw(fill(&self.placement, self.color));

        if let Some(outline) = &self.outline {
            outline.draw(canvas, &self.placement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside() -> Point2<Pixels> {
        Point2::new(5.0, 5.0)
    }

    fn check_box() -> CheckBox {
        CheckBox::new(0.0, 0.0, 20.0, 20.0)
            .with_color(Color::WHITE)
            .with_marked_color(Color::RED)
    }

    #[test]
    fn press_toggles_and_swaps_color() {
        let mut check_box = check_box();
        assert!(!check_box.is_marked());

        assert!(check_box.check_press(inside()));
        assert!(check_box.is_marked());
        assert_eq!(check_box.color(), Color::WHITE);

        assert!(check_box.check_press(inside()));
        assert!(!check_box.is_marked());
        assert_eq!(check_box.color(), Color::RED);
    }

    #[test]
    fn held_press_retoggles_every_call() {
        let mut check_box = check_box();

        check_box.check_press(inside());
        check_box.check_press(inside());
        assert!(!check_box.is_marked());

        check_box.check_press(inside());
        assert!(check_box.is_marked());
    }

    #[test]
    fn press_outside_changes_nothing() {
        let mut check_box = check_box();

        assert!(!check_box.check_press(Point2::new(20.0, 5.0)));
        assert!(!check_box.is_marked());
        assert_eq!(check_box.color(), Color::WHITE);
    }

    #[test]
    fn renders_with_thick_outline() {
        let check_box = check_box();

        let mut canvas = Canvas::new(20.0, 20.0);
        check_box.render(&mut canvas);

        let primitives: Vec<_> = canvas.primitives().collect();
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[1].stroke_width, Some(5.0));
    }
}
