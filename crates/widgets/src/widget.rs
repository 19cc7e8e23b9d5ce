use glamour::Point2;
use glamour::Rect;
use graphics::Canvas;
use graphics::Color;
use graphics::Primitive;
use tracing::debug;
use tracing::trace;

use crate::input::Pixels;

pub use backdrop::Backdrop;
pub use bar::Bar;
pub use button::Button;
pub use check_box::CheckBox;
pub use icon::Icon;
pub use icon::OutlineWidth;
pub use image_button::ImageButton;
pub use label::Label;
pub use press_edge::ClickBehavior;
pub use press_edge::PressEdge;

mod backdrop;
mod bar;
mod button;
mod check_box;
mod icon;
mod image_button;
mod label;
mod press_edge;

/// Anything that paints itself onto a canvas once per frame.
pub trait Renderable {
    fn render(&self, canvas: &mut Canvas);
}

/// A widget with a hit-region that reacts to the pointer.
///
/// `check_input` has no notion of a press edge. Calling it every frame while
/// the pointer is held inside fires every frame; wrap the widget in a
/// [`PressEdge`] to react once per press instead.
pub trait Clickable {
    fn placement(&self) -> Rect<Pixels>;

    /// Returns true if the pointer was inside the hit-region.
    fn check_input(&mut self, pointer: Point2<Pixels>) -> bool;
}

pub trait Hoverable {
    fn check_hovering(&mut self, pointer: Point2<Pixels>);
}

/// A zero-argument callback bound to an interactive widget.
pub struct Action {
    callback: Box<dyn FnMut()>,
}

impl Action {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// The action used when nothing has been bound. It only reports the
    /// press through `tracing`.
    pub fn unbound(widget: &'static str) -> Self {
        Self::new(move || debug!(target: "widgets::action", widget, "no action bound"))
    }

    pub fn invoke(&mut self) {
        trace!(target: "widgets::action", "invoking action");
        (self.callback)();
    }
}

impl<F: FnMut() + 'static> From<F> for Action {
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

/// A border drawn on top of a widget's fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub width: f32,
}

impl Outline {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub(crate) fn draw(&self, canvas: &mut Canvas, rect: &Rect<Pixels>) {
        canvas.draw(stroke(rect, self.color, self.width));
    }
}

pub(crate) fn fill(rect: &Rect<Pixels>, color: Color) -> Primitive {
    Primitive::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
        color,
    )
}

pub(crate) fn stroke(rect: &Rect<Pixels>, color: Color, width: f32) -> Primitive {
    fill(rect, color).with_stroke(width)
}
