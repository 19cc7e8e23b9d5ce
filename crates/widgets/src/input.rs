use glamour::Point2;
use glamour::Rect;
use glamour::Size2;
use glamour::Unit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixels;

impl Unit for Pixels {
    type Scalar = f32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MouseButtonState {
    pub is_left_down: bool,
}

/// One frame of polled input, as reported by the owning loop.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub pointer: Point2<Pixels>,
    pub mouse_state: MouseButtonState,
}

impl InputState {
    pub fn new(x: f32, y: f32, is_left_down: bool) -> Self {
        Self {
            pointer: Point2::new(x, y),
            mouse_state: MouseButtonState { is_left_down },
        }
    }
}

/// Builds a placement rectangle from its top-left corner and extent.
#[must_use]
pub fn placement(x: f32, y: f32, width: f32, height: f32) -> Rect<Pixels> {
    Rect::new(Point2::new(x, y), Size2::new(width, height))
}

/// Half-open containment: the left and top edges are inside, the right and
/// bottom edges are not.
#[must_use]
pub fn hit_test(rect: &Rect<Pixels>, point: Point2<Pixels>) -> bool {
    let min = rect.origin;
    let size = rect.size;

    point.x >= min.x
        && point.x < min.x + size.width
        && point.y >= min.y
        && point.y < min.y + size.height
}
