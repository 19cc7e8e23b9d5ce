use glamour::Point2;
use graphics::Canvas;

use crate::input::InputState;
use crate::input::Pixels;
use crate::input::hit_test;

use super::Clickable;
use super::Hoverable;
use super::Renderable;

/// Controls when a click is registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Click fires as the button goes down over the widget.
    #[default]
    OnPress,
    /// Click fires as the button is released over the widget, provided the
    /// press also started over it.
    OnRelease,
}

/// Wraps a [`Clickable`] so that it reacts once per click instead of once
/// per frame.
///
/// Feed it every frame's [`InputState`]; it remembers whether the left
/// button was down last frame and only forwards to
/// [`Clickable::check_input`] on the edge selected by [`ClickBehavior`].
#[derive(Debug)]
pub struct PressEdge<W> {
    widget: W,
    behavior: ClickBehavior,

    was_down: bool,
    pressed_inside: bool,
}

impl<W: Clickable> PressEdge<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            behavior: ClickBehavior::default(),
            was_down: false,
            pressed_inside: false,
        }
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: ClickBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Returns true if the wrapped widget was activated this frame.
    pub fn update(&mut self, input: &InputState) -> bool {
        let is_down = input.mouse_state.is_left_down;
        let is_hovered = hit_test(&self.widget.placement(), input.pointer);

        let just_pressed = is_down && !self.was_down;
        let just_released = !is_down && self.was_down;

        if just_pressed {
            self.pressed_inside = is_hovered;
        }

        let is_clicked = match self.behavior {
            ClickBehavior::OnPress => just_pressed && is_hovered,
            ClickBehavior::OnRelease => just_released && self.pressed_inside && is_hovered,
        };

        if !is_down {
            self.pressed_inside = false;
        }
        self.was_down = is_down;

        is_clicked && self.widget.check_input(input.pointer)
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn into_inner(self) -> W {
        self.widget
    }
}

impl<W: Hoverable> Hoverable for PressEdge<W> {
    fn check_hovering(&mut self, pointer: Point2<Pixels>) {
        self.widget.check_hovering(pointer);
    }
}

impl<W: Renderable> Renderable for PressEdge<W> {
    fn render(&self, canvas: &mut Canvas) {
        self.widget.render(canvas);
    }
}
