use std::cell::Cell;
use std::rc::Rc;

use graphics::Canvas;
use graphics::Color;
use graphics::RgbaImage;
use graphics::TextStyle;
use graphics::TextSystem;
use graphics::Texture;
use widgets::Backdrop;
use widgets::Bar;
use widgets::Button;
use widgets::CheckBox;
use widgets::Clickable;
use widgets::Hoverable;
use widgets::Icon;
use widgets::InputState;
use widgets::Label;
use widgets::PressEdge;
use widgets::Renderable;

/// Counters bumped by the menu's actions.
#[derive(Clone, Debug, Default)]
pub struct MenuEvents {
    pub starts: Rc<Cell<u32>>,
    pub quits: Rc<Cell<u32>>,
}

/// A small title screen that owns its widgets and drives them once per
/// frame: hover, then input, then render, back to front.
pub struct MenuScreen {
    backdrop: Backdrop,
    title: Label,
    start: PressEdge<Button>,
    quit: PressEdge<Icon>,
    sound: PressEdge<CheckBox>,
    loading: Bar,

    events: MenuEvents,
}

impl MenuScreen {
    pub fn new(text_system: &TextSystem, width: f32, height: f32) -> Self {
        let events = MenuEvents::default();

        let title_style = TextStyle::new("Arial", 32.0).bold(true);
        let button_style = TextStyle::default();

        let start = {
            let starts = events.starts.clone();
            Button::new(width / 2.0 - 60.0, height / 2.0 - 20.0, 120.0, 40.0)
                .with_color(Color::rgb8(40, 40, 60))
                .with_hover_color(Color::rgb8(70, 70, 110))
                .with_text(text_system, "Start", &button_style, Color::WHITE)
                .with_action(move || starts.set(starts.get() + 1))
        };

        let quit = {
            let quits = events.quits.clone();
            let glyph = Texture::from_image(RgbaImage::new(16, 16));
            Icon::new(&glyph, width - 40.0, 8.0, 32, 32)
                .with_action(move || quits.set(quits.get() + 1))
        };

        Self {
            backdrop: Backdrop::solid(0.0, 0.0, width, height, Color::BLACK, 160),
            title: Label::new(
                text_system,
                24.0,
                24.0,
                "Main Menu",
                &title_style,
                Color::WHITE,
                None,
            ),
            start: PressEdge::new(start),
            quit: PressEdge::new(quit),
            sound: PressEdge::new(CheckBox::new(24.0, height - 48.0, 24.0, 24.0)),
            loading: Bar::new(24.0, height - 16.0, 100.0, (width - 48.0) / 100.0, 8.0),
            events,
        }
    }

    pub fn events(&self) -> &MenuEvents {
        &self.events
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound.widget().is_marked()
    }

    pub fn start_button(&self) -> &Button {
        self.start.widget()
    }

    /// Runs one frame. `progress` is the loading percentage shown in the bar.
    pub fn frame(
        &mut self,
        text_system: &TextSystem,
        input: &InputState,
        progress: f32,
        canvas: &mut Canvas,
    ) {
        self.start.check_hovering(input.pointer);

        if self.start.update(input) {
            self.title.update_text(text_system, "Starting...");
        }
        self.quit.update(input);
        self.sound.update(input);

        self.loading.update(progress);

        canvas.reset();
        self.backdrop.render(canvas);
        self.title.render(canvas);
        self.start.render(canvas);
        self.quit.render(canvas);
        self.sound.render(canvas);
        self.loading.render(canvas);

        tracing::trace!(commands = canvas.commands().len(), "menu frame recorded");
    }

    pub fn title(&self) -> &Label {
        &self.title
    }

    pub fn quit_region(&self) -> glamour::Rect<widgets::Pixels> {
        self.quit.widget().placement()
    }
}
