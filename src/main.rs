use tracing::Level;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use vellum::MenuScreen;
use vellum::graphics::Canvas;
use vellum::graphics::DrawCommand;
use vellum::graphics::TextSystem;
use vellum::widgets::InputState;

#[cfg(feature = "profile")]
#[derive(Default)]
struct TracyConfig(tracing_subscriber::fmt::format::DefaultFields);

#[cfg(feature = "profile")]
impl tracing_tracy::Config for TracyConfig {
    type Formatter = tracing_subscriber::fmt::format::DefaultFields;

    fn formatter(&self) -> &Self::Formatter {
        &self.0
    }

    fn stack_depth(&self, _: &tracing::metadata::Metadata<'_>) -> u16 {
        10
    }
}

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;

fn main() {
    color_backtrace::install();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().ok();
    let def_filter = env_filter.is_none().then(|| {
        tracing_subscriber::filter::Targets::new()
            .with_default(Level::DEBUG)
            .with_targets([("parley", Level::WARN), ("fontique", Level::WARN)])
    });

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(env_filter)
        .with(def_filter);

    #[cfg(feature = "profile")]
    let registry = registry.with(tracing_tracy::TracyLayer::new(TracyConfig::default()));

    registry.init();

    let text_system = TextSystem::new();
    let mut screen = MenuScreen::new(&text_system, WIDTH, HEIGHT);
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    // A scripted pointer: wander over the start button, click it while
    // holding for a few frames, then toggle sound.
    let script = [
        InputState::new(10.0, 10.0, false),
        InputState::new(320.0, 240.0, false),
        InputState::new(320.0, 240.0, true),
        InputState::new(320.0, 240.0, true),
        InputState::new(320.0, 240.0, true),
        InputState::new(320.0, 240.0, false),
        InputState::new(30.0, 440.0, true),
        InputState::new(30.0, 440.0, false),
    ];

    for (index, input) in script.iter().enumerate() {
        let progress = (index as f32 + 1.0) / script.len() as f32 * 100.0;
        screen.frame(&text_system, input, progress, &mut canvas);

        let texts = canvas
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Text(_)))
            .count();

        info!(
            frame = index,
            commands = canvas.commands().len(),
            texts,
            "frame recorded"
        );
    }

    info!(
        starts = screen.events().starts.get(),
        sound = screen.is_sound_on(),
        title = screen.title().text().text(),
        "done"
    );
}
