use crate::RenderedText;
use crate::color::Color;
use crate::texture::Texture;

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub point: [f32; 2],
    pub size: [f32; 2],
    pub color: Color,

    pub color_texture: Option<Texture>,
    /// When set, only the border of the rectangle is painted, this many
    /// pixels thick and inset from the edge.
    pub stroke_width: Option<f32>,
}

impl Primitive {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            point: [x, y],
            size: [width, height],
            color,
            color_texture: None,
            stroke_width: None,
        }
    }

    #[must_use]
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.color_texture = Some(texture);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn is_outline(&self) -> bool {
        self.stroke_width.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextPrimitive {
    pub text: RenderedText,
    pub point: [f32; 2],
    /// Surface alpha applied to the whole run, background included.
    pub alpha: u8,
}

impl TextPrimitive {
    pub fn new(text: RenderedText, x: f32, y: f32) -> Self {
        Self {
            text,
            point: [x, y],
            alpha: u8::MAX,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Primitive(Primitive),
    Text(TextPrimitive),
}

/// A recorded frame of drawing.
///
/// Commands are kept in submission order, which is also their paint order;
/// rasterizing them is the job of whatever backend consumes the canvas.
#[derive(Debug, Default)]
pub struct Canvas {
    storage: CanvasStorage,
}

impl Canvas {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            storage: CanvasStorage {
                size: [width, height],
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn size(&self) -> [f32; 2] {
        self.storage.size
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.storage.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.commands.is_empty()
    }

    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.storage.clear_color
    }

    pub fn clear(&mut self, clear_color: impl Into<Option<Color>>) {
        self.storage.clear_color = clear_color.into();
    }

    /// Drops everything recorded so far, ready for the next frame.
    pub fn reset(&mut self) {
        self.storage.clear_color = None;
        self.storage.commands.clear();
    }

    pub fn draw(&mut self, primitive: Primitive) {
        self.storage.commands.push(DrawCommand::Primitive(primitive));
    }

    pub fn draw_text(&mut self, text: TextPrimitive) {
        self.storage.commands.push(DrawCommand::Text(text));
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.storage.commands.iter().filter_map(|command| match command {
            DrawCommand::Primitive(primitive) => Some(primitive),
            DrawCommand::Text(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.storage.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            DrawCommand::Primitive(_) => None,
        })
    }
}

#[derive(Debug, Default)]
struct CanvasStorage {
    size: [f32; 2],
    clear_color: Option<Color>,
    commands: Vec<DrawCommand>,
}
