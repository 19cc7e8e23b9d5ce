use workspace_hack as _;

pub use crate::color::Color;
pub use crate::draw::Canvas;
pub use crate::draw::DrawCommand;
pub use crate::draw::Primitive;
pub use crate::draw::TextPrimitive;
pub use crate::text::RenderedText;
pub use crate::text::TextSystem;
pub use crate::text_style::*;
pub use crate::texture::Texture;
pub use crate::texture::TextureId;
pub use crate::texture::TextureLoadError;

pub use image::RgbaImage;

mod color;
mod draw;
mod text;
mod text_style;
mod texture;
