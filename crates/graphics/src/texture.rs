use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use image::ImageReader;
use image::RgbaImage;
use image::imageops::FilterType;
use tracing::debug;
use tracing::instrument;
use tracing::warn;

static NEXT_TEXTURE_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    fn next() -> Self {
        Self(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub enum TextureLoadError {
    Decoding(Box<dyn std::error::Error>),
    Io(std::io::Error),
}

impl std::fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureLoadError::Decoding(err) => write!(f, "failed to decode image: {err}"),
            TextureLoadError::Io(err) => write!(f, "failed to read image: {err}"),
        }
    }
}

impl std::error::Error for TextureLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureLoadError::Decoding(err) => Some(err.as_ref()),
            TextureLoadError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TextureLoadError {
    fn from(err: std::io::Error) -> Self {
        TextureLoadError::Io(err)
    }
}

impl From<image::ImageError> for TextureLoadError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => TextureLoadError::Io(err),
            other => TextureLoadError::Decoding(Box::new(other)),
        }
    }
}

/// A decoded RGBA image shared by reference count.
///
/// Pixels are released when the last clone is dropped, so a widget holding a
/// texture keeps it alive for exactly as long as the widget exists.
#[derive(Clone)]
pub struct Texture {
    id: TextureId,
    pixels: Rc<RgbaImage>,
}

impl Texture {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureLoadError> {
        let pixels = ImageReader::open(path.as_ref())?
            .with_guessed_format()?
            .decode()?
            .into_rgba8();

        let texture = Self::from_image(pixels);
        debug!(id = ?texture.id, size = ?texture.size(), "loaded texture");
        Ok(texture)
    }

    #[must_use]
    pub fn from_image(pixels: RgbaImage) -> Self {
        Self {
            id: TextureId::next(),
            pixels: Rc::new(pixels),
        }
    }

    /// Returns a new texture resampled to `width` x `height`.
    ///
    /// Dimensions are clamped to at least one pixel.
    #[must_use]
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            warn!(width, height, "clamping zero-sized texture scale to 1px");
        }

        let width = width.max(1);
        let height = height.max(1);

        if [width, height] == self.size() {
            return self.clone();
        }

        Self::from_image(image::imageops::resize(
            &*self.pixels,
            width,
            height,
            FilterType::Triangle,
        ))
    }

    #[must_use]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[must_use]
    pub fn size(&self) -> [u32; 2] {
        [self.pixels.width(), self.pixels.height()]
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("size", &self.size())
            .finish()
    }
}
