use std::borrow::Cow;

use crate::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    /// A CSS-style family list, e.g. `"Arial, sans-serif"`.
    pub font_family: Cow<'static, str>,
}

impl TextStyle {
    /// A style using `family` at `font_size`, upright and regular weight.
    pub fn new(family: impl Into<Cow<'static, str>>, font_size: f32) -> Self {
        Self {
            font_size,
            font_family: family.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_weight = if bold {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        };
        self
    }

    #[must_use]
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_style = if italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        self
    }

    pub fn as_defaults(&self, builder: &mut parley::RangedBuilder<Color>, color: Color) {
        builder.push_default(parley::StyleProperty::Brush(color));
        builder.push_default(parley::StyleProperty::FontSize(self.font_size));
        builder.push_default(parley::StyleProperty::FontStyle(self.font_style.into()));
        builder.push_default(parley::StyleProperty::FontWeight(self.font_weight.into()));
        builder.push_default(parley::StyleProperty::FontStack(parley::FontStack::Source(
            self.font_family.clone(),
        )));
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            font_style: FontStyle::Normal,
            font_weight: FontWeight::NORMAL,
            font_family: Cow::Borrowed("Arial"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl From<FontStyle> for parley::FontStyle {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Normal => parley::FontStyle::Normal,
            FontStyle::Italic => parley::FontStyle::Italic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontWeight(pub(crate) f32);

impl FontWeight {
    pub const NORMAL: Self = FontWeight(400.0);
    pub const BOLD: Self = FontWeight(700.0);
}

impl From<FontWeight> for parley::FontWeight {
    fn from(value: FontWeight) -> Self {
        parley::FontWeight::new(value.0)
    }
}
