use bytemuck::Pod;
use bytemuck::Zeroable;

// All colors are in linear sRGB space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        let srgb =
            color::AlphaColor::<color::Srgb>::new([r, g, b, a]).convert::<color::LinearSrgb>();

        Self {
            r: srgb.components[0],
            g: srgb.components[1],
            b: srgb.components[2],
            a: srgb.components[3],
        }
    }

    /// An opaque color from 8-bit sRGB channels, the way asset palettes
    /// usually spell them.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Converts an 8-bit surface alpha into this color's alpha channel.
    #[must_use]
    pub fn with_alpha8(self, alpha: u8) -> Self {
        self.with_alpha(f32::from(alpha) / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_endpoints_are_exact() {
        assert_eq!(Color::rgb8(0, 0, 0), Color::BLACK);

        let white = Color::rgb8(255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-5);
        assert!((white.g - 1.0).abs() < 1e-5);
        assert!((white.b - 1.0).abs() < 1e-5);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::RED.with_alpha(2.0).a, 1.0);
        assert_eq!(Color::RED.with_alpha(-1.0).a, 0.0);
        assert_eq!(Color::RED.with_alpha8(0).a, 0.0);
        assert_eq!(Color::RED.with_alpha8(255).a, 1.0);
    }
}
