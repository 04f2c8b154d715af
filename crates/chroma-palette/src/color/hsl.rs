//! HSL color type
//!
//! Hue/saturation/lightness is the working representation for harmony
//! generation: harmonies are hue rotations and lightness/saturation shifts.
//!
//! Conventions follow CSS: hue in degrees `[0, 360)`, saturation and
//! lightness in percent `[0, 100]`.

use super::rgb::Rgb;

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: f32,
    /// Saturation in percent, `[0, 100]`
    pub s: f32,
    /// Lightness in percent, `[0, 100]`
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color.
    ///
    /// Hue wraps modulo 360 (negative hues included); saturation and
    /// lightness are clamped to `[0, 100]`.
    ///
    /// # Example
    /// ```
    /// use chroma_palette::Hsl;
    /// let hsl = Hsl::new(-30.0, 120.0, 50.0);
    /// assert_eq!(hsl.h, 330.0);
    /// assert_eq!(hsl.s, 100.0);
    /// ```
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    #[inline]
    pub fn rotate(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Same hue and saturation with a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Same hue and lightness with a different saturation.
    #[inline]
    pub fn with_saturation(self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }
}

/// Normalize a hue angle into `[0, 360)`.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Rgb> for Hsl {
    /// Standard RGB to HSL conversion.
    ///
    /// Achromatic colors (max == min) get hue 0 and saturation 0.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self::new(h, s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Rgb {
    /// HSL to RGB via chroma and hue sector.
    ///
    /// Channels are rounded to the nearest integer and clamped.
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::from_f32((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
    }
}
