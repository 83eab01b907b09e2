//! Color model and HSV conversions shared by the brush panel.
//!
//! Colors are float RGBA in [0,1]. Swatch textures use [`Color32`], which
//! truncates each channel to a byte. Hex helpers let colors travel in frames
//! and logs as canonical `#rrggbb` strings.

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Float RGBA color, channels in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color from three channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Quantize to bytes by truncation, alpha forced opaque.
    #[must_use]
    pub fn to_color32(self) -> Color32 {
        Color32 { r: channel_to_byte(self.r), g: channel_to_byte(self.g), b: channel_to_byte(self.b), a: 255 }
    }

    /// Canonical lowercase `#rrggbb`, rounding each channel.
    #[must_use]
    pub fn to_hex(self) -> String {
        let round = |c: f32| -> u8 {
            // Clamped to [0,255] before the cast.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let byte = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            byte
        };
        format!("#{:02x}{:02x}{:02x}", round(self.r), round(self.g), round(self.b))
    }

    /// Parse `#RGB` or `#RRGGBB` into an opaque color.
    #[must_use]
    pub fn from_hex(raw: &str) -> Option<Self> {
        let (r, g, b) = parse_hex_rgb(raw)?;
        Some(Self::rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0))
    }

    /// True when every channel is within `eps` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }
}

/// Byte RGBA color used for swatch samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Hue, saturation and value, each in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

fn channel_to_byte(c: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (c.clamp(0.0, 1.0) * 255.0) as u8;
    byte
}

/// Convert HSV to an opaque RGB color.
///
/// Hue is split into six sectors; `h == 1.0` lands on red again.
#[must_use]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    if s == 0.0 {
        let grey = v.clamp(0.0, 1.0);
        return Color::rgb(grey, grey, grey);
    }
    if v == 0.0 {
        return Color::BLACK;
    }

    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    #[allow(clippy::cast_possible_truncation)]
    let (r, g, b) = match sector as i32 {
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 | -1 => (v, p, q),
        _ => (v, t, p),
    };

    Color::rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Decompose a color into HSV. Alpha is ignored.
#[must_use]
pub fn rgb_to_hsv(color: Color) -> Hsv {
    let Color { r, g, b, .. } = color;
    if b > g && b > r {
        hsv_from_dominant(4.0, b, r, g)
    } else if g > r {
        hsv_from_dominant(2.0, g, b, r)
    } else {
        hsv_from_dominant(0.0, r, g, b)
    }
}

fn hsv_from_dominant(offset: f32, dominant: f32, c1: f32, c2: f32) -> Hsv {
    let v = dominant;
    if v == 0.0 {
        return Hsv { h: 0.0, s: 0.0, v: 0.0 };
    }

    let delta = v - c1.min(c2);
    let (s, mut h) = if delta == 0.0 { (0.0, offset + (c1 - c2)) } else { (delta / v, offset + (c1 - c2) / delta) };
    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    Hsv { h, s, v }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let pair = |s: &str| u8::from_str_radix(s, 16);
    let parsed = match hex.len() {
        3 => (
            pair(&hex[0..1].repeat(2)),
            pair(&hex[1..2].repeat(2)),
            pair(&hex[2..3].repeat(2)),
        ),
        6 => (pair(&hex[0..2]), pair(&hex[2..4]), pair(&hex[4..6])),
        _ => return None,
    };
    match parsed {
        (Ok(r), Ok(g), Ok(b)) => Some((r, g, b)),
        _ => None,
    }
}
