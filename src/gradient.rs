//! Slider background tracks for the HSV channels.
//!
//! Each track is a one-pixel-high strip sweeping one channel across its
//! range. The other channels are held at `hue = current hue, s = 1, v = 1`,
//! so the hue track always shows the pure spectrum and the saturation and
//! value tracks ignore the current saturation and value.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod tests;

use crate::color::{Color32, hsv_to_rgb};

pub const HUE_TRACK_WIDTH: usize = 360;
pub const TONE_TRACK_WIDTH: usize = 100;

/// One of the three color sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Value];
}

#[must_use]
pub fn track_width(channel: Channel) -> usize {
    match channel {
        Channel::Hue => HUE_TRACK_WIDTH,
        Channel::Saturation | Channel::Value => TONE_TRACK_WIDTH,
    }
}

/// Sample `channel` at `i / width` for each pixel of its track.
#[must_use]
pub fn generate_track(channel: Channel, hue: f32) -> Vec<Color32> {
    let width = track_width(channel);
    (0..width)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / width as f32;
            let (h, s, v) = match channel {
                Channel::Hue => (t, 1.0, 1.0),
                Channel::Saturation => (hue, t, 1.0),
                Channel::Value => (hue, 1.0, t),
            };
            hsv_to_rgb(h, s, v).to_color32()
        })
        .collect()
}
