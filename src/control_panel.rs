//! Color and brush control panel.
//!
//! DESIGN
//! ======
//! The panel owns three HSV sliders, an optional brush-size slider, the
//! recent-color palette and the rendered slider tracks. Drawing canvases
//! never read the panel directly; they subscribe to `color-changed` and
//! `size-changed` and react to what is emitted.
//!
//! Every path that changes the color (manual slider edit, `set_color`,
//! palette selection) funnels through `update_color`, which refreshes the
//! preview, re-renders the saturation and value tracks, and emits.

#[cfg(test)]
#[path = "control_panel_test.rs"]
mod tests;

use tracing::debug;

use crate::color::{Color, Color32, hsv_to_rgb, rgb_to_hsv};
use crate::config::PanelConfig;
use crate::gradient::{Channel, generate_track};
use crate::palette::Palette;
use crate::signal::{Emitter, Subscription};
use crate::slider::{ChangeSource, Slider};

pub const BRUSH_SIZE_MIN: f32 = 1.0;
pub const BRUSH_SIZE_MAX: f32 = 5.0;

#[derive(Debug)]
pub struct ControlPanel {
    hue: Slider,
    saturation: Slider,
    value: Slider,
    brush_size: Option<Slider>,
    palette: Palette,
    preview: Color,
    hue_track: Vec<Color32>,
    saturation_track: Vec<Color32>,
    value_track: Vec<Color32>,
    color_changed: Emitter<Color>,
    size_changed: Emitter<f32>,
}

impl ControlPanel {
    /// Build the panel and render its initial tracks and preview.
    #[must_use]
    pub fn new(config: &PanelConfig) -> Self {
        let hsv = rgb_to_hsv(config.initial_color);
        let mut panel = Self {
            hue: Slider::new(0.0, 1.0, hsv.h),
            saturation: Slider::new(0.0, 1.0, hsv.s),
            value: Slider::new(0.0, 1.0, hsv.v),
            brush_size: config
                .brush_slider
                .then(|| Slider::new(BRUSH_SIZE_MIN, BRUSH_SIZE_MAX, BRUSH_SIZE_MIN)),
            palette: Palette::new(config.palette_size),
            preview: Color::BLACK,
            hue_track: generate_track(Channel::Hue, hsv.h),
            saturation_track: Vec::new(),
            value_track: Vec::new(),
            color_changed: Emitter::new(),
            size_changed: Emitter::new(),
        };
        panel.update_color();
        panel
    }

    /// Current color derived from the three sliders.
    #[must_use]
    pub fn color(&self) -> Color {
        hsv_to_rgb(self.hue.value(), self.saturation.value(), self.value.value())
    }

    /// Decompose `color` into the sliders, then run the normal update path once.
    pub fn set_color(&mut self, color: Color) {
        let hsv = rgb_to_hsv(color);
        let changed = [
            self.hue.set_value(hsv.h, ChangeSource::Local),
            self.saturation.set_value(hsv.s, ChangeSource::Local),
            self.value.set_value(hsv.v, ChangeSource::Local),
        ];
        if changed.iter().any(Option::is_some) {
            self.update_color();
        }
    }

    /// Manual edit of one color slider.
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        if self.slider_mut(channel).set_value(value, ChangeSource::Local).is_some() {
            self.update_color();
        }
    }

    #[must_use]
    pub fn channel(&self, channel: Channel) -> f32 {
        self.slider(channel).value()
    }

    #[must_use]
    pub fn slider(&self, channel: Channel) -> &Slider {
        match channel {
            Channel::Hue => &self.hue,
            Channel::Saturation => &self.saturation,
            Channel::Value => &self.value,
        }
    }

    fn slider_mut(&mut self, channel: Channel) -> &mut Slider {
        match channel {
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Value => &mut self.value,
        }
    }

    /// Store the current color in the palette's oldest slot.
    pub fn save_current_color(&mut self) -> usize {
        let color = self.color();
        let slot = self.palette.save(color);
        debug!(slot, color = %color.to_hex(), "palette color saved");
        slot
    }

    /// Apply the color held in a palette slot. Empty slots are ignored.
    pub fn select_palette_slot(&mut self, slot: usize) {
        if let Some(color) = self.palette.get(slot) {
            self.set_color(color);
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switch canvases back to the current color.
    pub fn use_brush(&self) {
        self.color_changed.emit(&self.color());
    }

    /// Switch canvases to the eraser color.
    pub fn use_eraser(&self) {
        self.color_changed.emit(&Color::WHITE);
    }

    /// Edit the brush-size slider. A no-op when the panel has no brush slider.
    pub fn set_brush_size(&mut self, size: f32) {
        let Some(slider) = self.brush_size.as_mut() else {
            return;
        };
        if let Some(change) = slider.set_value(size, ChangeSource::Local) {
            self.size_changed.emit(&change.value);
        }
    }

    #[must_use]
    pub fn brush_size(&self) -> Option<f32> {
        self.brush_size.as_ref().map(Slider::value)
    }

    /// Color shown in the preview swatch.
    #[must_use]
    pub fn preview(&self) -> Color {
        self.preview
    }

    /// Rendered background for a channel's slider.
    #[must_use]
    pub fn track(&self, channel: Channel) -> &[Color32] {
        match channel {
            Channel::Hue => &self.hue_track,
            Channel::Saturation => &self.saturation_track,
            Channel::Value => &self.value_track,
        }
    }

    pub fn on_color_changed(&self, handler: impl Fn(&Color) + 'static) -> Subscription {
        self.color_changed.on_change(handler)
    }

    pub fn on_size_changed(&self, handler: impl Fn(&f32) + 'static) -> Subscription {
        self.size_changed.on_change(handler)
    }

    fn update_color(&mut self) {
        let color = self.color();
        self.preview = color;

        let hue = self.hue.value();
        self.saturation_track = generate_track(Channel::Saturation, hue);
        self.value_track = generate_track(Channel::Value, hue);

        self.color_changed.emit(&color);
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}
