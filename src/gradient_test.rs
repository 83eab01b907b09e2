use super::*;
use crate::color::hsv_to_rgb;

#[test]
fn hue_track_has_360_samples_of_pure_spectrum() {
    let track = generate_track(Channel::Hue, 0.42);
    assert_eq!(track.len(), 360);
    assert_eq!(track[0], Color32 { r: 255, g: 0, b: 0, a: 255 });
    assert_eq!(track[120], Color32 { r: 0, g: 255, b: 0, a: 255 });
    assert_eq!(track[240], Color32 { r: 0, g: 0, b: 255, a: 255 });
    assert!(track.iter().all(|c| c.a == 255));
}

#[test]
fn hue_track_ignores_current_hue() {
    assert_eq!(generate_track(Channel::Hue, 0.0), generate_track(Channel::Hue, 0.9));
}

#[test]
fn saturation_track_sweeps_from_white_at_current_hue() {
    let track = generate_track(Channel::Saturation, 2.0 / 3.0);
    assert_eq!(track.len(), 100);
    assert_eq!(track[0], Color32 { r: 255, g: 255, b: 255, a: 255 });
    assert_eq!(track[99], hsv_to_rgb(2.0 / 3.0, 0.99, 1.0).to_color32());
}

#[test]
fn value_track_sweeps_from_black_at_current_hue() {
    let track = generate_track(Channel::Value, 0.0);
    assert_eq!(track.len(), 100);
    assert_eq!(track[0], Color32 { r: 0, g: 0, b: 0, a: 255 });
    assert_eq!(track[50], Color32 { r: 127, g: 0, b: 0, a: 255 });
}

#[test]
fn track_widths() {
    assert_eq!(track_width(Channel::Hue), HUE_TRACK_WIDTH);
    assert_eq!(track_width(Channel::Saturation), TONE_TRACK_WIDTH);
    assert_eq!(track_width(Channel::Value), TONE_TRACK_WIDTH);
}
