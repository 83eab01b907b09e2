use super::*;

const EPS: f32 = 1e-4;

#[test]
fn hsv_primary_sectors() {
    assert!(hsv_to_rgb(0.0, 1.0, 1.0).approx_eq(Color::rgb(1.0, 0.0, 0.0), EPS));
    assert!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0).approx_eq(Color::rgb(0.0, 1.0, 0.0), EPS));
    assert!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0).approx_eq(Color::rgb(0.0, 0.0, 1.0), EPS));
}

#[test]
fn hue_of_one_wraps_to_red() {
    assert!(hsv_to_rgb(1.0, 1.0, 1.0).approx_eq(Color::rgb(1.0, 0.0, 0.0), EPS));
}

#[test]
fn zero_saturation_is_grey() {
    assert_eq!(hsv_to_rgb(0.7, 0.0, 0.25), Color::rgb(0.25, 0.25, 0.25));
}

#[test]
fn zero_value_is_black() {
    assert_eq!(hsv_to_rgb(0.3, 0.8, 0.0), Color::BLACK);
}

#[test]
fn rgb_to_hsv_black_and_white() {
    assert_eq!(rgb_to_hsv(Color::BLACK), Hsv { h: 0.0, s: 0.0, v: 0.0 });
    let white = rgb_to_hsv(Color::WHITE);
    assert_eq!(white.s, 0.0);
    assert_eq!(white.v, 1.0);
}

#[test]
fn rgb_to_hsv_prefers_blue_only_when_strictly_dominant() {
    let magenta = rgb_to_hsv(Color::rgb(1.0, 0.0, 1.0));
    assert!((magenta.h - 5.0 / 6.0).abs() < EPS);
    assert!((magenta.s - 1.0).abs() < EPS);

    let blue = rgb_to_hsv(Color::rgb(0.0, 0.0, 0.5));
    assert!((blue.h - 2.0 / 3.0).abs() < EPS);
    assert!((blue.v - 0.5).abs() < EPS);
}

#[test]
fn hsv_rgb_hsv_round_trip_is_stable() {
    let steps = [0.0_f32, 0.1, 0.25, 0.5, 0.66, 0.9, 1.0];
    for &h in &steps {
        for &s in &steps {
            for &v in &steps {
                let shown = hsv_to_rgb(h, s, v);
                let hsv = rgb_to_hsv(shown);
                let again = hsv_to_rgb(hsv.h, hsv.s, hsv.v);
                assert!(again.approx_eq(shown, 1e-3), "h={h} s={s} v={v}: {shown:?} vs {again:?}");
            }
        }
    }
}

#[test]
fn color32_truncates_channels() {
    let c = Color::rgb(0.999, 0.5, 0.0).to_color32();
    assert_eq!(c, Color32 { r: 254, g: 127, b: 0, a: 255 });
    assert_eq!(Color::WHITE.to_color32(), Color32 { r: 255, g: 255, b: 255, a: 255 });
}

#[test]
fn hex_round_trip_uses_canonical_lowercase() {
    let color = Color::from_hex("#ABC").expect("short hex");
    assert_eq!(color.to_hex(), "#aabbcc");
    assert_eq!(Color::from_hex("  #A1B2C3 ").map(Color::to_hex).as_deref(), Some("#a1b2c3"));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#é1"), None);
}
