//! Integration tests for the colors module

mod common;
use common::max_channel_delta;

use palette::{FromColor, Hsv, Srgb};
use strawbees_blocks::colors::{
    PackedColor, hsb_to_packed, percent_to_byte, rgb_byte_to_packed, rgb_percent_to_packed,
};

#[test]
fn rgb_percent_creates_primary_colors() {
    assert_eq!(rgb_percent_to_packed(100.0, 0.0, 0.0).raw(), 0xFF0000);
    assert_eq!(rgb_percent_to_packed(0.0, 100.0, 0.0).raw(), 0x00FF00);
    assert_eq!(rgb_percent_to_packed(0.0, 0.0, 100.0).raw(), 0x0000FF);
}

#[test]
fn rgb_percent_extremes() {
    assert_eq!(rgb_percent_to_packed(0.0, 0.0, 0.0), PackedColor::BLACK);
    assert_eq!(rgb_percent_to_packed(100.0, 100.0, 100.0), PackedColor::WHITE);
}

#[test]
fn rgb_percent_stays_in_range_and_scales_each_channel() {
    let mut red = 0.0;
    while red <= 100.0 {
        let mut green = 0.0;
        while green <= 100.0 {
            let mut blue = 0.0;
            while blue <= 100.0 {
                let color = rgb_percent_to_packed(red, green, blue);
                assert!(color.raw() <= 0xFF_FFFF);
                assert_eq!(
                    color.channels(),
                    (
                        percent_to_byte(red),
                        percent_to_byte(green),
                        percent_to_byte(blue)
                    )
                );
                blue += 12.5;
            }
            green += 12.5;
        }
        red += 12.5;
    }
}

#[test]
fn rgb_percent_wraps_out_of_range_channels() {
    // -1% -> round(-2.55) = -3 -> 0xFD, 200% -> 510 -> 0xFE
    assert_eq!(rgb_percent_to_packed(-1.0, 200.0, 100.0).raw(), 0xFDFEFF);
}

#[test]
fn rgb_byte_packs_without_scaling() {
    assert_eq!(rgb_byte_to_packed(0x12, 0x34, 0x56).raw(), 0x123456);
    assert_eq!(rgb_byte_to_packed(255, 255, 255), PackedColor::WHITE);
    assert_eq!(rgb_byte_to_packed(0x1FF, 0x100, -2).raw(), 0xFF00FE);
}

#[test]
fn hsb_creates_pure_red_at_hue_zero() {
    assert_eq!(hsb_to_packed(0.0, 100.0, 100.0).raw(), 0xFF0000);
}

#[test]
fn hsb_hue_wraps_around_100() {
    assert_eq!(
        hsb_to_packed(100.0, 100.0, 100.0),
        hsb_to_packed(0.0, 100.0, 100.0)
    );
    assert_eq!(
        hsb_to_packed(100.0, 70.0, 40.0),
        hsb_to_packed(0.0, 70.0, 40.0)
    );
}

#[test]
fn hsb_negative_hue_wraps_backwards() {
    // -25 and 75 are the same point on the hue circle
    assert_eq!(hsb_to_packed(-25.0, 100.0, 100.0).raw(), 0x8000FF);
    assert_eq!(hsb_to_packed(75.0, 100.0, 100.0).raw(), 0x8000FF);
}

#[test]
fn hsb_sector_starts_and_midpoints() {
    // Cyan starts sector 3
    assert_eq!(hsb_to_packed(50.0, 100.0, 100.0).raw(), 0x00FFFF);
    // Halfway through sector 1 red has fallen to 50%
    assert_eq!(hsb_to_packed(25.0, 100.0, 100.0).raw(), 0x80FF00);
}

#[test]
fn hsb_zero_saturation_is_achromatic() {
    for hue in [0.0, 13.7, 33.3, 50.0, 81.2, 99.9] {
        for brightness in [0.0, 25.0, 40.0, 62.5, 100.0] {
            let (r, g, b) = hsb_to_packed(hue, 0.0, brightness).channels();
            assert_eq!(r, g, "hue {hue}, brightness {brightness}");
            assert_eq!(g, b, "hue {hue}, brightness {brightness}");
            assert_eq!(r, percent_to_byte(brightness));
        }
    }
}

#[test]
fn hsb_zero_brightness_is_black() {
    for hue in [0.0, 20.0, 45.0, 90.0] {
        assert_eq!(hsb_to_packed(hue, 100.0, 0.0), PackedColor::BLACK);
    }
}

#[test]
fn hsb_is_continuous_across_sector_boundaries() {
    const EPSILON: f32 = 0.01;

    for boundary in 1..6 {
        let hue = boundary as f32 * 100.0 / 6.0;
        for (saturation, brightness) in [(100.0, 100.0), (60.0, 80.0), (35.0, 50.0)] {
            let below = hsb_to_packed(hue - EPSILON, saturation, brightness);
            let above = hsb_to_packed(hue + EPSILON, saturation, brightness);
            assert!(
                max_channel_delta(below, above) <= 2,
                "jump at sector boundary {boundary}: {below} vs {above}"
            );
        }
    }
}

#[test]
fn hsb_matches_palette_conversion() {
    for hue_step in 0..20 {
        let hue = hue_step as f32 * 5.0;
        for saturation in [0.0, 30.0, 75.0, 100.0] {
            for brightness in [10.0, 50.0, 100.0] {
                let expected: Srgb<u8> = Srgb::from_color(Hsv::new(
                    hue * 3.6,
                    saturation / 100.0,
                    brightness / 100.0,
                ))
                .into_format();

                let actual = hsb_to_packed(hue, saturation, brightness);
                assert!(
                    max_channel_delta(actual, PackedColor::from(expected)) <= 1,
                    "hue {hue}, saturation {saturation}, brightness {brightness}"
                );
            }
        }
    }
}
