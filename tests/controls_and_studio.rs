use std::time::{Duration, Instant};

use neumorphic_studio::clipboard::ClipboardSink;
use neumorphic_studio::color::HexColor;
use neumorphic_studio::controls::{ControlSet, BLUR, INTENSITY, RADIUS, SIZE};
use neumorphic_studio::copy_feedback::CopyFeedback;
use neumorphic_studio::error::ClipboardError;
use neumorphic_studio::presentation::PresentationEffect;
use neumorphic_studio::shape::ShapeVariant;
use neumorphic_studio::studio::Studio;

/// テスト専用のクリップボード。書き込まれた内容を記録し、失敗も再現できる。
#[derive(Default)]
struct RecordingClipboard {
    written: Vec<String>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("clipboard unavailable".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

#[test]
fn defaults_match_documented_values() {
    let c = ControlSet::default();
    assert_eq!(c.base_color.to_string(), "#e0e0e0");
    assert_eq!(c.shape, ShapeVariant::Convex);
    assert_eq!(c.size, 250.0);
    assert_eq!(c.distance, 10.0);
    assert_eq!(c.blur, 20.0);
    assert_eq!(c.intensity, 0.15);
    assert_eq!(c.radius, 20.0);
}

#[test]
fn slider_snap_clamps_and_removes_float_noise() {
    assert_eq!(INTENSITY.snap(0.15000000000000002), 0.15);
    assert_eq!(INTENSITY.snap(0.0), 0.01);
    assert_eq!(INTENSITY.snap(0.9), 0.3);
    assert_eq!(SIZE.snap(263.0), 260.0);
    assert_eq!(SIZE.snap(1000.0), 400.0);
    assert_eq!(BLUR.snap(-4.0), 0.0);
    assert_eq!(BLUR.snap(f64::NAN), 0.0);
}

/// 小さな負の値は正のゼロに丸められ、`-0` として表示されない。
#[test]
fn slider_snap_never_returns_negative_zero() {
    for input in [-0.4, -0.0, -0.3] {
        let snapped = RADIUS.snap(input);
        assert_eq!(snapped, 0.0);
        assert!(snapped.is_sign_positive(), "snap({input}) should be +0.0");
        assert_eq!(snapped.to_string(), "0");
    }
}

#[test]
fn unknown_shape_names_are_rejected() {
    assert_eq!("Concave".parse::<ShapeVariant>().unwrap(), ShapeVariant::Concave);
    assert!("round".parse::<ShapeVariant>().is_err());
}

/// 全フィールドを変えたあとで reset すると初期値に戻ることを確認する。
#[test]
fn reset_restores_every_field() {
    let mut studio = Studio::default();
    studio.set_base_color(HexColor::rgb(0x12, 0x34, 0x56));
    studio.set_shape(ShapeVariant::Pressed);
    studio.update_controls(|c| {
        c.size = 400.0;
        c.distance = 50.0;
        c.blur = 0.0;
        c.intensity = 0.3;
        c.radius = 0.0;
    });
    assert_ne!(*studio.controls(), ControlSet::default());

    studio.reset();
    assert_eq!(*studio.controls(), ControlSet::default());
    assert_eq!(studio.color_input(), "#e0e0e0");
}

#[test]
fn base_color_changes_emit_presentation_effects() {
    let mut studio = Studio::default();
    // 起動時の 1 回
    assert_eq!(
        studio.take_effects(),
        vec![PresentationEffect::BaseColorChanged(HexColor::rgb(0xe0, 0xe0, 0xe0))]
    );

    assert!(studio.set_color_input("#123456"));
    assert_eq!(
        studio.take_effects(),
        vec![PresentationEffect::BaseColorChanged(HexColor::rgb(0x12, 0x34, 0x56))]
    );

    // 同じ色をもう一度設定しても何も送らない
    studio.set_base_color(HexColor::rgb(0x12, 0x34, 0x56));
    assert!(studio.take_effects().is_empty());

    studio.reset();
    assert_eq!(
        studio.take_effects(),
        vec![PresentationEffect::BaseColorChanged(HexColor::rgb(0xe0, 0xe0, 0xe0))]
    );
}

/// 不正な自由入力は無視され、直前の有効な色が残る。
#[test]
fn invalid_color_text_keeps_last_valid_color() {
    let mut studio = Studio::default();
    studio.take_effects();

    assert!(studio.set_color_input("#abcdef"));
    studio.take_effects();

    assert!(!studio.set_color_input("#abcde"));
    assert_eq!(studio.color_input(), "#abcde");
    assert!(!studio.color_input_is_valid());
    assert_eq!(studio.controls().base_color.to_string(), "#abcdef");
    assert!(studio.take_effects().is_empty());
    assert!(studio.css().contains("background: #abcdef;"));
}

#[test]
fn update_controls_snaps_slider_values() {
    let mut studio = Studio::default();
    studio.update_controls(|c| {
        c.intensity = 0.07 * 3.0;
        c.size = 10.0;
    });
    assert_eq!(studio.controls().intensity, 0.21);
    assert_eq!(studio.controls().size, 50.0);
}

#[test]
fn successful_copy_writes_css_and_sets_flag() {
    let mut studio = Studio::new(CopyFeedback::new(Duration::from_millis(2000)));
    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();

    studio.copy_css(&mut clipboard, now).unwrap();

    assert_eq!(clipboard.written, vec![studio.css()]);
    assert!(studio.copy_feedback().is_copied(now));
    assert!(studio.notice().is_none());
}

#[test]
fn failed_copy_leaves_flag_unchanged_and_sets_notice() {
    let mut studio = Studio::default();
    let mut clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let now = Instant::now();

    let err = studio.copy_css(&mut clipboard, now).unwrap_err();

    assert_eq!(
        err,
        ClipboardError::WriteFailed("clipboard unavailable".to_string())
    );
    assert!(!studio.copy_feedback().is_copied(now));
    assert!(studio.notice().is_some());
}
