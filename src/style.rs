//! コントロール値から影 2 層とスタイルレコードを導出するモジュール。
//!
//! 結果はキャッシュせず、毎フレーム `derive_style` で作り直します。

use std::fmt;

use serde::Serialize;

use crate::color::HexColor;
use crate::controls::ControlSet;
use crate::shape::ShapeVariant;

/// `pressed` で使う固定オフセット・ぼかし（distance / blur は無視される）
pub const PRESSED_OFFSET: f64 = 5.0;
pub const PRESSED_BLUR: f64 = 10.0;

/// box-shadow の 1 層分
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BoxShadowLayer {
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: HexColor,
}

impl BoxShadowLayer {
    fn new(inset: bool, offset: f64, blur: f64, color: HexColor) -> Self {
        Self {
            inset,
            offset_x: offset,
            offset_y: offset,
            blur,
            color,
        }
    }
}

/// 負のオフセットは `-` + 絶対値で出力する（distance = 0 なら `-0px`）。
fn write_px(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_sign_negative() {
        write!(f, "-{}px", value.abs())
    } else {
        write!(f, "{}px", value)
    }
}

impl fmt::Display for BoxShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write_px(f, self.offset_x)?;
        f.write_str(" ")?;
        write_px(f, self.offset_y)?;
        f.write_str(" ")?;
        write_px(f, self.blur)?;
        write!(f, " {}", self.color)
    }
}

/// 導出されたスタイル一式
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShadowStyle {
    #[serde(skip)]
    pub layers: [BoxShadowLayer; 2],
    pub shadow1: String,
    pub shadow2: String,
    pub border_radius: String,
    pub box_shadow: String,
    pub background_color: HexColor,
}

impl ShadowStyle {
    pub fn dark_layer(&self) -> &BoxShadowLayer {
        &self.layers[0]
    }

    pub fn light_layer(&self) -> &BoxShadowLayer {
        &self.layers[1]
    }
}

/// 現在のコントロール値から影 2 層とスタイルレコードを計算する。
///
/// - 明色 = `adjust(base, intensity * 2)`、暗色 = `adjust(base, -intensity * 2)`
/// - 1 層目は常に暗色（右下方向）、2 層目は明色（左上方向）
/// - `flat` と `convex` は現状まったく同じ出力になる
pub fn derive_style(controls: &ControlSet) -> ShadowStyle {
    let light = controls.base_color.adjust(controls.intensity * 2.0);
    let dark = controls.base_color.adjust(-controls.intensity * 2.0);
    let d = controls.distance;
    let blur = controls.blur;

    let [shadow1, shadow2] = match controls.shape {
        ShapeVariant::Concave => [
            BoxShadowLayer::new(true, d, blur, dark),
            BoxShadowLayer::new(true, -d, blur, light),
        ],
        ShapeVariant::Pressed => [
            BoxShadowLayer::new(true, PRESSED_OFFSET, PRESSED_BLUR, dark),
            BoxShadowLayer::new(true, -PRESSED_OFFSET, PRESSED_BLUR, light),
        ],
        ShapeVariant::Flat | ShapeVariant::Convex => [
            BoxShadowLayer::new(false, d, blur, dark),
            BoxShadowLayer::new(false, -d, blur, light),
        ],
    };

    let shadow1_css = shadow1.to_string();
    let shadow2_css = shadow2.to_string();
    ShadowStyle {
        layers: [shadow1, shadow2],
        box_shadow: format!("{shadow1_css}, {shadow2_css}"),
        shadow1: shadow1_css,
        shadow2: shadow2_css,
        border_radius: format!("{}px", controls.radius),
        background_color: controls.base_color,
    }
}
