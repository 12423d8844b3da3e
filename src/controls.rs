//! ユーザーが操作するコントロール値（`ControlSet`）と、その初期値・範囲定義。
//!
//! - 範囲のクランプとステップ丸めは入力境界（スライダー・CLI）で行い、
//!   スタイル導出側では再検証しません。
//! - コントロール値はセッション間で保存しません（`settings.toml` にも書かない）。

use serde::Serialize;

use crate::color::HexColor;
use crate::shape::ShapeVariant;

pub const DEFAULT_BASE_COLOR: HexColor = HexColor::rgb(0xe0, 0xe0, 0xe0);
pub const DEFAULT_SHAPE: ShapeVariant = ShapeVariant::Convex;
pub const DEFAULT_SIZE: f64 = 250.0;
pub const DEFAULT_DISTANCE: f64 = 10.0;
pub const DEFAULT_BLUR: f64 = 20.0;
pub const DEFAULT_INTENSITY: f64 = 0.15;
pub const DEFAULT_RADIUS: f64 = 20.0;

/// スライダー 1 本分の範囲とステップ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// ステップ丸め後に残す小数桁数（浮動小数の誤差を CSS に出さないため）
    pub decimals: i32,
}

impl SliderSpec {
    /// 値を範囲内にクランプし、ステップ単位に丸める。
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let units = (value / self.step).round();
        let scale = 10f64.powi(self.decimals);
        let snapped = (units * self.step * scale).round() / scale;
        // -0.0 は CSS に "-0" と出てしまうので正のゼロに揃える
        snapped.clamp(self.min, self.max) + 0.0
    }
}

pub const SIZE: SliderSpec = SliderSpec {
    label: "Size",
    min: 50.0,
    max: 400.0,
    step: 10.0,
    decimals: 0,
};
pub const RADIUS: SliderSpec = SliderSpec {
    label: "Radius",
    min: 0.0,
    max: 100.0,
    step: 1.0,
    decimals: 0,
};
pub const DISTANCE: SliderSpec = SliderSpec {
    label: "Distance",
    min: 0.0,
    max: 50.0,
    step: 1.0,
    decimals: 0,
};
pub const INTENSITY: SliderSpec = SliderSpec {
    label: "Intensity",
    min: 0.01,
    max: 0.3,
    step: 0.01,
    decimals: 2,
};
pub const BLUR: SliderSpec = SliderSpec {
    label: "Blur",
    min: 0.0,
    max: 100.0,
    step: 1.0,
    decimals: 0,
};

/// 現在のコントロール値一式
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ControlSet {
    pub base_color: HexColor,
    pub shape: ShapeVariant,
    pub size: f64,
    pub distance: f64,
    pub blur: f64,
    pub intensity: f64,
    pub radius: f64,
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            shape: DEFAULT_SHAPE,
            size: DEFAULT_SIZE,
            distance: DEFAULT_DISTANCE,
            blur: DEFAULT_BLUR,
            intensity: DEFAULT_INTENSITY,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl ControlSet {
    /// すべてのフィールドを初期値に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 数値フィールドを各スライダーの範囲・ステップに揃えたコピーを返す。
    pub fn clamped(&self) -> Self {
        Self {
            size: SIZE.snap(self.size),
            distance: DISTANCE.snap(self.distance),
            blur: BLUR.snap(self.blur),
            intensity: INTENSITY.snap(self.intensity),
            radius: RADIUS.snap(self.radius),
            ..*self
        }
    }
}
