//! UI テーマ定数（カラーパレット・フォントサイズ・レイアウト）。
//!
//! - 固定色は `colors`、ベースカラーから毎回導出するクローム色は `ChromePalette`。
//! - 他のモジュールからは `crate::ui_theme::{colors, font_sizes, layout}` として参照します。

use eframe::egui;

use crate::color::HexColor;

/// カラーパレット（ベースカラーに依存しないもの）
pub mod colors {
    use eframe::egui;

    /// 「Copied!」バッジの背景
    pub const BADGE_BG: egui::Color32 = egui::Color32::from_rgb(0x1F, 0x29, 0x37);
    /// 警告・エラー表示の赤
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x26, 0x26);
    /// プレビュー中央のラベル（黒 40%）
    pub const PREVIEW_LABEL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 102);
}

/// フォントサイズ（論理ピクセル）
pub mod font_sizes {
    /// タイトル
    pub const TITLE: f32 = 22.0;
    /// セクション見出し
    pub const SECTION: f32 = 18.0;
    /// プレビュー中央の形状名
    pub const PREVIEW: f32 = 20.0;
    /// 本文
    pub const BODY: f32 = 14.0;
    /// ラベル
    pub const LABEL: f32 = 13.0;
    /// CSS 出力
    pub const CODE: f32 = 13.0;
}

/// レイアウト定数（論理ピクセル）
pub mod layout {
    /// パネルマージン
    pub const PANEL_MARGIN: f32 = 16.0;
    /// カード間のギャップ
    pub const CARD_GAP: f32 = 24.0;
    /// カード内パディング
    pub const CARD_PADDING: f32 = 28.0;
    /// カード角丸
    pub const CARD_ROUNDING: f32 = 24.0;
    /// カードの影（距離・ぼかし）
    pub const CARD_SHADOW_DISTANCE: f32 = 10.0;
    pub const CARD_SHADOW_BLUR: f32 = 20.0;
    /// ボタンの高さ
    pub const BUTTON_HEIGHT: f32 = 40.0;
    /// ボタン角丸
    pub const BUTTON_ROUNDING: f32 = 12.0;
    /// スライダー行のラベル幅
    pub const SLIDER_LABEL_WIDTH: f32 = 90.0;
    /// スライダー右側の値表示幅
    pub const SLIDER_VALUE_WIDTH: f32 = 48.0;
    /// 色テキスト入力欄の幅
    pub const COLOR_INPUT_WIDTH: f32 = 140.0;
    /// 入力欄の高さ
    pub const INPUT_HEIGHT: f32 = 32.0;
    /// プレビュー領域の高さ（最大サイズ + 影のはみ出し分）
    pub const PREVIEW_HEIGHT: f32 = 520.0;
    /// CSS 出力欄の最小高さ
    pub const CSS_OUTPUT_MIN_HEIGHT: f32 = 120.0;
}

/// ベースカラーから導出するウィンドウクロームの配色。
///
/// `PresentationEffect::BaseColorChanged` を受け取るたびに作り直す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromePalette {
    pub surface: egui::Color32,
    pub shadow_dark: egui::Color32,
    pub shadow_light: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub code_bg: egui::Color32,
}

impl ChromePalette {
    pub fn from_base(base: HexColor) -> Self {
        Self {
            surface: to_color32(base),
            shadow_dark: to_color32(base.adjust(-0.19)),
            shadow_light: to_color32(base.adjust(0.19)),
            text_primary: to_color32(base.adjust(-0.85)),
            text_secondary: to_color32(base.adjust(-0.6)),
            code_bg: to_color32(base.adjust(0.04)),
        }
    }
}

pub fn to_color32(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
