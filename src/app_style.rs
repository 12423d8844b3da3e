//! egui スタイル設定まわりをまとめたモジュール。
//!
//! `MyApp::new` と、ベースカラー変更時の `PresentationEffect` 処理から呼び出されます。

use eframe::egui;

use crate::ui_theme::{layout, ChromePalette};

/// グローバルな egui スタイルを設定する。
///
/// - ライトモード固定で、パネル背景はベースカラーそのもの。
/// - 枠線は消して、影と角丸だけで立体感を出す。
pub fn setup_style(ctx: &egui::Context, palette: &ChromePalette) {
    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(20.0, 10.0);
    style.spacing.window_margin = egui::Margin::same(20.0);
    style.spacing.slider_width = 220.0;

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = palette.surface;
    style.visuals.window_fill = palette.surface;
    style.visuals.extreme_bg_color = palette.code_bg;
    style.visuals.faint_bg_color = palette.surface;
    style.visuals.code_bg_color = palette.code_bg;
    style.visuals.override_text_color = Some(palette.text_primary);

    style.visuals.window_stroke = egui::Stroke::NONE;

    let rounding = egui::Rounding::same(layout::BUTTON_ROUNDING);
    style.visuals.window_rounding = egui::Rounding::same(layout::CARD_ROUNDING);
    style.visuals.widgets.noninteractive.rounding = rounding;
    style.visuals.widgets.inactive.rounding = rounding;
    style.visuals.widgets.hovered.rounding = rounding;
    style.visuals.widgets.active.rounding = rounding;

    style.visuals.widgets.noninteractive.bg_fill = palette.surface;
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_secondary,
    };

    style.visuals.widgets.inactive.bg_fill = palette.surface;
    style.visuals.widgets.inactive.weak_bg_fill = palette.surface;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.shadow_dark);
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_secondary,
    };

    style.visuals.widgets.hovered.bg_fill = palette.shadow_light;
    style.visuals.widgets.hovered.weak_bg_fill = palette.shadow_light;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.shadow_dark);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_primary,
    };

    style.visuals.widgets.active.bg_fill = palette.shadow_dark;
    style.visuals.widgets.active.weak_bg_fill = palette.shadow_dark;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.active.fg_stroke = egui::Stroke {
        width: 1.0,
        color: palette.text_primary,
    };

    style.visuals.selection.bg_fill = palette.shadow_dark;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, palette.text_primary);

    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(22.0));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(14.0));
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(13.0));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(12.0));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));

    ctx.set_style(style);
}
