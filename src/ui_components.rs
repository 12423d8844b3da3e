//! 再利用可能な UI コンポーネント／ヘルパー関数。
//!
//! - カードフレーム、見出しラベル、スライダー行、凸凹ボタンなどをまとめています。
//! - 配色はすべて `ChromePalette` から受け取り、ベースカラーに追従させます。

use eframe::egui;

use crate::controls::SliderSpec;
use crate::ui_theme::{font_sizes, layout, ChromePalette};

/// 縦中央揃えのテキスト入力欄を作成
pub fn styled_text_edit(text: &mut String) -> egui::TextEdit<'_> {
    egui::TextEdit::singleline(text)
        .font(egui::TextStyle::Monospace)
        .margin(egui::Margin {
            left: 8.0,
            right: 8.0,
            top: 8.0,
            bottom: 6.0,
        })
}

/// セクション見出しラベルを作成
pub fn section_title(text: &str, palette: &ChromePalette) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::SECTION)
        .strong()
        .color(palette.text_primary)
}

/// フィールドラベルを作成
pub fn field_label(text: &str, palette: &ChromePalette) -> egui::RichText {
    egui::RichText::new(text)
        .size(font_sizes::LABEL)
        .strong()
        .color(palette.text_secondary)
}

/// 浮き上がって見えるカードフレーム（右下に暗い影）
pub fn card_frame(palette: &ChromePalette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.surface)
        .rounding(egui::Rounding::same(layout::CARD_ROUNDING))
        .inner_margin(egui::Margin::same(layout::CARD_PADDING))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(layout::CARD_SHADOW_DISTANCE, layout::CARD_SHADOW_DISTANCE),
            blur: layout::CARD_SHADOW_BLUR,
            spread: 0.0,
            color: palette.shadow_dark,
        })
}

/// 凸／凹（選択中）を切り替えられるボタン。クリックされたかどうかを返す。
pub fn soft_button(
    ui: &mut egui::Ui,
    label: &str,
    pressed: bool,
    min_width: f32,
    palette: &ChromePalette,
) -> bool {
    let (fill, text_color) = if pressed {
        (palette.shadow_dark, palette.text_primary)
    } else {
        (palette.surface, palette.text_secondary)
    };

    ui.add(
        egui::Button::new(egui::RichText::new(label).strong().color(text_color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, palette.shadow_dark))
            .rounding(egui::Rounding::same(layout::BUTTON_ROUNDING))
            .min_size(egui::vec2(min_width, layout::BUTTON_HEIGHT)),
    )
    .clicked()
}

/// ラベル + スライダー + 値表示の 1 行を描画し、値が変わったかどうかを返す。
///
/// スライダーの値はステップ単位・範囲内に丸めてから書き戻す。
pub fn render_control_slider(
    ui: &mut egui::Ui,
    spec: &SliderSpec,
    value: &mut f64,
    palette: &ChromePalette,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.add_sized(
            [layout::SLIDER_LABEL_WIDTH, layout::INPUT_HEIGHT],
            egui::Label::new(field_label(&format!("{}:", spec.label), palette)),
        );

        let response = ui.add(
            egui::Slider::new(&mut *value, spec.min..=spec.max)
                .step_by(spec.step)
                .show_value(false)
                .clamping(egui::SliderClamping::Always),
        );
        if response.changed() {
            *value = spec.snap(*value);
            changed = true;
        }

        ui.add_sized(
            [layout::SLIDER_VALUE_WIDTH, layout::INPUT_HEIGHT],
            egui::Label::new(
                egui::RichText::new(value.to_string())
                    .size(font_sizes::BODY)
                    .strong()
                    .color(palette.text_secondary),
            ),
        );
    });
    changed
}
