//! メイン画面のパネル描画ロジック。
//!
//! - すべて `&mut MyApp` を引数に取り、状態は `MyApp`（と内部の `Studio`）にだけ持たせます。
//! - 左カード: プレビュー + Reset All、右カード: 各コントロール + CSS 出力。

use std::time::Instant;

use eframe::egui;
use rfd::FileDialog;

use crate::app::MyApp;
use crate::clipboard::EguiClipboard;
use crate::color::HexColor;
use crate::controls::{BLUR, DISTANCE, INTENSITY, RADIUS, SIZE};
use crate::export::{export_css, timestamp_prefix, write_css_file, EXPORT_FILE_NAME};
use crate::shape::ShapeVariant;
use crate::ui_components::{
    card_frame, field_label, render_control_slider, section_title, soft_button, styled_text_edit,
};
use crate::ui_preview::render_preview;
use crate::ui_theme::{colors, font_sizes, layout};

/// ヘッダーパネルを描画
pub fn render_header(app: &mut MyApp, ctx: &egui::Context) {
    let palette = app.palette;
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(palette.surface)
                .inner_margin(egui::Margin::symmetric(24.0, 16.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Neumorphic Studio")
                        .size(font_sizes::TITLE)
                        .strong()
                        .color(palette.text_primary),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_export_buttons(app, ui);
                });
            });
        });
}

/// Save As / Save to folder ボタン
fn render_export_buttons(app: &mut MyApp, ui: &mut egui::Ui) {
    let palette = app.palette;

    if soft_button(ui, "Save As…", false, 110.0, &palette) {
        let dir = app.config.export_dir.trim();
        let dialog = FileDialog::new()
            .add_filter("CSS", &["css"])
            .set_file_name(EXPORT_FILE_NAME);
        let dialog = if dir.is_empty() {
            dialog
        } else {
            dialog.set_directory(dir)
        };
        if let Some(path) = dialog.save_file() {
            let css = app.studio.css();
            match write_css_file(&path, &css) {
                Ok(()) => app.studio.set_notice(format!("Saved {}", path.display())),
                Err(e) => {
                    log::error!("Failed to save CSS: {e}");
                    app.studio.set_notice(format!("Failed to save CSS: {e}"));
                }
            }
        }
    }

    ui.add_space(8.0);

    if soft_button(ui, "Save to folder", false, 130.0, &palette) {
        let prefix = app.config.use_timestamp_prefix.then(timestamp_prefix);
        let css = app.studio.css();
        match export_css(&app.config.export_dir, &css, prefix.as_deref()) {
            Ok(path) => app.studio.set_notice(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Failed to export CSS to {}: {e}", app.config.export_dir);
                app.studio.set_notice(format!("Failed to export CSS: {e}"));
            }
        }
    }
}

/// メインパネル（左: プレビュー、右: コントロール）
pub fn render_main_panel(app: &mut MyApp, ctx: &egui::Context) {
    let palette = app.palette;
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(palette.surface)
                .inner_margin(egui::Margin::same(layout::PANEL_MARGIN + layout::CARD_SHADOW_BLUR)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    render_preview_card(&mut columns[0], app);
                    render_controls_card(&mut columns[1], app);
                });
            });
        });
}

/// プレビューカード（プレビュー + Reset All）
fn render_preview_card(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    card_frame(&palette).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            let controls = *app.studio.controls();
            let style = app.studio.style();
            render_preview(
                ui,
                &style,
                controls.shape,
                controls.size,
                controls.radius,
                layout::PREVIEW_HEIGHT,
            );

            ui.add_space(layout::CARD_GAP);

            if soft_button(ui, "Reset All", false, 160.0, &palette) {
                app.studio.reset();
            }
        });
    });
}

/// コントロールカード（Color / Shape / Sliders / CSS Output）
fn render_controls_card(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    card_frame(&palette).show(ui, |ui| {
        render_color_section(ui, app);
        ui.add_space(layout::CARD_GAP);
        render_shape_section(ui, app);
        ui.add_space(layout::CARD_GAP);
        render_slider_section(ui, app);
        ui.add_space(layout::CARD_GAP);
        render_css_output_section(ui, app);
    });
}

fn render_color_section(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    ui.label(section_title("Color Selection", &palette));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(field_label("Base Color:", &palette));

        if ui.color_edit_button_srgb(&mut app.picker_rgb).changed() {
            app.studio.set_base_color(HexColor::from_array(app.picker_rgb));
        }

        let mut text = app.studio.color_input().to_string();
        if ui
            .add_sized(
                [layout::COLOR_INPUT_WIDTH, layout::INPUT_HEIGHT],
                styled_text_edit(&mut text),
            )
            .changed()
        {
            app.studio.set_color_input(&text);
        }

        if !app.studio.color_input_is_valid() {
            ui.label(
                egui::RichText::new("Invalid color (#rrggbb)")
                    .size(font_sizes::LABEL)
                    .color(colors::DANGER),
            );
        }
    });
}

fn render_shape_section(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    ui.label(section_title("Shape", &palette));
    ui.add_space(8.0);

    let current = app.studio.controls().shape;
    ui.horizontal_wrapped(|ui| {
        for shape in ShapeVariant::ALL {
            if soft_button(ui, shape.name(), current == shape, 90.0, &palette) {
                app.studio.set_shape(shape);
            }
        }
    });
}

fn render_slider_section(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    ui.label(section_title("Shadow & Shape Controls", &palette));
    ui.add_space(8.0);

    let mut controls = *app.studio.controls();
    let mut changed = false;
    changed |= render_control_slider(ui, &SIZE, &mut controls.size, &palette);
    changed |= render_control_slider(ui, &RADIUS, &mut controls.radius, &palette);
    changed |= render_control_slider(ui, &DISTANCE, &mut controls.distance, &palette);
    changed |= render_control_slider(ui, &INTENSITY, &mut controls.intensity, &palette);
    changed |= render_control_slider(ui, &BLUR, &mut controls.blur, &palette);

    if changed {
        app.studio.update_controls(|c| *c = controls);
    }
}

fn render_css_output_section(ui: &mut egui::Ui, app: &mut MyApp) {
    let palette = app.palette;
    let now = Instant::now();

    ui.horizontal(|ui| {
        ui.label(section_title("CSS Output", &palette));
        if app.studio.copy_feedback().is_copied(now) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::Frame::none()
                    .fill(colors::BADGE_BG)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Copied!")
                                .size(font_sizes::LABEL)
                                .color(egui::Color32::WHITE),
                        );
                    });
            });
        }
    });
    ui.add_space(8.0);

    let css = app.studio.css();
    ui.add(
        egui::TextEdit::multiline(&mut css.as_str())
            .font(egui::FontId::monospace(font_sizes::CODE))
            .desired_width(f32::INFINITY)
            .min_size(egui::vec2(0.0, layout::CSS_OUTPUT_MIN_HEIGHT))
            .text_color(palette.text_secondary),
    );

    ui.add_space(12.0);

    let width = ui.available_width();
    if soft_button(ui, "Copy CSS", false, width, &palette) {
        let mut clipboard = EguiClipboard::new(ui.ctx());
        // 失敗は Studio 側で通知・ログ済みなので、ここでは握りつぶすだけ
        let _ = app.studio.copy_css(&mut clipboard, Instant::now());
    }

    if let Some(notice) = app.studio.notice() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(notice)
                .size(font_sizes::LABEL)
                .color(palette.text_secondary),
        );
    }
}
