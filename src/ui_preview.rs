//! ライブプレビューの描画。
//!
//! egui の `Shadow` は外側の影しか描けないため、inset の層は
//! 要素の外周 4 辺に置いた矩形の影を要素内にクリップして近似する。

use eframe::egui;

use crate::shape::ShapeVariant;
use crate::style::{BoxShadowLayer, ShadowStyle};
use crate::ui_theme::{colors, font_sizes, to_color32};

/// プレビュー要素のジオメトリ（画面に収まるよう縮小済み）
#[derive(Debug, Clone, Copy)]
struct PreviewGeometry {
    rect: egui::Rect,
    rounding: f32,
    scale: f32,
}

/// 領域内の中央にプレビュー要素を描画する。
pub fn render_preview(
    ui: &mut egui::Ui,
    style: &ShadowStyle,
    shape: ShapeVariant,
    size: f64,
    radius: f64,
    height: f32,
) {
    let (area, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );

    let geometry = fit_geometry(area, style, size as f32, radius as f32);
    let painter = ui.painter_at(area);
    let base = to_color32(style.background_color);

    for layer in style.layers.iter().filter(|l| !l.inset) {
        painter.add(outer_shadow(layer, geometry.scale).as_shape(geometry.rect, geometry.rounding));
    }

    painter.rect_filled(geometry.rect, geometry.rounding, base);

    let inner = painter.with_clip_rect(geometry.rect);
    let mut has_inset = false;
    for layer in style.layers.iter().filter(|l| l.inset) {
        paint_inset_layer(&inner, &geometry, layer);
        has_inset = true;
    }
    if has_inset && geometry.rounding > 0.0 {
        // 角丸の外側にはみ出した内側影を背景色で塗りつぶす
        let width = geometry.rounding;
        inner.rect_stroke(
            geometry.rect.expand(width / 2.0),
            geometry.rounding + width / 2.0,
            egui::Stroke::new(width, ui.visuals().panel_fill),
        );
    }

    painter.text(
        geometry.rect.center(),
        egui::Align2::CENTER_CENTER,
        shape.name(),
        egui::FontId::proportional(font_sizes::PREVIEW * geometry.scale.max(0.5)),
        colors::PREVIEW_LABEL,
    );
}

/// 影を含めて領域に収まるよう、必要なら要素を縮小する。
fn fit_geometry(area: egui::Rect, style: &ShadowStyle, size: f32, radius: f32) -> PreviewGeometry {
    let reach = style
        .layers
        .iter()
        .filter(|l| !l.inset)
        .map(|l| (l.offset_x.abs() + l.blur) as f32)
        .fold(0.0_f32, f32::max);
    let needed = size + reach * 2.0;
    let available = area.width().min(area.height()).max(1.0);
    let scale = if needed > available {
        available / needed
    } else {
        1.0
    };

    let side = size * scale;
    PreviewGeometry {
        rect: egui::Rect::from_center_size(area.center(), egui::vec2(side, side)),
        rounding: (radius * scale).min(side / 2.0),
        scale,
    }
}

fn outer_shadow(layer: &BoxShadowLayer, scale: f32) -> egui::epaint::Shadow {
    egui::epaint::Shadow {
        offset: egui::vec2(layer.offset_x as f32, layer.offset_y as f32) * scale,
        blur: layer.blur as f32 * scale,
        spread: 0.0,
        color: to_color32(layer.color),
    }
}

/// 要素の外側 4 辺の帯をオフセット分ずらして影として描き、内側へのにじみだけを見せる。
fn paint_inset_layer(painter: &egui::Painter, geometry: &PreviewGeometry, layer: &BoxShadowLayer) {
    let shadow = outer_shadow(layer, geometry.scale);
    let rect = geometry.rect;
    let reach = shadow.blur + shadow.offset.length() + 1.0;
    let outer = rect.expand(reach);

    let strips = [
        egui::Rect::from_min_max(outer.min, egui::pos2(outer.max.x, rect.min.y)),
        egui::Rect::from_min_max(egui::pos2(outer.min.x, rect.max.y), outer.max),
        egui::Rect::from_min_max(
            egui::pos2(outer.min.x, rect.min.y),
            egui::pos2(rect.min.x, rect.max.y),
        ),
        egui::Rect::from_min_max(
            egui::pos2(rect.max.x, rect.min.y),
            egui::pos2(outer.max.x, rect.max.y),
        ),
    ];
    for strip in strips {
        painter.add(shadow.as_shape(strip, 0.0));
    }
}
