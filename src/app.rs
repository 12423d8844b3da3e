//! GUI アプリケーション本体。
//!
//! このモジュールは `eframe::App` の実装（`update` ループ）のみを保持し、
//! 状態は `app_state`、描画は `ui_panels` に分割されています。

use std::time::Instant;

use eframe::{egui, App};

use crate::app_style::setup_style;
use crate::presentation::PresentationEffect;
use crate::ui_theme::ChromePalette;

pub use crate::app_state::MyApp;

impl App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // コアから届いた副作用をすべて処理してから描画する
        for effect in self.studio.take_effects() {
            match effect {
                PresentationEffect::BaseColorChanged(color) => {
                    self.palette = ChromePalette::from_base(color);
                    self.picker_rgb = color.to_array();
                    setup_style(ctx, &self.palette);
                    log::debug!("Chrome retinted to {color}");
                }
            }
        }

        // Copied 表示の期限切れ判定と、期限ちょうどの再描画予約
        let now = Instant::now();
        self.studio.copy_feedback_mut().tick(now);
        if let Some(remaining) = self.studio.copy_feedback().remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        crate::ui_panels::render_header(self, ctx);
        crate::ui_panels::render_main_panel(self, ctx);
    }
}
