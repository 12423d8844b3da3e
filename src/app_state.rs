//! アプリケーション状態 (`MyApp`) と初期化ロジックをまとめたモジュール。

use eframe::CreationContext;

use crate::app_style::setup_style;
use crate::config::Config;
use crate::copy_feedback::CopyFeedback;
use crate::studio::Studio;
use crate::ui_theme::ChromePalette;

pub struct MyApp {
    pub config: Config,
    /// UI から独立したモデル（コントロール値・Copied フラグ・副作用キュー）
    pub studio: Studio,
    /// 現在のベースカラーから導出したクローム配色
    pub palette: ChromePalette,
    /// カラーピッカーの編集バッファ
    pub picker_rgb: [u8; 3],
}

impl MyApp {
    /// `config` は `main` で読み込み済みのものを受け取る。
    pub fn new(cc: &CreationContext<'_>, config: Config) -> Self {
        let studio = Studio::new(CopyFeedback::new(config.copied_feedback_duration()));
        let palette = ChromePalette::from_base(studio.controls().base_color);
        setup_style(&cc.egui_ctx, &palette);

        MyApp {
            picker_rgb: studio.controls().base_color.to_array(),
            config,
            studio,
            palette,
        }
    }
}
