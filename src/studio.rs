//! UI から独立したアプリケーションモデル。
//!
//! - `ControlSet` の更新はすべてここのメソッド経由で行う。
//! - ベースカラーが変わったら `PresentationEffect` をキューに積む。
//! - コピー操作の成否と「Copied!」フラグの遷移もここで扱う。

use std::time::Instant;

use crate::clipboard::ClipboardSink;
use crate::color::HexColor;
use crate::controls::ControlSet;
use crate::copy_feedback::CopyFeedback;
use crate::css::format_css;
use crate::error::ClipboardError;
use crate::presentation::PresentationEffect;
use crate::shape::ShapeVariant;
use crate::style::{derive_style, ShadowStyle};

#[derive(Debug, Clone)]
pub struct Studio {
    controls: ControlSet,
    /// テキスト入力欄の内容（不正な値もそのまま保持する）
    color_input: String,
    /// 最後に debug ログへ出した不正入力（同じ値を毎フレーム出さないため）
    last_rejected: Option<String>,
    copy_feedback: CopyFeedback,
    /// UI に表示する一時的な通知（コピー失敗・エクスポート結果など）
    notice: Option<String>,
    effects: Vec<PresentationEffect>,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(CopyFeedback::default())
    }
}

impl Studio {
    /// 起動時にも 1 回ベースカラーを通知し、クロームの色を揃える。
    pub fn new(copy_feedback: CopyFeedback) -> Self {
        let controls = ControlSet::default();
        Self {
            color_input: controls.base_color.to_string(),
            last_rejected: None,
            copy_feedback,
            notice: None,
            effects: vec![PresentationEffect::BaseColorChanged(controls.base_color)],
            controls,
        }
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn style(&self) -> ShadowStyle {
        derive_style(&self.controls)
    }

    pub fn css(&self) -> String {
        format_css(&self.controls, &self.style().box_shadow)
    }

    pub fn set_base_color(&mut self, color: HexColor) {
        self.color_input = color.to_string();
        self.last_rejected = None;
        self.apply_base_color(color);
    }

    fn apply_base_color(&mut self, color: HexColor) {
        if self.controls.base_color != color {
            self.controls.base_color = color;
            self.effects.push(PresentationEffect::BaseColorChanged(color));
        }
    }

    pub fn color_input(&self) -> &str {
        &self.color_input
    }

    /// テキスト入力欄の更新。パースできた場合だけベースカラーに反映する。
    ///
    /// 不正な値のときは直前の有効な色を保ち、false を返す。
    pub fn set_color_input(&mut self, text: &str) -> bool {
        self.color_input = text.to_string();
        match HexColor::parse(text.trim()) {
            Ok(color) => {
                self.last_rejected = None;
                self.apply_base_color(color);
                true
            }
            Err(e) => {
                if self.last_rejected.as_deref() != Some(text) {
                    log::debug!("{e}");
                    self.last_rejected = Some(text.to_string());
                }
                false
            }
        }
    }

    pub fn color_input_is_valid(&self) -> bool {
        HexColor::parse(self.color_input.trim()).is_ok()
    }

    pub fn set_shape(&mut self, shape: ShapeVariant) {
        self.controls.shape = shape;
    }

    /// スライダー類の数値をまとめて更新する（範囲・ステップに揃えてから反映）。
    pub fn update_controls(&mut self, f: impl FnOnce(&mut ControlSet)) {
        let mut next = self.controls;
        f(&mut next);
        let next = next.clamped();
        let color = next.base_color;
        self.controls = ControlSet {
            base_color: self.controls.base_color,
            ..next
        };
        if color != self.controls.base_color {
            self.set_base_color(color);
        }
    }

    /// すべてのコントロールを初期値に戻す。Copied 表示には触れない。
    pub fn reset(&mut self) {
        let before = self.controls.base_color;
        self.controls.reset();
        self.color_input = self.controls.base_color.to_string();
        self.last_rejected = None;
        if before != self.controls.base_color {
            self.effects
                .push(PresentationEffect::BaseColorChanged(self.controls.base_color));
        }
        log::info!("Controls reset to defaults");
    }

    /// 現在の CSS をクリップボードに書き込む。
    ///
    /// - 成功: Copied フラグを立て（期限は `now + duration`）、通知を消す。
    /// - 失敗: フラグは変えず、通知を残してエラーを返す。
    pub fn copy_css(
        &mut self,
        sink: &mut dyn ClipboardSink,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let css = self.css();
        match sink.write_text(&css) {
            Ok(()) => {
                self.copy_feedback.mark_copied(now);
                self.notice = None;
                log::info!("Copied CSS to clipboard ({} bytes)", css.len());
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to copy text: {e}");
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    pub fn copy_feedback_mut(&mut self) -> &mut CopyFeedback {
        &mut self.copy_feedback
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// 溜まっている副作用を取り出す（呼び出し後キューは空になる）。
    pub fn take_effects(&mut self) -> Vec<PresentationEffect> {
        std::mem::take(&mut self.effects)
    }
}
