//! プラットフォームのクリップボード書き込みを抽象化するトレイト。
//!
//! コア側は「テキストを渡して成否を受け取る」だけで、実際のアクセスは実装側に任せます。

use eframe::egui;

use crate::error::ClipboardError;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// egui の出力コマンド経由でクリップボードに書き込む実装。
///
/// egui は書き込み結果を返さないため、空文字列以外は常に成功扱いになる。
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::WriteFailed("nothing to copy".to_string()));
        }
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}
