//! コアから外側の UI クローム（ウィンドウ背景など）へ送る副作用メッセージ。
//!
//! コア自身はクロームの状態を持たず、`Studio` がキューに積んだ効果を
//! `app` の update ループが毎フレーム取り出して反映します。

use crate::color::HexColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEffect {
    /// `--base-color` 相当。ベースカラーが実際に変わったときだけ送られる。
    BaseColorChanged(HexColor),
}
