//! `#rrggbb` 形式の色と、その明度調整ロジック。
//!
//! - 影の明暗 2 色は、ベースカラーの各チャネルを比例的に増減させて作ります。
//! - 不正な文字列は `ColorError::InvalidColorFormat` として明示的に失敗させます
//!   （NaN 由来の色がプレビューに流れ込まないようにする）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// 24bit RGB カラー。テキスト表現は常に小文字の `#rrggbb`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`（大文字・小文字どちらも可）をパースする。
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(text.to_string());

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// 各チャネルを `c + c * amount` に動かし、[0, 255] にクランプして四捨五入する。
    ///
    /// - `amount > 0` で白方向、`amount < 0` で黒方向に寄る。
    /// - 比例的な加算なので、`#000000` はどれだけ明るくしても `#000000` のまま。
    pub fn adjust(self, amount: f64) -> Self {
        Self {
            r: adjust_channel(self.r, amount),
            g: adjust_channel(self.g, amount),
            b: adjust_channel(self.b, amount),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn adjust_channel(c: u8, amount: f64) -> u8 {
    let c = f64::from(c);
    let value = (c + c * amount).clamp(0.0, 255.0);
    // 値は常に非負なので、f64::round（0.5 は切り上げ）で十分
    value.round() as u8
}

/// 文字列版の明度調整。入力が `#rrggbb` でなければエラーを返す。
pub fn adjust_color_lightness(hex: &str, amount: f64) -> Result<String, ColorError> {
    Ok(HexColor::parse(hex)?.adjust(amount).to_string())
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
