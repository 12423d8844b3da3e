use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 影の付け方（形状バリアント）。未知の値はパース時点で弾き、暗黙のフォールバックはしない。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    Flat,
    #[default]
    Convex,
    Concave,
    Pressed,
}

impl ShapeVariant {
    /// UI のボタン並び順
    pub const ALL: [ShapeVariant; 4] = [
        ShapeVariant::Flat,
        ShapeVariant::Convex,
        ShapeVariant::Concave,
        ShapeVariant::Pressed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeVariant::Flat => "flat",
            ShapeVariant::Convex => "convex",
            ShapeVariant::Concave => "concave",
            ShapeVariant::Pressed => "pressed",
        }
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeVariant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ShapeVariant::ALL
            .into_iter()
            .find(|shape| shape.name() == lower)
            .ok_or_else(|| ColorError::UnknownShape(s.to_string()))
    }
}
