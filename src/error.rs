//! ドメイン層のエラー型。

/// 色・形状の入力境界で発生するエラー。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),
    #[error("unknown shape: {0:?} (expected flat, convex, concave or pressed)")]
    UnknownShape(String),
}

/// クリップボード書き込みの失敗。UI を止めず、通知とログにだけ反映する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// CLI 引数の解釈エラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },
    #[error("--css <#rrggbb> is required")]
    MissingColor,
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}
