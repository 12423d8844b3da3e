use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// エクスポートファイル名（タイムスタンプ接頭辞を除く部分）
pub const EXPORT_FILE_NAME: &str = "neumorphic-element.css";

/// ファイル名の先頭に付けるタイムスタンプ（例: `20260101_120000_`）
pub fn timestamp_prefix() -> String {
    Local::now().format("%Y%m%d_%H%M%S_").to_string()
}

/// `output_dir` 配下に CSS を書き出し、書き出したパスを返す。
///
/// - ディレクトリがなければ作成する（空文字列ならカレントディレクトリ）。
/// - 先頭に生成日時とツールバージョンのコメント行を付ける。
pub fn export_css(
    output_dir: &str,
    css: &str,
    timestamp_prefix: Option<&str>,
) -> io::Result<PathBuf> {
    let base_dir = PathBuf::from(output_dir);
    if !output_dir.is_empty() {
        create_dir_all(&base_dir)?;
    }

    let prefix = timestamp_prefix.unwrap_or("");
    let path = base_dir.join(format!("{prefix}{EXPORT_FILE_NAME}"));
    write_css_file(&path, css)?;
    Ok(path)
}

/// 保存ダイアログで選ばれたパスなど、完全なファイルパスへ書き出す。
pub fn write_css_file(path: &Path, css: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "/* Generated by {} {} at {} */",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "{css}")?;
    writer.flush()?;

    log::info!("Exported CSS to {}", path.display());
    Ok(())
}
