use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

/// アプリの動作設定（`settings.toml`）。
///
/// コントロール値（色・形状・スライダー）はここに含めず、起動のたびに初期値から始まる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// 「Copied!」を表示しておく時間（ミリ秒）
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,
    /// CSS エクスポートの既定ディレクトリ
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_use_timestamp_prefix")]
    pub use_timestamp_prefix: bool,
}

fn default_window_width() -> f32 {
    1100.0
}

fn default_window_height() -> f32 {
    760.0
}

fn default_copied_feedback_ms() -> u64 {
    2000
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_use_timestamp_prefix() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            copied_feedback_ms: default_copied_feedback_ms(),
            export_dir: default_export_dir(),
            use_timestamp_prefix: default_use_timestamp_prefix(),
        }
    }
}

impl Config {
    pub fn copied_feedback_duration(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

pub const SETTINGS_FILE: &str = "settings.toml";

pub fn load_or_create_config() -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    load_or_create_config_at(Path::new(SETTINGS_FILE))
}

/// `path` が存在すれば読み込み、なければ既定値で作成して返す。
pub fn load_or_create_config_at(
    path: &Path,
) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    if path.exists() {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg = toml::from_str(&contents)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config_at(&cfg, path)?;
        log::info!("Created default config at {}", path.display());
        Ok(cfg)
    }
}

pub fn save_config_at(
    cfg: &Config,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let toml_str = toml::to_string_pretty(cfg)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(toml_str.as_bytes())?;
    writer.flush()?;
    Ok(())
}
