//! `--css` CLI モードの引数解釈と出力生成。
//!
//! - 対応例:
//!   - `neumorphic-studio --css '#e0e0e0' --shape concave --distance 12`
//!   - `neumorphic-studio --css '#336699' --json`
//! - 数値はスライダーと同じ範囲・ステップに揃えてから使う。

use serde::Serialize;

use crate::color::HexColor;
use crate::controls::ControlSet;
use crate::css::format_css;
use crate::error::CliError;
use crate::style::{derive_style, ShadowStyle};

pub const USAGE: &str = "Usage: neumorphic-studio [--css <#rrggbb> [--shape flat|convex|concave|pressed] \
[--size N] [--radius N] [--distance N] [--blur N] [--intensity X] [--json]]";

/// CLI モードとして扱うフラグ（どれかが先頭にあれば `--css` を必須とする）
const RENDER_FLAGS: [&str; 8] = [
    "--css",
    "--shape",
    "--size",
    "--radius",
    "--distance",
    "--blur",
    "--intensity",
    "--json",
];

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// 引数なし（または CLI 用でない引数）: GUI を起動する
    Gui,
    Help,
    Render { controls: ControlSet, json: bool },
}

pub fn parse_cli_args<S: AsRef<str>>(args: &[S]) -> Result<CliCommand, CliError> {
    let Some(first) = args.first().map(|s| s.as_ref()) else {
        return Ok(CliCommand::Gui);
    };
    if first == "--help" || first == "-h" {
        return Ok(CliCommand::Help);
    }
    if !RENDER_FLAGS.contains(&first) {
        return Ok(CliCommand::Gui);
    }

    let mut controls = ControlSet::default();
    let mut json = false;
    let mut has_color = false;
    let mut iter = args.iter().map(|s| s.as_ref());
    while let Some(flag) = iter.next() {
        if flag == "--json" {
            json = true;
            continue;
        }

        let mut value = || {
            iter.next()
                .ok_or_else(|| CliError::MissingValue(flag.to_string()))
        };
        match flag {
            "--css" => {
                controls.base_color = HexColor::parse(value()?)?;
                has_color = true;
            }
            "--shape" => controls.shape = value()?.parse()?,
            "--size" => controls.size = parse_number(flag, value()?)?,
            "--radius" => controls.radius = parse_number(flag, value()?)?,
            "--distance" => controls.distance = parse_number(flag, value()?)?,
            "--blur" => controls.blur = parse_number(flag, value()?)?,
            "--intensity" => controls.intensity = parse_number(flag, value()?)?,
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    if !has_color {
        return Err(CliError::MissingColor);
    }

    Ok(CliCommand::Render {
        controls: controls.clamped(),
        json,
    })
}

fn parse_number(flag: &str, value: &str) -> Result<f64, CliError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::InvalidNumber {
            flag: flag.to_string(),
            value: value.to_string(),
        })
}

/// `--json` 出力の形
#[derive(Serialize, Debug)]
struct CliReport<'a> {
    controls: &'a ControlSet,
    style: ShadowStyle,
    css: String,
}

/// CSS テキスト、または JSON（コントロール値・スタイルレコード・CSS）を返す。
pub fn render_cli_output(controls: &ControlSet, json: bool) -> Result<String, serde_json::Error> {
    let style = derive_style(controls);
    let css = format_css(controls, &style.box_shadow);
    if json {
        serde_json::to_string_pretty(&CliReport {
            controls,
            style,
            css,
        })
    } else {
        Ok(css)
    }
}
