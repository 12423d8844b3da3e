#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use eframe::NativeOptions;
use neumorphic_studio::cli::{parse_cli_args, render_cli_output, CliCommand, USAGE};
use neumorphic_studio::config::{load_or_create_config, Config};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // CLI モード: `--css <#rrggbb> ...` が指定されている場合は GUI を起動せず、
    // CSS（または --json でスタイルレコード）を標準出力に表示して終了する。
    if try_handle_cli() {
        return Ok(());
    }

    let config = load_or_create_config().unwrap_or_else(|e| {
        log::warn!("Failed to load settings, using defaults: {e}");
        Config::default()
    });
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Neumorphic Studio",
        options,
        Box::new(move |cc| Ok(Box::new(neumorphic_studio::app::MyApp::new(cc, config)))),
    )
}

/// CLI 引数を処理する。CLI として扱った場合は true を返す（GUI は起動しない）。
fn try_handle_cli() -> bool {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_cli_args(&args) {
        Ok(CliCommand::Gui) => false,
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            true
        }
        Ok(CliCommand::Render { controls, json }) => {
            match render_cli_output(&controls, json) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("Error while rendering output: {e}"),
            }
            true
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            true
        }
    }
}
