use neumorphic_studio::cli::{parse_cli_args, render_cli_output, CliCommand};
use neumorphic_studio::controls::ControlSet;
use neumorphic_studio::error::{CliError, ColorError};
use neumorphic_studio::shape::ShapeVariant;

#[test]
fn no_arguments_starts_the_gui() {
    let args: [&str; 0] = [];
    assert_eq!(parse_cli_args(&args).unwrap(), CliCommand::Gui);
    assert_eq!(parse_cli_args(&["--help"]).unwrap(), CliCommand::Help);
}

#[test]
fn css_mode_parses_and_clamps_controls() {
    let cmd = parse_cli_args(&[
        "--css", "#336699", "--shape", "concave", "--size", "999", "--intensity", "0.2", "--json",
    ])
    .unwrap();

    let CliCommand::Render { controls, json } = cmd else {
        panic!("expected render command, got {cmd:?}");
    };
    assert!(json);
    assert_eq!(controls.base_color.to_string(), "#336699");
    assert_eq!(controls.shape, ShapeVariant::Concave);
    assert_eq!(controls.size, 400.0);
    assert_eq!(controls.intensity, 0.2);
    assert_eq!(controls.radius, ControlSet::default().radius);
}

#[test]
fn css_mode_reports_bad_input() {
    assert_eq!(
        parse_cli_args(&["--css"]).unwrap_err(),
        CliError::MissingValue("--css".to_string())
    );
    assert_eq!(
        parse_cli_args(&["--css", "#zzzzzz"]).unwrap_err(),
        CliError::Color(ColorError::InvalidColorFormat("#zzzzzz".to_string()))
    );
    assert_eq!(
        parse_cli_args(&["--css", "#e0e0e0", "--shape", "round"]).unwrap_err(),
        CliError::Color(ColorError::UnknownShape("round".to_string()))
    );
    assert!(matches!(
        parse_cli_args(&["--css", "#e0e0e0", "--blur", "soft"]).unwrap_err(),
        CliError::InvalidNumber { .. }
    ));
    assert_eq!(
        parse_cli_args(&["--css", "#e0e0e0", "--spread", "3"]).unwrap_err(),
        CliError::UnknownArgument("--spread".to_string())
    );
}

/// `--css` 以外の CLI フラグで始まっても CLI として扱い、`--css` が無ければエラーにする。
#[test]
fn render_flags_in_any_order() {
    let cmd = parse_cli_args(&["--shape", "concave", "--css", "#ffffff"]).unwrap();
    let CliCommand::Render { controls, json } = cmd else {
        panic!("expected render command, got {cmd:?}");
    };
    assert!(!json);
    assert_eq!(controls.shape, ShapeVariant::Concave);
    assert_eq!(controls.base_color.to_string(), "#ffffff");

    assert_eq!(parse_cli_args(&["--json"]).unwrap_err(), CliError::MissingColor);
    assert_eq!(
        parse_cli_args(&["--shape", "concave"]).unwrap_err(),
        CliError::MissingColor
    );
    assert_eq!(parse_cli_args(&["somefile.txt"]).unwrap(), CliCommand::Gui);
}

/// 負の半端な値を渡しても `-0px` は出力されず、影の符号も入れ替わらない。
#[test]
fn small_negative_values_render_as_positive_zero() {
    let cmd = parse_cli_args(&["--css", "#e0e0e0", "--radius", "-0.4", "--distance", "-0.3"])
        .unwrap();
    let CliCommand::Render { controls, .. } = cmd else {
        panic!("expected render command, got {cmd:?}");
    };

    let out = render_cli_output(&controls, false).unwrap();
    assert!(out.contains("border-radius: 0px;"), "{out}");
    assert!(
        out.contains("box-shadow: 0px 0px 20px #9d9d9d, -0px -0px 20px #ffffff;"),
        "{out}"
    );
}

#[test]
fn plain_output_is_the_css_rule() {
    let out = render_cli_output(&ControlSet::default(), false).unwrap();
    assert!(out.starts_with(".neumorphic-element {"));
    assert!(out.contains("box-shadow: 10px 10px 20px #9d9d9d, -10px -10px 20px #ffffff;"));
}

#[test]
fn json_output_contains_style_record() {
    let out = render_cli_output(&ControlSet::default(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["controls"]["base_color"], "#e0e0e0");
    assert_eq!(value["controls"]["shape"], "convex");
    assert_eq!(value["style"]["border_radius"], "20px");
    assert_eq!(value["style"]["background_color"], "#e0e0e0");
    assert_eq!(
        value["style"]["box_shadow"],
        "10px 10px 20px #9d9d9d, -10px -10px 20px #ffffff"
    );
    assert!(value["css"].as_str().unwrap().contains("width: 250px;"));
}
