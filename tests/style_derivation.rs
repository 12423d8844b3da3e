use neumorphic_studio::controls::ControlSet;
use neumorphic_studio::css::format_css;
use neumorphic_studio::shape::ShapeVariant;
use neumorphic_studio::style::derive_style;

fn controls_with(shape: ShapeVariant) -> ControlSet {
    ControlSet {
        shape,
        ..ControlSet::default()
    }
}

/// 既定色 + concave で、inset の暗色・明色 2 層が生成されることを確認する。
#[test]
fn concave_default_color_end_to_end() {
    let style = derive_style(&controls_with(ShapeVariant::Concave));

    assert_eq!(style.shadow1, "inset 10px 10px 20px #9d9d9d");
    assert_eq!(style.shadow2, "inset -10px -10px 20px #ffffff");
    assert_eq!(
        style.box_shadow,
        "inset 10px 10px 20px #9d9d9d, inset -10px -10px 20px #ffffff"
    );
    assert_eq!(style.border_radius, "20px");
    assert_eq!(style.background_color.to_string(), "#e0e0e0");
}

#[test]
fn convex_uses_outer_shadows() {
    let style = derive_style(&controls_with(ShapeVariant::Convex));

    assert_eq!(style.shadow1, "10px 10px 20px #9d9d9d");
    assert_eq!(style.shadow2, "-10px -10px 20px #ffffff");
    assert!(!style.dark_layer().inset);
    assert!(!style.light_layer().inset);
}

#[test]
fn flat_and_convex_are_currently_identical() {
    let mut controls = controls_with(ShapeVariant::Flat);
    controls.distance = 17.0;
    controls.blur = 33.0;
    controls.intensity = 0.07;
    let flat = derive_style(&controls);

    controls.shape = ShapeVariant::Convex;
    let convex = derive_style(&controls);

    assert_eq!(flat, convex);
}

/// pressed は distance / blur を無視して固定値の inset 影になる。
#[test]
fn pressed_ignores_distance_and_blur() {
    let mut controls = controls_with(ShapeVariant::Pressed);
    let reference = derive_style(&controls);
    assert_eq!(reference.shadow1, "inset 5px 5px 10px #9d9d9d");
    assert_eq!(reference.shadow2, "inset -5px -5px 10px #ffffff");

    for (distance, blur) in [(0.0, 0.0), (50.0, 100.0), (3.0, 71.0)] {
        controls.distance = distance;
        controls.blur = blur;
        let style = derive_style(&controls);
        assert_eq!(style.shadow1, reference.shadow1);
        assert_eq!(style.shadow2, reference.shadow2);
    }
}

#[test]
fn zero_distance_keeps_minus_sign_on_light_layer() {
    let mut controls = controls_with(ShapeVariant::Flat);
    controls.distance = 0.0;
    let style = derive_style(&controls);

    assert_eq!(style.shadow1, "0px 0px 20px #9d9d9d");
    assert_eq!(style.shadow2, "-0px -0px 20px #ffffff");
}

#[test]
fn intensity_drives_both_shadow_colors() {
    let mut controls = controls_with(ShapeVariant::Convex);
    controls.base_color = "#808080".parse().unwrap();
    controls.intensity = 0.25;
    let style = derive_style(&controls);

    assert_eq!(style.dark_layer().color.to_string(), "#404040");
    assert_eq!(style.light_layer().color.to_string(), "#c0c0c0");
}

#[test]
fn css_output_matches_template() {
    let controls = ControlSet::default();
    let style = derive_style(&controls);
    let css = format_css(&controls, &style.box_shadow);

    let expected = "\
.neumorphic-element {
    background: #e0e0e0;
    width: 250px;
    height: 250px;
    border-radius: 20px;
    box-shadow: 10px 10px 20px #9d9d9d, -10px -10px 20px #ffffff;
}";
    assert_eq!(css, expected);
}

/// 出力をパースし直して、色・サイズ・角丸がそのまま入っていることを確認する。
#[test]
fn css_output_contains_supplied_values() {
    let controls = ControlSet {
        base_color: "#336699".parse().unwrap(),
        size: 120.0,
        radius: 7.0,
        ..ControlSet::default()
    };
    let css = format_css(&controls, "none");

    let property = |name: &str| {
        css.lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix(&format!("{name}: ")))
            .and_then(|rest| rest.strip_suffix(';'))
            .map(str::to_string)
    };

    assert_eq!(property("background").as_deref(), Some("#336699"));
    assert_eq!(property("width").as_deref(), Some("120px"));
    assert_eq!(property("height").as_deref(), Some("120px"));
    assert_eq!(property("border-radius").as_deref(), Some("7px"));
    assert_eq!(property("box-shadow").as_deref(), Some("none"));
}
