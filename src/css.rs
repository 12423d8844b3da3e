use crate::controls::ControlSet;

/// CSS ルールのセレクタ名
pub const CSS_SELECTOR: &str = ".neumorphic-element";

/// 固定テンプレートで CSS ルール文字列を生成する（末尾改行なし）。
pub fn format_css(controls: &ControlSet, box_shadow: &str) -> String {
    let css = format!(
        "\n{CSS_SELECTOR} {{\n    background: {color};\n    width: {size}px;\n    height: {size}px;\n    border-radius: {radius}px;\n    box-shadow: {box_shadow};\n}}\n",
        color = controls.base_color,
        size = controls.size,
        radius = controls.radius,
    );
    css.trim().to_string()
}
