use crate::partial::PartialWheelSpec;
use crate::wheel_spec::PointerPosition;

/// Look up a named visual preset. Presets bundle colors, text styling and
/// pointer treatment only — never segments, since segment count and order
/// are campaign data.
pub fn preset(key: &str) -> Option<PartialWheelSpec> {
    match key {
        "vibrante" => Some(vibrante()),
        "noturno" => Some(noturno()),
        "classico" => Some(classico()),
        _ => None,
    }
}

/// Bright default look on a light background.
fn vibrante() -> PartialWheelSpec {
    let mut partial = PartialWheelSpec {
        template_key: Some("vibrante".to_string()),
        ..PartialWheelSpec::default()
    };
    partial.wheel.stroke_style = Some("#0f172a".to_string());
    partial.wheel.text_fill_style = Some("#0f172a".to_string());
    partial.pointer.color = Some("#fbbf24".to_string());
    partial.pointer.style = Some("triangle".to_string());
    partial.pointer.position = Some(PointerPosition::Top);
    partial
}

/// Dark look for night-themed campaigns.
fn noturno() -> PartialWheelSpec {
    let mut partial = PartialWheelSpec {
        template_key: Some("noturno".to_string()),
        ..PartialWheelSpec::default()
    };
    partial.wheel.stroke_style = Some("#e2e8f0".to_string());
    partial.wheel.text_fill_style = Some("#f8fafc".to_string());
    partial.wheel.line_width = Some(2.0);
    partial.pointer.color = Some("#818cf8".to_string());
    partial.pointer.style = Some("triangle".to_string());
    partial.pointer.position = Some(PointerPosition::Top);
    partial
}

/// Casino-style red and gold.
fn classico() -> PartialWheelSpec {
    let mut partial = PartialWheelSpec {
        template_key: Some("classico".to_string()),
        ..PartialWheelSpec::default()
    };
    partial.wheel.stroke_style = Some("#7f1d1d".to_string());
    partial.wheel.text_fill_style = Some("#fef3c7".to_string());
    partial.wheel.line_width = Some(3.0);
    partial.pointer.color = Some("#dc2626".to_string());
    partial.pointer.style = Some("arrow".to_string());
    partial.pointer.position = Some(PointerPosition::Top);
    partial
}
