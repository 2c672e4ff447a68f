use serde::Deserialize;

use crate::campaign::{CampaignAnimation, CampaignSegment};
use crate::wheel_spec::{
    ButtonPosition, PointerPosition, SoundTrigger, TextAlignment, WheelPosition,
};

/// Sparse counterpart of `WheelSpec`: the merge accumulator. A key a source
/// never set stays `None` and later inherits the baseline value.
#[derive(Debug, Clone, Default)]
pub struct PartialWheelSpec {
    pub template_key: Option<String>,
    pub wheel: PartialGeometry,
    pub segments: Option<Vec<CampaignSegment>>,
    pub pointer: PartialPointer,
    pub button: PartialButton,
    pub audio: PartialAudio,
    pub layout: PartialLayout,
}

impl PartialWheelSpec {
    /// Apply `other` on top of `self`. Scalars overwrite; the substructures
    /// merge key-by-key; `segments` is replaced wholesale when `other`
    /// carries a non-empty list (segment count and order are per-campaign,
    /// never merged element-by-element).
    pub fn merge_from(&mut self, other: PartialWheelSpec) {
        overwrite(&mut self.template_key, other.template_key);
        self.wheel.merge_from(other.wheel);
        if let Some(segments) = other.segments {
            if !segments.is_empty() {
                self.segments = Some(segments);
            }
        }
        self.pointer.merge_from(other.pointer);
        self.button.merge_from(other.button);
        self.audio.merge_from(other.audio);
        self.layout.merge_from(other.layout);
    }
}

/// Sparse wheel geometry. Deserializes the nested `wheel` map of a
/// `WheelConfig`-shaped override directly.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialGeometry {
    pub outer_radius: Option<f64>,
    pub inner_radius: Option<f64>,
    pub line_width: Option<f64>,
    pub stroke_style: Option<String>,
    pub rotation_angle: Option<f64>,
    pub pointer_angle: Option<f64>,
    pub text_font_size: Option<f64>,
    pub text_font_family: Option<String>,
    pub text_margin: Option<f64>,
    pub text_alignment: Option<TextAlignment>,
    pub text_fill_style: Option<String>,
    pub animation: CampaignAnimation,
}

impl PartialGeometry {
    pub fn merge_from(&mut self, other: PartialGeometry) {
        overwrite(&mut self.outer_radius, other.outer_radius);
        overwrite(&mut self.inner_radius, other.inner_radius);
        overwrite(&mut self.line_width, other.line_width);
        overwrite(&mut self.stroke_style, other.stroke_style);
        overwrite(&mut self.rotation_angle, other.rotation_angle);
        overwrite(&mut self.pointer_angle, other.pointer_angle);
        overwrite(&mut self.text_font_size, other.text_font_size);
        overwrite(&mut self.text_font_family, other.text_font_family);
        overwrite(&mut self.text_margin, other.text_margin);
        overwrite(&mut self.text_alignment, other.text_alignment);
        overwrite(&mut self.text_fill_style, other.text_fill_style);

        let animation = &mut self.animation;
        overwrite(&mut animation.kind, other.animation.kind);
        overwrite(&mut animation.direction, other.animation.direction);
        overwrite(&mut animation.duration, other.animation.duration);
        overwrite(&mut animation.spins, other.animation.spins);
        overwrite(&mut animation.easing, other.animation.easing);
        overwrite(&mut animation.stop_angle, other.animation.stop_angle);
        overwrite(&mut animation.sound_trigger, other.animation.sound_trigger);
        overwrite(&mut animation.callback_before, other.animation.callback_before);
        overwrite(&mut animation.callback_after, other.animation.callback_after);
        overwrite(&mut animation.callback_finished, other.animation.callback_finished);
        overwrite(&mut animation.callback_sound, other.animation.callback_sound);
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPointer {
    pub style: Option<String>,
    pub color: Option<String>,
    pub position: Option<PointerPosition>,
    pub integrated_on_button: Option<bool>,
}

impl PartialPointer {
    pub fn merge_from(&mut self, other: PartialPointer) {
        overwrite(&mut self.style, other.style);
        overwrite(&mut self.color, other.color);
        overwrite(&mut self.position, other.position);
        overwrite(&mut self.integrated_on_button, other.integrated_on_button);
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialButton {
    pub size: Option<f64>,
    pub position: Option<ButtonPosition>,
}

impl PartialButton {
    pub fn merge_from(&mut self, other: PartialButton) {
        overwrite(&mut self.size, other.size);
        overwrite(&mut self.position, other.position);
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAudio {
    pub key: Option<String>,
    pub sound_trigger: Option<SoundTrigger>,
    pub pins: Option<u32>,
}

impl PartialAudio {
    pub fn merge_from(&mut self, other: PartialAudio) {
        overwrite(&mut self.key, other.key);
        overwrite(&mut self.sound_trigger, other.sound_trigger);
        overwrite(&mut self.pins, other.pins);
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialLayout {
    pub wheel_position: Option<WheelPosition>,
}

impl PartialLayout {
    pub fn merge_from(&mut self, other: PartialLayout) {
        overwrite(&mut self.wheel_position, other.wheel_position);
    }
}

fn overwrite<T>(dst: &mut Option<T>, src: Option<T>) {
    if src.is_some() {
        *dst = src;
    }
}
