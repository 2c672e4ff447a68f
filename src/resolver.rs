use crate::campaign::CampaignSegment;
use crate::constants::{DEFAULT_SEGMENT_FILL_STYLE, FULL_TURN_DEGREES};
use crate::error::ResolutionError;
use crate::partial::PartialWheelSpec;
use crate::source::RawConfigSource;
use crate::wheel_spec::{
    AnimationEvents, Segment, WheelAnimation, WheelAudio, WheelButton, WheelGeometry,
    WheelLayout, WheelPointer, WheelSpec,
};

/// Merge sparse configuration sources, lowest to highest precedence, on top
/// of `defaults`, then normalize and validate. Pure and deterministic:
/// identical inputs always produce an identical spec, and no failure leaves
/// a partially applied result behind.
pub fn resolve(
    sources: &[RawConfigSource],
    defaults: &WheelSpec,
) -> Result<WheelSpec, ResolutionError> {
    log::debug!("resolving wheel config from {} source(s)", sources.len());
    let mut merged = PartialWheelSpec::default();
    for source in sources {
        merged.merge_from(source.to_partial()?);
    }
    let mut spec = finalize(merged, defaults);
    normalize(&mut spec)?;
    Ok(spec)
}

/// Fill every key no source set from the baseline, so no partial structure
/// reaches the renderer.
fn finalize(merged: PartialWheelSpec, defaults: &WheelSpec) -> WheelSpec {
    let d = defaults;
    let wheel = merged.wheel;
    let anim = wheel.animation;
    let d_anim = &d.wheel.animation;

    WheelSpec {
        template_key: merged
            .template_key
            .unwrap_or_else(|| d.template_key.clone()),
        wheel: WheelGeometry {
            outer_radius: wheel.outer_radius.unwrap_or(d.wheel.outer_radius),
            inner_radius: wheel.inner_radius.unwrap_or(d.wheel.inner_radius),
            line_width: wheel.line_width.unwrap_or(d.wheel.line_width),
            stroke_style: wheel
                .stroke_style
                .unwrap_or_else(|| d.wheel.stroke_style.clone()),
            text_font_size: wheel.text_font_size.unwrap_or(d.wheel.text_font_size),
            text_font_family: wheel
                .text_font_family
                .unwrap_or_else(|| d.wheel.text_font_family.clone()),
            text_margin: wheel.text_margin.unwrap_or(d.wheel.text_margin),
            text_alignment: wheel.text_alignment.unwrap_or(d.wheel.text_alignment),
            text_fill_style: wheel
                .text_fill_style
                .unwrap_or_else(|| d.wheel.text_fill_style.clone()),
            rotation_angle: wheel.rotation_angle.unwrap_or(d.wheel.rotation_angle),
            pointer_angle: wheel.pointer_angle.unwrap_or(d.wheel.pointer_angle),
            animation: WheelAnimation {
                kind: anim.kind.unwrap_or_else(|| d_anim.kind.clone()),
                duration_secs: anim.duration.unwrap_or(d_anim.duration_secs),
                spins: anim.spins.unwrap_or(d_anim.spins),
                easing: anim.easing.unwrap_or_else(|| d_anim.easing.clone()),
                direction: anim.direction.unwrap_or(d_anim.direction),
                stop_angle: anim.stop_angle.or(d_anim.stop_angle),
                events: AnimationEvents {
                    on_start: anim
                        .callback_before
                        .or_else(|| d_anim.events.on_start.clone()),
                    on_pin_tick: anim
                        .callback_sound
                        .or_else(|| d_anim.events.on_pin_tick.clone()),
                    // callbackFinished is the more specific completion hook
                    on_finish: anim
                        .callback_finished
                        .or(anim.callback_after)
                        .or_else(|| d_anim.events.on_finish.clone()),
                },
            },
        },
        segments: match merged.segments {
            Some(raw) if !raw.is_empty() => raw.into_iter().map(canonical_segment).collect(),
            _ => d.segments.clone(),
        },
        pointer: WheelPointer {
            style: merged
                .pointer
                .style
                .unwrap_or_else(|| d.pointer.style.clone()),
            color: merged
                .pointer
                .color
                .unwrap_or_else(|| d.pointer.color.clone()),
            position: merged.pointer.position.unwrap_or(d.pointer.position),
            integrated_on_button: merged
                .pointer
                .integrated_on_button
                .unwrap_or(d.pointer.integrated_on_button),
        },
        button: WheelButton {
            size: merged.button.size.unwrap_or(d.button.size),
            position: merged.button.position.unwrap_or(d.button.position),
        },
        audio: WheelAudio {
            key: merged.audio.key.or_else(|| d.audio.key.clone()),
            // the animation-level soundTrigger is legacy; the audio section
            // wins when both are present
            sound_trigger: merged
                .audio
                .sound_trigger
                .or(anim.sound_trigger)
                .unwrap_or(d.audio.sound_trigger),
            pins: merged.audio.pins.unwrap_or(d.audio.pins),
        },
        layout: WheelLayout {
            wheel_position: merged
                .layout
                .wheel_position
                .unwrap_or(d.layout.wheel_position),
        },
    }
}

fn canonical_segment(raw: CampaignSegment) -> Segment {
    Segment {
        fill_style: raw
            .fill_style
            .unwrap_or_else(|| DEFAULT_SEGMENT_FILL_STYLE.to_string()),
        stroke_style: raw.stroke_style,
        line_width: raw.line_width,
        text: raw.text,
        label: raw.label,
        reward_code: reconcile_reward_code(raw.coupon_code, raw.cupon),
        probability: raw.probability,
        losing: raw.losing_segment.unwrap_or(false),
        link: raw.link,
        image: raw.image,
    }
}

/// `coupon_code` is the newer spelling and wins; an empty string counts as
/// absent.
fn reconcile_reward_code(coupon_code: Option<String>, cupon: Option<String>) -> Option<String> {
    let newer = coupon_code.filter(|code| !code.is_empty());
    let legacy = cupon.filter(|code| !code.is_empty());
    if let (Some(n), Some(l)) = (&newer, &legacy) {
        if n != l {
            log::warn!("segment carries coupon_code {n:?} and cupon {l:?}, keeping coupon_code");
        }
    }
    newer.or(legacy)
}

fn normalize(spec: &mut WheelSpec) -> Result<(), ResolutionError> {
    if spec.segments.is_empty() {
        return Err(ResolutionError::EmptySegments);
    }

    let inner = spec.wheel.inner_radius;
    let outer = spec.wheel.outer_radius;
    if !(inner >= 0.0) || !(inner < outer) {
        return Err(ResolutionError::InvalidRadii { inner, outer });
    }

    normalize_probabilities(&mut spec.segments)?;

    spec.wheel.rotation_angle = wrap_angle(spec.wheel.rotation_angle);
    spec.wheel.pointer_angle = wrap_angle(spec.wheel.pointer_angle);
    spec.wheel.animation.stop_angle = spec.wheel.animation.stop_angle.map(wrap_angle);
    Ok(())
}

/// Probability is all-or-nothing across a wheel. Declared weights are
/// rescaled to sum to 1; an all-zero total falls back to a uniform wheel.
fn normalize_probabilities(segments: &mut [Segment]) -> Result<(), ResolutionError> {
    let declared = segments
        .iter()
        .filter(|segment| segment.probability.is_some())
        .count();
    if declared == 0 {
        return Ok(());
    }
    if declared != segments.len() {
        return Err(ResolutionError::InconsistentProbability);
    }
    if segments
        .iter()
        .any(|segment| segment.probability.is_some_and(|p| !p.is_finite() || p < 0.0))
    {
        return Err(ResolutionError::InconsistentProbability);
    }

    let total: f64 = segments.iter().filter_map(|segment| segment.probability).sum();
    if total > 0.0 {
        for segment in segments.iter_mut() {
            segment.probability = segment.probability.map(|p| p / total);
        }
    } else {
        let uniform = 1.0 / segments.len() as f64;
        for segment in segments.iter_mut() {
            segment.probability = Some(uniform);
        }
    }
    Ok(())
}

/// Coerce into `[0, 360)`; negative angles map to their positive equivalent.
fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> WheelSpec {
        WheelSpec::default()
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        use crate::wheel_spec::DEFAULT_WHEEL_SPEC;
        let resolved = resolve(&[], &DEFAULT_WHEEL_SPEC).unwrap();
        assert_eq!(resolved, *DEFAULT_WHEEL_SPEC);
    }

    #[test]
    fn test_resolving_a_resolved_spec_is_idempotent() {
        let baseline = defaults();
        let as_source = RawConfigSource::WheelOverride(serde_json::to_value(&baseline).unwrap());
        let resolved = resolve(&[as_source], &baseline).unwrap();
        assert_eq!(resolved, baseline);
    }

    #[test]
    fn test_higher_precedence_scalar_wins() {
        let a = RawConfigSource::GameConfig(json!({ "outerRadius": 200 }));
        let b = RawConfigSource::GameConfig(json!({ "outerRadius": 300 }));
        let resolved = resolve(&[a, b], &defaults()).unwrap();
        assert_eq!(resolved.wheel.outer_radius, 300.0);
    }

    #[test]
    fn test_substructure_keys_merge_independently() {
        let a = RawConfigSource::GameConfig(json!({ "outerRadius": 300 }));
        let b = RawConfigSource::GameConfig(json!({ "innerRadius": 30 }));
        let resolved = resolve(&[a, b], &defaults()).unwrap();
        assert_eq!(resolved.wheel.outer_radius, 300.0);
        assert_eq!(resolved.wheel.inner_radius, 30.0);
    }

    #[test]
    fn test_segments_replaced_not_merged() {
        let eight: Vec<_> = (0..8).map(|i| json!({ "text": format!("P{i}") })).collect();
        let a = RawConfigSource::GameConfig(json!({ "segments": eight }));
        let b = RawConfigSource::GameConfig(json!({
            "segments": [
                { "text": "X" },
                { "text": "Y" },
                { "text": "Z" }
            ]
        }));
        let resolved = resolve(&[a, b], &defaults()).unwrap();
        assert_eq!(resolved.segments.len(), 3);
        assert_eq!(resolved.segments[0].text.as_deref(), Some("X"));
    }

    #[test]
    fn test_invalid_radii_rejected() {
        let source = RawConfigSource::GameConfig(json!({
            "innerRadius": 100,
            "outerRadius": 50
        }));
        let err = resolve(&[source], &defaults()).unwrap_err();
        assert_eq!(err.code(), "INVALID_RADII");
    }

    #[test]
    fn test_negative_inner_radius_rejected() {
        let source = RawConfigSource::GameConfig(json!({ "innerRadius": -1 }));
        let err = resolve(&[source], &defaults()).unwrap_err();
        assert_eq!(err, ResolutionError::InvalidRadii { inner: -1.0, outer: 240.0 });
    }

    #[test]
    fn test_reward_code_alias_reconciliation() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [{ "cupon": "OLD10", "coupon_code": "NEW10" }]
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.segments[0].reward_code.as_deref(), Some("NEW10"));
    }

    #[test]
    fn test_empty_coupon_code_falls_back_to_cupon() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [{ "cupon": "OLD10", "coupon_code": "" }]
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.segments[0].reward_code.as_deref(), Some("OLD10"));
    }

    #[test]
    fn test_mixed_probability_rejected() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [
                { "text": "A", "probability": 0.5 },
                { "text": "B" }
            ]
        }));
        let err = resolve(&[source], &defaults()).unwrap_err();
        assert_eq!(err.code(), "INCONSISTENT_PROBABILITY");
    }

    #[test]
    fn test_negative_probability_rejected() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [
                { "text": "A", "probability": -0.5 },
                { "text": "B", "probability": 1.5 }
            ]
        }));
        let err = resolve(&[source], &defaults()).unwrap_err();
        assert_eq!(err.code(), "INCONSISTENT_PROBABILITY");
    }

    #[test]
    fn test_probability_weights_rescaled_to_sum_one() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [
                { "text": "A", "probability": 3 },
                { "text": "B", "probability": 1 }
            ]
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.segments[0].probability, Some(0.75));
        assert_eq!(resolved.segments[1].probability, Some(0.25));
    }

    #[test]
    fn test_all_zero_weights_become_uniform() {
        let source = RawConfigSource::GameConfig(json!({
            "segments": [
                { "text": "A", "probability": 0 },
                { "text": "B", "probability": 0 }
            ]
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.segments[0].probability, Some(0.5));
        assert_eq!(resolved.segments[1].probability, Some(0.5));
    }

    #[test]
    fn test_negative_angles_wrap_positive() {
        let source = RawConfigSource::GameConfig(json!({
            "rotationAngle": -90,
            "pointerAngle": 450
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.wheel.rotation_angle, 270.0);
        assert_eq!(resolved.wheel.pointer_angle, 90.0);
    }

    #[test]
    fn test_malformed_source_surfaces_reason() {
        let source = RawConfigSource::GameConfig(json!({ "segments": "none" }));
        let err = resolve(&[source], &defaults()).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_SOURCE");
    }

    #[test]
    fn test_empty_segments_rejected() {
        let mut bare = defaults();
        bare.segments.clear();
        let err = resolve(&[], &bare).unwrap_err();
        assert_eq!(err, ResolutionError::EmptySegments);
    }

    #[test]
    fn test_legacy_callbacks_become_lifecycle_events() {
        let source = RawConfigSource::GameConfig(json!({
            "animation": {
                "type": "spinToStop",
                "callbackBefore": "lockSpinButton",
                "callbackSound": "playTick",
                "callbackAfter": "redraw",
                "callbackFinished": "showPrize"
            }
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        let events = &resolved.wheel.animation.events;
        assert_eq!(events.on_start.as_deref(), Some("lockSpinButton"));
        assert_eq!(events.on_pin_tick.as_deref(), Some("playTick"));
        assert_eq!(events.on_finish.as_deref(), Some("showPrize"));
    }

    #[test]
    fn test_template_then_campaign_then_game_precedence() {
        let template = RawConfigSource::Template("noturno".to_string());
        let campaign = RawConfigSource::Campaign(json!({
            "code": "SUMMER24",
            "campaign_game": {
                "name": "Roleta",
                "config": {
                    "outerRadius": 220,
                    "strokeStyle": "#111111",
                    "segments": [
                        { "fillStyle": "#f00", "text": "A", "coupon_code": "A10" },
                        { "fillStyle": "#0f0", "text": "B", "losingSegment": true }
                    ]
                }
            }
        }));
        let game = RawConfigSource::GameConfig(json!({ "outerRadius": 260 }));
        let resolved = resolve(&[template, campaign, game], &defaults()).unwrap();
        assert_eq!(resolved.template_key, "noturno");
        // game-level override beats the campaign value
        assert_eq!(resolved.wheel.outer_radius, 260.0);
        assert_eq!(resolved.wheel.stroke_style, "#111111");
        assert_eq!(resolved.segments.len(), 2);
        assert_eq!(resolved.segments[0].reward_code.as_deref(), Some("A10"));
        assert!(resolved.segments[1].losing);
        // untouched sections keep their baseline
        assert_eq!(resolved.button.size, 140.0);
    }

    #[test]
    fn test_end_to_end_two_segment_example() {
        let source = RawConfigSource::WheelOverride(json!({
            "wheel": { "outerRadius": 240, "innerRadius": 60 },
            "segments": [
                { "fillStyle": "#f00", "text": "A" },
                { "fillStyle": "#0f0", "text": "B" }
            ]
        }));
        let baseline = defaults();
        let resolved = resolve(&[source], &baseline).unwrap();
        assert_eq!(resolved.segments.len(), 2);
        assert_eq!(resolved.wheel.outer_radius, 240.0);
        assert_eq!(resolved.template_key, baseline.template_key);
    }

    #[test]
    fn test_audio_section_beats_legacy_animation_trigger() {
        use crate::wheel_spec::SoundTrigger;
        let source = RawConfigSource::WheelOverride(json!({
            "wheel": { "animation": { "soundTrigger": "pin" } },
            "audio": { "soundTrigger": "segment" }
        }));
        let resolved = resolve(&[source], &defaults()).unwrap();
        assert_eq!(resolved.audio.sound_trigger, SoundTrigger::Segment);
    }
}
