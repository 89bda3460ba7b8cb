// Host-side tests for form parsing and readout text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod form {
    include!("../src/form.rs");
}
mod format {
    include!("../src/format.rs");
}

use form::*;
use lens_core::*;

fn values(pairs: &[(&str, &str)]) -> FormValues {
    let mut v = FormValues::default();
    for (key, value) in pairs {
        let slot = match *key {
            "distance" => &mut v.distance,
            "ground" => &mut v.ground_ratio,
            "sensor" => &mut v.sensor,
            "shell" => &mut v.shell,
            "launch" => &mut v.launch_height,
            "spread" => &mut v.spread,
            "model" => &mut v.model,
            other => panic!("unknown field {other}"),
        };
        *slot = Some(value.to_string());
    }
    v
}

#[test]
fn unusable_numbers_fall_back_to_defaults() {
    assert_eq!(parse_number_or(None, 500.0), 500.0);
    assert_eq!(parse_number_or(Some(""), 500.0), 500.0);
    assert_eq!(parse_number_or(Some("abc"), 500.0), 500.0);
    assert_eq!(parse_number_or(Some("inf"), 500.0), 500.0);
    assert_eq!(parse_number_or(Some("NaN"), 30.0), 30.0);
    assert_eq!(parse_number_or(Some(" 750 "), 500.0), 750.0);
    // zero is a real ground ratio, not a missing one
    assert_eq!(parse_number_or(Some("0"), 30.0), 0.0);
}

#[test]
fn empty_form_matches_calculator_defaults() {
    let v = FormValues::default();
    assert_eq!(v.params(), ShootingParameters::default());
    assert_eq!(v.profile(), FireworkProfile::default());
    assert_eq!(v.model(), BurstModel::Simple);
}

#[test]
fn shell_picker_selects_presets() {
    let v = values(&[("shell", "30"), ("launch", "400"), ("spread", "2")]);
    assert_eq!(v.profile(), FireworkProfile::Preset(ShellSize::by_number(30).unwrap()));
}

#[test]
fn custom_shell_uses_sliders() {
    let v = values(&[("shell", "custom"), ("launch", "400"), ("spread", "2.5")]);
    assert_eq!(
        v.profile(),
        FireworkProfile::Freeform {
            launch_height_m: 400.0,
            spread_shaku: 2.5,
        }
    );

    let sliders_only = values(&[("launch", "oops")]);
    assert_eq!(
        sliders_only.profile(),
        FireworkProfile::Freeform {
            launch_height_m: DEFAULT_LAUNCH_HEIGHT_M,
            spread_shaku: DEFAULT_SPREAD_SHAKU,
        }
    );
}

#[test]
fn sensor_and_model_keys() {
    let v = values(&[("sensor", "m43"), ("model", "banded")]);
    assert_eq!(v.params().sensor, SensorFormat::MicroFourThirds);
    assert_eq!(v.model(), BurstModel::Banded);

    let unknown = values(&[("sensor", "8x10"), ("model", "spiral")]);
    assert_eq!(unknown.params().sensor, SensorFormat::FullFrame);
    assert_eq!(unknown.model(), BurstModel::Simple);
}

#[test]
fn form_to_result_reproduces_golden_case() {
    let v = values(&[
        ("distance", "500"),
        ("ground", "30"),
        ("sensor", "full"),
        ("shell", "custom"),
        ("launch", "300"),
        ("spread", "0"),
        ("model", "simple"),
    ]);
    let calc = Calculator::new(v.params(), v.profile(), v.model());
    assert_eq!(calc.result().focal_length_mm, 27);
}

#[test]
fn readout_strings() {
    assert_eq!(format::angle_info(77.38), "Angle of view: ~77.4° (diagonal)");
    assert_eq!(format::coverage_info(30.0), "Sky: 70% / Ground: 30%");
    assert_eq!(format::burst_info(170.0, 490.0), "Burst: 170–490 m above ground");
}

#[test]
fn readouts_cover_every_display_element() {
    let calc = Calculator::default();
    let readouts = format::readouts(&calc);
    let lookup = |id: &str| {
        readouts
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("missing readout {id}"))
    };
    let mm = calc.result().focal_length_mm.to_string();
    assert_eq!(lookup(constants::ID_LENS_MM), mm);
    assert_eq!(lookup(constants::ID_PREVIEW_LENS), mm);
    assert_eq!(lookup(constants::ID_PREVIEW_DISTANCE), "500");
    assert_eq!(lookup(constants::ID_PREVIEW_GROUND), "30");
    assert_eq!(lookup(constants::ID_COVERAGE_INFO), "Sky: 70% / Ground: 30%");
}
