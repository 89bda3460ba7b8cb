// Host-side tests for shell presets, sensor data and the burst models.

use lens_core::*;

fn shell(height_m: f64, diameter_m: f64) -> FireworkProfile {
    FireworkProfile::Preset(ShellSize {
        number: 0,
        name: "test",
        diameter_m,
        height_m,
    })
}

#[test]
fn banded_model_centres_on_launch_height() {
    let e = BurstModel::Banded.extent(&shell(330.0, 320.0));
    assert_eq!(e.top_m, 490.0);
    assert_eq!(e.bottom_m, 170.0);
    assert_eq!(e.height_m(), 320.0);
    assert_eq!(e.center_m, 330.0);
}

#[test]
fn banded_model_never_goes_below_ground() {
    let e = BurstModel::Banded.extent(&shell(50.0, 200.0));
    assert_eq!(e.bottom_m, 0.0);
    assert_eq!(e.top_m, 150.0);
    assert_eq!(e.height_m(), 150.0);

    for spread in [0.0, 99.0, 100.0, 101.0, 400.0, 2000.0] {
        let e = BurstModel::Banded.extent(&shell(50.0, spread));
        assert!(e.bottom_m >= 0.0, "negative bottom for spread {spread}");
    }
}

#[test]
fn simple_model_uses_rated_height_from_ground() {
    let e = BurstModel::Simple.extent(&shell(330.0, 280.0));
    assert_eq!(e.top_m, 330.0);
    assert_eq!(e.bottom_m, 0.0);
    assert_eq!(e.height_m(), 330.0);
    assert_eq!(e.center_m, 165.0);
}

#[test]
fn freeform_spread_converts_from_shaku() {
    let p = FireworkProfile::Freeform {
        launch_height_m: 300.0,
        spread_shaku: 2.0,
    };
    assert!((p.spread_m() - 6.06).abs() < 1e-12);
    assert!((shaku_to_m(1.0) - SHAKU_M).abs() < 1e-12);
    let e = BurstModel::Banded.extent(&p);
    assert!((e.top_m - 303.03).abs() < 1e-9);
    assert!((e.bottom_m - 296.97).abs() < 1e-9);
}

#[test]
fn zero_spread_band_is_unusable() {
    let p = FireworkProfile::Freeform {
        launch_height_m: 300.0,
        spread_shaku: 0.0,
    };
    assert!(!BurstModel::Banded.extent(&p).is_usable());
    assert!(BurstModel::Simple.extent(&p).is_usable());
}

#[test]
fn shell_table_is_ordered_and_has_default() {
    for pair in SHELL_SIZES.windows(2) {
        assert!(pair[0].number < pair[1].number);
        assert!(pair[0].diameter_m < pair[1].diameter_m);
    }
    assert_eq!(ShellSize::default().number, DEFAULT_SHELL_NUMBER);
    assert_eq!(ShellSize::by_number(40).map(|s| s.height_m), Some(700.0));
    assert!(ShellSize::by_number(7).is_none());
}

#[test]
fn sensor_dimensions_are_fixed_and_positive() {
    for s in SensorFormat::ALL {
        assert!(s.width_mm() > s.height_mm() && s.height_mm() > 0.0);
        assert_eq!(SensorFormat::from_key(s.key()), Some(s));
    }
    assert!((SensorFormat::FullFrame.diagonal_mm() - 43.27).abs() < 0.01);
    assert!((SensorFormat::ApsC.diagonal_mm() - 28.35).abs() < 0.01);
    assert!((SensorFormat::MicroFourThirds.diagonal_mm() - 21.64).abs() < 0.01);
}

#[test]
fn keys_parse_leniently() {
    assert_eq!(SensorFormat::from_key(" APSC "), Some(SensorFormat::ApsC));
    assert_eq!(SensorFormat::from_key("medium"), None);
    assert_eq!(BurstModel::from_key("Banded"), Some(BurstModel::Banded));
    assert_eq!(BurstModel::from_key(BurstModel::Simple.key()), Some(BurstModel::Simple));
    assert_eq!(BurstModel::from_key("ring"), None);
}
