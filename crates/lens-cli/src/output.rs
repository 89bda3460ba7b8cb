// Text rendering of calculator results.

use lens_core::{
    compute_lens, BurstModel, Calculator, FireworkProfile, LensError, SensorFormat,
    ShootingParameters, SHELL_SIZES,
};
use std::fmt::Write;

fn profile_label(profile: &FireworkProfile) -> String {
    match profile {
        FireworkProfile::Preset(shell) => format!(
            "{} shell ({:.0} m high, {:.0} m across)",
            shell.name, shell.height_m, shell.diameter_m
        ),
        FireworkProfile::Freeform {
            launch_height_m,
            spread_shaku,
        } => format!(
            "launch {:.0} m, spread {:.1} shaku ({:.0} m)",
            launch_height_m,
            spread_shaku,
            profile.spread_m()
        ),
    }
}

pub fn format_report(calc: &Calculator) -> String {
    let p = calc.params();
    let r = calc.result();
    let mut out = String::new();
    _ = writeln!(out, "Recommended lens : {} mm", r.focal_length_mm);
    _ = writeln!(out, "Angle of view    : {:.1}° (diagonal)", r.angle_of_view_deg);
    _ = writeln!(
        out,
        "Vertical field   : {:.1}°",
        r.effective_vertical_angle_rad.to_degrees()
    );
    _ = writeln!(out, "Sensor           : {}", p.sensor.display_name());
    _ = writeln!(out, "Distance         : {:.0} m", p.distance_m);
    _ = writeln!(
        out,
        "Sky / ground     : {:.0}% / {:.0}%",
        calc.sky_ratio() * 100.0,
        p.ground_ratio_pct
    );
    _ = writeln!(out, "Firework         : {}", profile_label(calc.profile()));
    _ = writeln!(
        out,
        "Burst extent     : {:.0}–{:.0} m ({} model)",
        calc.fireworks_bottom(),
        calc.fireworks_top(),
        calc.model().key()
    );
    match compute_lens(p, calc.extent()) {
        Err(e @ LensError::FieldOfViewTooWide { .. }) => {
            _ = writeln!(out, "Note             : {e}; showing the widest lens instead");
        }
        Err(e @ LensError::FocalLengthTooLong { .. }) => {
            _ = writeln!(out, "Note             : {e}; showing the longest lens instead");
        }
        _ => {}
    }
    out
}

/// Focal length for every shell preset on every sensor.
pub fn format_table(distance_m: f64, ground_ratio_pct: f64, model: BurstModel) -> String {
    let mut out = String::new();
    _ = writeln!(
        out,
        "{:.0} m away, {:.0}% ground, {} model",
        distance_m,
        ground_ratio_pct,
        model.key()
    );
    _ = write!(out, "{:<6}", "shell");
    for sensor in SensorFormat::ALL {
        _ = write!(out, "{:>8}", sensor.key());
    }
    _ = writeln!(out);
    for shell in SHELL_SIZES {
        _ = write!(out, "{:<6}", shell.name);
        for sensor in SensorFormat::ALL {
            let params = ShootingParameters {
                distance_m,
                ground_ratio_pct,
                sensor,
            };
            let calc = Calculator::new(params, FireworkProfile::Preset(shell), model);
            _ = write!(out, "{:>6}mm", calc.result().focal_length_mm);
        }
        _ = writeln!(out);
    }
    out
}
