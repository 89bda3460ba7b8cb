// Readout strings shown next to the diagrams.

use lens_core::Calculator;

pub fn angle_info(angle_of_view_deg: f64) -> String {
    format!("Angle of view: ~{angle_of_view_deg:.1}° (diagonal)")
}

pub fn coverage_info(ground_ratio_pct: f64) -> String {
    format!(
        "Sky: {:.0}% / Ground: {:.0}%",
        100.0 - ground_ratio_pct,
        ground_ratio_pct
    )
}

pub fn burst_info(bottom_m: f64, top_m: f64) -> String {
    format!("Burst: {bottom_m:.0}–{top_m:.0} m above ground")
}

/// All `(element id, text)` pairs for one calculator state.
pub fn readouts(calc: &Calculator) -> Vec<(&'static str, String)> {
    use crate::constants::*;
    let p = calc.params();
    let r = calc.result();
    vec![
        (ID_LENS_MM, r.focal_length_mm.to_string()),
        (ID_ANGLE_INFO, angle_info(r.angle_of_view_deg)),
        (ID_COVERAGE_INFO, coverage_info(p.ground_ratio_pct)),
        (ID_BURST_INFO, burst_info(calc.fireworks_bottom(), calc.fireworks_top())),
        (ID_PREVIEW_DISTANCE, format!("{:.0}", p.distance_m)),
        (ID_PREVIEW_GROUND, format!("{:.0}", p.ground_ratio_pct)),
        (ID_PREVIEW_LENS, r.focal_length_mm.to_string()),
    ]
}
