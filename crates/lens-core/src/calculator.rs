//! Focal length sizing.
//!
//! The firework's vertical extent is turned into the angle it subtends at the
//! camera, that angle is widened so the burst only fills the sky part of the
//! frame, and the pinhole relation is inverted for the sensor height.
//!
//! [`compute_lens`] is the strict form and reports unusable input as a
//! [`LensError`]. [`recompute`] and [`Calculator`] are what frontends call on
//! every input change: they substitute defaults for unusable input and always
//! return a displayable result.

use crate::constants::*;
use crate::error::LensError;
use crate::firework::{BurstModel, FireworkProfile, VerticalExtent};
use crate::sensor::SensorFormat;
use serde::Serialize;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShootingParameters {
    pub distance_m: f64,
    /// Share of the frame height given to the ground, in percent.
    pub ground_ratio_pct: f64,
    pub sensor: SensorFormat,
}

impl Default for ShootingParameters {
    fn default() -> Self {
        Self {
            distance_m: DEFAULT_DISTANCE_M,
            ground_ratio_pct: DEFAULT_GROUND_RATIO_PCT,
            sensor: SensorFormat::default(),
        }
    }
}

impl ShootingParameters {
    pub fn sky_ratio(&self) -> f64 {
        sky_ratio(self.ground_ratio_pct)
    }

    /// Replace values the calculation cannot use with the frontend defaults.
    pub fn sanitized(self) -> Self {
        let mut out = self;
        if !out.distance_m.is_finite() || out.distance_m <= 0.0 {
            log::warn!(
                "[lens] distance {} unusable, falling back to {DEFAULT_DISTANCE_M} m",
                out.distance_m
            );
            out.distance_m = DEFAULT_DISTANCE_M;
        }
        let g = out.ground_ratio_pct;
        if !g.is_finite() || g < 0.0 {
            log::warn!("[lens] ground ratio {g} unusable, falling back to {DEFAULT_GROUND_RATIO_PCT}%");
            out.ground_ratio_pct = DEFAULT_GROUND_RATIO_PCT;
        } else if g >= 100.0 {
            log::warn!("[lens] ground ratio {g}% leaves no sky, clamping to {MAX_GROUND_RATIO_PCT}%");
            out.ground_ratio_pct = MAX_GROUND_RATIO_PCT;
        }
        out
    }
}

/// Recommended lens for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LensResult {
    pub focal_length_mm: u32,
    /// Diagonal angle of view of `focal_length_mm` on the chosen sensor.
    pub angle_of_view_deg: f64,
    /// Vertical field of view the framing asked for, before rounding the lens.
    pub effective_vertical_angle_rad: f64,
}

#[inline]
pub fn sky_ratio(ground_ratio_pct: f64) -> f64 {
    (100.0 - ground_ratio_pct) / 100.0
}

/// Angle subtended by an object `height_m` tall seen from `distance_m` away.
#[inline]
pub fn subject_angle(height_m: f64, distance_m: f64) -> f64 {
    2.0 * (0.5 * height_m / distance_m).atan()
}

/// Vertical field of view that leaves the subject filling only `sky_ratio` of
/// the frame. The side diagram draws its rays from this same value.
#[inline]
pub fn effective_vertical_angle(height_m: f64, distance_m: f64, sky_ratio: f64) -> f64 {
    subject_angle(height_m, distance_m) / sky_ratio
}

#[inline]
pub fn focal_length_for_angle(sensor_height_mm: f64, angle_rad: f64) -> f64 {
    (sensor_height_mm / 2.0) / (angle_rad / 2.0).tan()
}

#[inline]
pub fn angle_of_view_deg(sensor_diagonal_mm: f64, focal_length_mm: f64) -> f64 {
    (2.0 * (sensor_diagonal_mm / (2.0 * focal_length_mm)).atan()).to_degrees()
}

/// Round to a whole-millimetre lens and report the angle that lens really gives.
fn lens_from_angle(sensor: SensorFormat, angle_rad: f64) -> LensResult {
    let exact = focal_length_for_angle(sensor.height_mm(), angle_rad);
    lens_from_focal_length(sensor, exact, angle_rad)
}

fn lens_from_focal_length(sensor: SensorFormat, exact_mm: f64, angle_rad: f64) -> LensResult {
    let focal_length_mm =
        (exact_mm.round() as u32).clamp(MIN_FOCAL_LENGTH_MM, MAX_FOCAL_LENGTH_MM);
    LensResult {
        focal_length_mm,
        angle_of_view_deg: angle_of_view_deg(sensor.diagonal_mm(), focal_length_mm as f64),
        effective_vertical_angle_rad: angle_rad,
    }
}

/// Strict lens sizing. Fails instead of guessing when the inputs are degenerate.
pub fn compute_lens(
    params: &ShootingParameters,
    extent: &VerticalExtent,
) -> Result<LensResult, LensError> {
    let distance = params.distance_m;
    if !distance.is_finite() || distance <= 0.0 {
        return Err(LensError::InvalidDistance(distance));
    }
    let ground = params.ground_ratio_pct;
    if !ground.is_finite() || !(0.0..100.0).contains(&ground) {
        return Err(LensError::InvalidGroundRatio(ground));
    }
    let height = extent.height_m();
    if !extent.is_usable() {
        return Err(LensError::EmptyExtent(height));
    }

    let angle = effective_vertical_angle(height, distance, params.sky_ratio());
    if angle >= PI {
        return Err(LensError::FieldOfViewTooWide {
            required_deg: angle.to_degrees(),
        });
    }
    let exact = focal_length_for_angle(params.sensor.height_mm(), angle);
    if !exact.is_finite() || exact > MAX_FOCAL_LENGTH_MM as f64 {
        return Err(LensError::FocalLengthTooLong { exact_mm: exact });
    }
    Ok(lens_from_focal_length(params.sensor, exact, angle))
}

/// The profile actually sized, and its extent. Unusable profiles become the default shell.
fn usable_burst(
    profile: &FireworkProfile,
    model: BurstModel,
) -> (FireworkProfile, VerticalExtent) {
    let extent = model.extent(profile);
    if extent.is_usable() {
        return (*profile, extent);
    }
    log::warn!(
        "[lens] burst extent {:.1} m unusable, falling back to the default shell",
        extent.height_m()
    );
    let fallback = FireworkProfile::default();
    (fallback, model.extent(&fallback))
}

/// Forgiving lens sizing for interactive use. Never fails and never yields NaN.
pub fn recompute(
    params: &ShootingParameters,
    profile: &FireworkProfile,
    model: BurstModel,
) -> LensResult {
    let params = params.sanitized();
    let (_, extent) = usable_burst(profile, model);
    resolve(&params, &extent)
}

fn resolve(params: &ShootingParameters, extent: &VerticalExtent) -> LensResult {
    match compute_lens(params, extent) {
        Ok(result) => result,
        Err(LensError::FieldOfViewTooWide { required_deg }) => {
            log::warn!(
                "[lens] needs {required_deg:.1}° vertically, clamping to {MAX_EFFECTIVE_ANGLE_DEG}°"
            );
            lens_from_angle(params.sensor, MAX_EFFECTIVE_ANGLE_DEG.to_radians())
        }
        Err(LensError::FocalLengthTooLong { exact_mm }) => {
            log::warn!("[lens] needs a {exact_mm:.0} mm lens, clamping to {MAX_FOCAL_LENGTH_MM} mm");
            let angle =
                effective_vertical_angle(extent.height_m(), params.distance_m, params.sky_ratio());
            lens_from_focal_length(params.sensor, MAX_FOCAL_LENGTH_MM as f64, angle)
        }
        Err(e) => {
            // Only reachable if a caller skipped sanitizing
            log::warn!("[lens] {e}; using defaults");
            let defaults = ShootingParameters {
                sensor: params.sensor,
                ..ShootingParameters::default()
            };
            let extent = BurstModel::Simple.extent(&FireworkProfile::default());
            let angle = effective_vertical_angle(
                extent.height_m(),
                defaults.distance_m,
                defaults.sky_ratio(),
            );
            lens_from_angle(defaults.sensor, angle)
        }
    }
}

/// Current inputs and their derived lens, kept consistent on every change.
///
/// Each setter recomputes synchronously, so no stale result is ever observable.
#[derive(Clone, Debug)]
pub struct Calculator {
    params: ShootingParameters,
    /// As last set by the caller.
    requested: FireworkProfile,
    /// What the lens was sized for; differs from `requested` after a fallback.
    profile: FireworkProfile,
    model: BurstModel,
    extent: VerticalExtent,
    result: LensResult,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(
            ShootingParameters::default(),
            FireworkProfile::default(),
            BurstModel::default(),
        )
    }
}

impl Calculator {
    pub fn new(params: ShootingParameters, profile: FireworkProfile, model: BurstModel) -> Self {
        let params = params.sanitized();
        let (effective, extent) = usable_burst(&profile, model);
        let result = resolve(&params, &extent);
        Self {
            params,
            requested: profile,
            profile: effective,
            model,
            extent,
            result,
        }
    }

    fn recalculate(&mut self) {
        self.params = self.params.sanitized();
        (self.profile, self.extent) = usable_burst(&self.requested, self.model);
        self.result = resolve(&self.params, &self.extent);
        log::debug!(
            "[lens] d={}m ground={}% H={:.1}m -> {}mm ({:.1}°)",
            self.params.distance_m,
            self.params.ground_ratio_pct,
            self.extent.height_m(),
            self.result.focal_length_mm,
            self.result.angle_of_view_deg
        );
    }

    pub fn set_distance(&mut self, distance_m: f64) {
        self.params.distance_m = distance_m;
        self.recalculate();
    }

    pub fn set_ground_ratio(&mut self, ground_ratio_pct: f64) {
        self.params.ground_ratio_pct = ground_ratio_pct;
        self.recalculate();
    }

    pub fn set_sensor(&mut self, sensor: SensorFormat) {
        self.params.sensor = sensor;
        self.recalculate();
    }

    pub fn set_profile(&mut self, profile: FireworkProfile) {
        self.requested = profile;
        self.recalculate();
    }

    pub fn set_model(&mut self, model: BurstModel) {
        self.model = model;
        self.recalculate();
    }

    /// Replace every input at once; one recompute.
    pub fn update(&mut self, params: ShootingParameters, profile: FireworkProfile, model: BurstModel) {
        self.params = params;
        self.requested = profile;
        self.model = model;
        self.recalculate();
    }

    pub fn params(&self) -> &ShootingParameters {
        &self.params
    }

    /// Profile the lens was sized for, after any fallback to the default shell.
    pub fn profile(&self) -> &FireworkProfile {
        &self.profile
    }

    pub fn model(&self) -> BurstModel {
        self.model
    }

    pub fn result(&self) -> &LensResult {
        &self.result
    }

    pub fn extent(&self) -> &VerticalExtent {
        &self.extent
    }

    pub fn sky_ratio(&self) -> f64 {
        self.params.sky_ratio()
    }

    pub fn fireworks_top(&self) -> f64 {
        self.extent.top_m
    }

    pub fn fireworks_bottom(&self) -> f64 {
        self.extent.bottom_m
    }

    /// Height from the ground to the top of the burst.
    pub fn total_height(&self) -> f64 {
        self.extent.top_m
    }

    pub fn center_height(&self) -> f64 {
        self.extent.center_m
    }

    pub fn spread_m(&self) -> f64 {
        self.profile.spread_m()
    }

    /// Vertical field of view to draw; identical to the one the lens was sized from.
    pub fn field_of_view_rad(&self) -> f64 {
        self.result.effective_vertical_angle_rad
    }

    pub fn report(&self) -> Report {
        Report {
            params: self.params,
            sky_ratio: self.sky_ratio(),
            model: self.model,
            profile: self.profile,
            extent: self.extent,
            result: self.result,
        }
    }
}

/// Serializable snapshot of a [`Calculator`].
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub params: ShootingParameters,
    pub sky_ratio: f64,
    pub model: BurstModel,
    pub profile: FireworkProfile,
    pub extent: VerticalExtent,
    pub result: LensResult,
}
