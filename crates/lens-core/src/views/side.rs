//! Side elevation: camera on the ground, the burst band at the shooting
//! distance, and the vertical field of view the recommended lens covers.

use super::palette::*;
use super::scene::{Paint, Scene, Shape, Stroke, TextAlign};
use crate::calculator::Calculator;
use crate::constants::*;
use glam::DVec2;

const MAX_TICKS: f64 = 10.0;

/// Metre-to-pixel mapping for one canvas size. Axes are scaled independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideLayout {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
    pub camera: DVec2,
    pub max_distance_m: f64,
    pub max_height_m: f64,
    /// Pixels per metre along the ground.
    pub distance_scale: f64,
    /// Pixels per metre of altitude.
    pub height_scale: f64,
}

impl SideLayout {
    pub fn new(calc: &Calculator, width: f64, height: f64) -> Self {
        let ground_y = height - SIDE_MARGIN_PX;
        let camera = DVec2::new(SIDE_MARGIN_PX + SIDE_CAMERA_OFFSET_PX, ground_y);
        // Headroom can overflow for extreme inputs; spans must stay finite
        let max_distance_m = (calc.params().distance_m * SIDE_DISTANCE_HEADROOM)
            .clamp(SIDE_MIN_DISTANCE_SPAN_M, f64::MAX);
        let max_height_m = (calc.total_height() * SIDE_HEIGHT_HEADROOM).min(f64::MAX);
        let usable_w = (width - SIDE_MARGIN_PX * 2.0 - SIDE_TRAILING_PAD_PX).max(1.0);
        let usable_h = (ground_y - SIDE_MARGIN_PX).max(1.0);
        Self {
            width,
            height,
            ground_y,
            camera,
            max_distance_m,
            max_height_m,
            distance_scale: usable_w / max_distance_m,
            height_scale: usable_h / max_height_m,
        }
    }

    /// Screen position of a point `distance_m` out from the camera and `height_m` up.
    #[inline]
    pub fn to_screen(&self, distance_m: f64, height_m: f64) -> DVec2 {
        DVec2::new(
            self.camera.x + distance_m * self.distance_scale,
            self.ground_y - height_m * self.height_scale,
        )
    }
}

/// End points of the upper and lower field-of-view rays.
pub fn field_of_view_rays(calc: &Calculator, layout: &SideLayout) -> (DVec2, DVec2) {
    let half = calc.field_of_view_rad() / 2.0;
    let d = calc.params().distance_m;
    (
        layout.to_screen(d, d * half.tan()),
        layout.to_screen(d, -d * half.tan()),
    )
}

/// Tick step starting at `base` and doubling until at most `MAX_TICKS` fit in `span`.
pub fn tick_step(span: f64, base: f64) -> f64 {
    let mut step = base;
    while span / step > MAX_TICKS && step.is_finite() {
        step *= 2.0;
    }
    step
}

/// Tick positions `0, step, 2·step, ..` up to `span`, never more than `MAX_TICKS + 1`.
pub fn ticks(span: f64, base: f64) -> impl Iterator<Item = f64> {
    let span = span.min(f64::MAX);
    let step = tick_step(span, base);
    let count = (span / step).floor().clamp(0.0, MAX_TICKS) as usize;
    (0..=count).map(move |i| i as f64 * step)
}

pub fn build(calc: &Calculator, width: f64, height: f64) -> Scene {
    let mut scene = Scene::new(width, height);
    let layout = SideLayout::new(calc, width, height);
    let ground_y = layout.ground_y;
    let m = SIDE_MARGIN_PX;

    // Axes
    let axis = Stroke::solid(AXIS.with_alpha(0.3), 2.0);
    scene.line(DVec2::new(m, ground_y), DVec2::new(width - m, ground_y), axis);
    scene.line(DVec2::new(m, m), DVec2::new(m, ground_y), axis);

    // Field of view wedge first so the markers stay on top
    let (upper, lower) = field_of_view_rays(calc, &layout);
    scene.push(Shape::Polygon {
        points: vec![layout.camera, upper, lower],
        fill: Paint::Solid(FIELD_OF_VIEW.with_alpha(0.1)),
    });
    let ray = Stroke::dashed(FIELD_OF_VIEW.with_alpha(0.6), 2.0, 5.0, 5.0);
    scene.line(layout.camera, upper, ray);
    scene.line(layout.camera, lower, ray);

    // Burst band
    let d = calc.params().distance_m;
    let top = layout.to_screen(d, calc.fireworks_top());
    let bottom = layout.to_screen(d, calc.fireworks_bottom());
    let center = layout.to_screen(d, calc.center_height());
    scene.line(top, bottom, Stroke::solid(BAND, 3.0));
    let cap = DVec2::new(SIDE_BAND_CAP_HALF_WIDTH_PX, 0.0);
    for end in [top, bottom] {
        scene.line(end - cap, end + cap, Stroke::solid(BAND.with_alpha(0.5), 2.0));
        scene.dot(end, 4.0, BAND_END);
    }
    scene.dot(center, 6.0, BAND);

    // Ground distance
    let target = layout.to_screen(d, 0.0);
    scene.line(layout.camera, target, Stroke::dashed(DISTANCE.with_alpha(0.5), 1.0, 3.0, 3.0));
    scene.text(
        DVec2::new((layout.camera.x + target.x) / 2.0, ground_y + 30.0),
        format!("{d:.0}m"),
        DISTANCE,
        11.0,
        TextAlign::Center,
    );

    scene.dot(layout.camera, 8.0, CAMERA);
    scene.text(
        layout.camera + DVec2::new(0.0, -14.0),
        "Camera",
        CAMERA,
        10.0,
        TextAlign::Center,
    );

    // Height ticks
    let tick = Stroke::solid(AXIS.with_alpha(0.3), 1.0);
    for h in ticks(layout.max_height_m, SIDE_HEIGHT_TICK_M) {
        let y = ground_y - h * layout.height_scale;
        scene.line(DVec2::new(m - 5.0, y), DVec2::new(m + 5.0, y), tick);
        scene.text(DVec2::new(m - 8.0, y + 3.0), format!("{h:.0}"), LABEL, 10.0, TextAlign::Right);
    }

    // Distance ticks
    for dist in ticks(layout.max_distance_m, SIDE_DISTANCE_TICK_M) {
        let x = layout.camera.x + dist * layout.distance_scale;
        if x >= width - m {
            break;
        }
        scene.line(DVec2::new(x, ground_y - 5.0), DVec2::new(x, ground_y + 5.0), tick);
        scene.text(DVec2::new(x, ground_y + 16.0), format!("{dist:.0}"), LABEL, 10.0, TextAlign::Center);
    }

    scene.text(DVec2::new(m, m - 12.0), "Height (m)", LABEL, 10.0, TextAlign::Left);
    scene.text(
        DVec2::new(width - m, ground_y - 8.0),
        "Distance (m)",
        LABEL,
        10.0,
        TextAlign::Right,
    );

    scene
}
