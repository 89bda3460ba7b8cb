//! Front "composition preview": what the frame roughly looks like.
//!
//! The sky/ground split follows the ground ratio exactly. Glyph placement and
//! size are cosmetic; see [`distance_scale`].

use super::palette::*;
use super::scene::{Paint, Scene, Shape, Stroke, TextAlign};
use crate::calculator::Calculator;
use crate::constants::*;
use glam::DVec2;
use std::f64::consts::TAU;

/// Perspective cue for the preview glyph only. Never feeds the lens result.
#[inline]
pub fn distance_scale(distance_m: f64) -> f64 {
    (PREVIEW_REFERENCE_DISTANCE_M / distance_m).min(1.0)
}

/// Where and how big the firework glyph is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub center: DVec2,
    pub radius: f64,
}

pub fn glyph_placement(calc: &Calculator, width: f64, height: f64) -> GlyphPlacement {
    let sky_height = height * calc.sky_ratio();
    let scale = distance_scale(calc.params().distance_m);
    let total = calc.total_height();
    let center_fraction = calc.center_height() / total;
    let diameter_fraction = calc.spread_m() / total;
    GlyphPlacement {
        center: DVec2::new(width / 2.0, sky_height * center_fraction * scale),
        radius: (sky_height * diameter_fraction / 2.0 * scale).max(0.0),
    }
}

#[inline]
pub fn camera_position(width: f64, height: f64) -> DVec2 {
    DVec2::new(width / 2.0, height - PREVIEW_CAMERA_INSET_PX)
}

pub fn build(calc: &Calculator, width: f64, height: f64) -> Scene {
    let mut scene = Scene::new(width, height);
    let horizon_y = height * calc.sky_ratio();

    scene.push(Shape::Rect {
        origin: DVec2::ZERO,
        size: DVec2::new(width, horizon_y),
        fill: Paint::LinearGradient {
            from: DVec2::ZERO,
            to: DVec2::new(0.0, horizon_y),
            stops: vec![(0.0, SKY_TOP), (0.5, SKY_MID), (1.0, SKY_HORIZON)],
        },
    });
    scene.push(Shape::Rect {
        origin: DVec2::new(0.0, horizon_y),
        size: DVec2::new(width, height - horizon_y),
        fill: Paint::LinearGradient {
            from: DVec2::new(0.0, horizon_y),
            to: DVec2::new(0.0, height),
            stops: vec![(0.0, GROUND_NEAR), (1.0, GROUND_FAR)],
        },
    });
    scene.line(
        DVec2::new(0.0, horizon_y),
        DVec2::new(width, horizon_y),
        Stroke::solid(HORIZON, 2.0),
    );

    // Rule of thirds
    let guide = Stroke::dashed(WHITE.with_alpha(0.2), 1.0, 3.0, 3.0);
    for i in 1..3 {
        let x = width / 3.0 * i as f64;
        scene.line(DVec2::new(x, 0.0), DVec2::new(x, height), guide);
        let y = height / 3.0 * i as f64;
        scene.line(DVec2::new(0.0, y), DVec2::new(width, y), guide);
    }

    let glyph = glyph_placement(calc, width, height);
    for i in 0..PREVIEW_RING_COUNT {
        let radius = glyph.radius * (0.3 + 0.15 * i as f64);
        let alpha = 0.6 - 0.1 * i as f32;
        scene.push(Shape::Circle {
            center: glyph.center,
            radius,
            fill: Some(Paint::Solid(BURST_COLORS[i % BURST_COLORS.len()].with_alpha(alpha))),
            stroke: None,
        });
    }
    for i in 0..PREVIEW_RAY_COUNT {
        let dir = DVec2::from_angle(TAU * i as f64 / PREVIEW_RAY_COUNT as f64);
        scene.line(
            glyph.center + dir * glyph.radius * 0.5,
            glyph.center + dir * glyph.radius * 1.5,
            Stroke::solid(BURST_COLORS[i % BURST_COLORS.len()], 2.0),
        );
    }

    let camera = camera_position(width, height);
    scene.line(camera, glyph.center, Stroke::dashed(WHITE.with_alpha(0.3), 1.0, 5.0, 5.0));
    scene.text(
        (camera + glyph.center) / 2.0,
        format!("{:.0}m", calc.params().distance_m),
        WHITE.with_alpha(0.8),
        14.0,
        TextAlign::Center,
    );
    scene.push(Shape::Circle {
        center: camera,
        radius: PREVIEW_CAMERA_RADIUS_PX,
        fill: Some(Paint::Solid(WHITE)),
        stroke: Some(Stroke::solid(CAMERA_OUTLINE, 2.0)),
    });

    scene
}
