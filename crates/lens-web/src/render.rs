//! Paints a [`Scene`] onto a 2D canvas context, one call sequence per shape.

use crate::constants::FONT_FAMILY;
use glam::DVec2;
use lens_core::views::{Paint, Scene, Shape, Stroke};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

fn apply_fill(ctx: &web::CanvasRenderingContext2d, paint: &Paint) {
    match paint {
        Paint::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
        Paint::LinearGradient { from, to, stops } => {
            let gradient = ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
            for (offset, color) in stops {
                _ = gradient.add_color_stop(*offset, &color.to_css());
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
}

fn apply_stroke(ctx: &web::CanvasRenderingContext2d, stroke: &Stroke) {
    ctx.set_stroke_style_str(&stroke.color.to_css());
    ctx.set_line_width(stroke.width);
    let dash = js_sys::Array::new();
    if let Some([on, off]) = stroke.dash {
        dash.push(&JsValue::from_f64(on));
        dash.push(&JsValue::from_f64(off));
    }
    _ = ctx.set_line_dash(&dash);
}

fn trace_polygon(ctx: &web::CanvasRenderingContext2d, points: &[DVec2]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
        for p in iter {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}

pub fn paint_shape(ctx: &web::CanvasRenderingContext2d, shape: &Shape) {
    match shape {
        Shape::Rect { origin, size, fill } => {
            apply_fill(ctx, fill);
            ctx.fill_rect(origin.x, origin.y, size.x, size.y);
        }
        Shape::Line { from, to, stroke } => {
            apply_stroke(ctx, stroke);
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            if *radius <= 0.0 {
                return;
            }
            ctx.begin_path();
            _ = ctx.arc(center.x, center.y, *radius, 0.0, TAU);
            if let Some(fill) = fill {
                apply_fill(ctx, fill);
                ctx.fill();
            }
            if let Some(stroke) = stroke {
                apply_stroke(ctx, stroke);
                ctx.stroke();
            }
        }
        Shape::Polygon { points, fill } => {
            trace_polygon(ctx, points);
            apply_fill(ctx, fill);
            ctx.fill();
        }
        Shape::Text {
            anchor,
            text,
            color,
            size_px,
            align,
        } => {
            ctx.set_font(&format!("{size_px}px {FONT_FAMILY}"));
            ctx.set_text_align(align.as_css());
            ctx.set_fill_style_str(&color.to_css());
            _ = ctx.fill_text(text, anchor.x, anchor.y);
        }
    }
}

/// Clear the backing store and paint `scene`, scaling CSS pixels by `dpr`.
pub fn paint_scene(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
    dpr: f64,
) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    for shape in &scene.shapes {
        paint_shape(ctx, shape);
    }
    _ = ctx.set_line_dash(&js_sys::Array::new());
}
