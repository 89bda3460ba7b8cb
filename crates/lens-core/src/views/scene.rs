//! Host-independent display list.
//!
//! Views emit [`Shape`]s in canvas pixels (origin top-left, y down). A host
//! only has to know how to paint these five primitives.

use glam::DVec2;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Paint {
    Solid(Rgba),
    LinearGradient {
        from: DVec2,
        to: DVec2,
        stops: Vec<(f32, Rgba)>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// On/off dash lengths; `None` is a solid line.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: Rgba, width: f64, on: f64, off: f64) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Shape {
    Rect {
        origin: DVec2,
        size: DVec2,
        fill: Paint,
    },
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    Circle {
        center: DVec2,
        radius: f64,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<DVec2>,
        fill: Paint,
    },
    Text {
        anchor: DVec2,
        text: String,
        color: Rgba,
        size_px: f64,
        align: TextAlign,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.push(Shape::Line { from, to, stroke });
    }

    pub fn dot(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.push(Shape::Circle {
            center,
            radius,
            fill: Some(Paint::Solid(color)),
            stroke: None,
        });
    }

    pub fn text(&mut self, anchor: DVec2, text: impl Into<String>, color: Rgba, size_px: f64, align: TextAlign) {
        self.push(Shape::Text {
            anchor,
            text: text.into(),
            color,
            size_px,
            align,
        });
    }

    /// Count of shapes matching `pred`; handy for tests and logging.
    pub fn count(&self, pred: impl Fn(&Shape) -> bool) -> usize {
        self.shapes.iter().filter(|s| pred(s)).count()
    }
}
