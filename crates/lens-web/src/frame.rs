use crate::constants::*;
use crate::dom;
use crate::format;
use crate::render;
use lens_core::views::{preview, side};
use lens_core::Calculator;
use web_sys as web;

/// A canvas plus its 2D context.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub dpr: f64,
}

impl Surface {
    pub fn from_id(document: &web::Document, element_id: &str) -> anyhow::Result<Self> {
        let (canvas, ctx) = dom::canvas_by_id(document, element_id)?;
        let dpr = dom::sync_canvas_backing_size(&canvas);
        Ok(Self { canvas, ctx, dpr })
    }

    /// Drawing area in CSS pixels.
    pub fn css_size(&self) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.width().max(1.0), rect.height().max(1.0))
    }

    pub fn resize(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
    }
}

/// Everything one recompute-and-redraw pass touches.
pub struct FrameContext {
    pub document: web::Document,
    pub calc: Calculator,
    pub preview: Surface,
    pub side: Option<Surface>,
}

impl FrameContext {
    /// Re-read every input, recompute, then update readouts and both diagrams.
    pub fn refresh(&mut self) {
        let form = dom::read_form(&self.document);
        self.calc.update(form.params(), form.profile(), form.model());
        for (id, text) in format::readouts(&self.calc) {
            dom::set_text(&self.document, id, &text);
        }
        self.redraw();
    }

    pub fn resize(&mut self) {
        self.preview.resize();
        if let Some(s) = &mut self.side {
            s.resize();
        }
        self.redraw();
    }

    pub fn redraw(&self) {
        let (w, h) = self.preview.css_size();
        let scene = preview::build(&self.calc, w, h);
        render::paint_scene(&self.preview.ctx, &self.preview.canvas, &scene, self.preview.dpr);

        if let Some(s) = &self.side {
            let (w, h) = s.css_size();
            let scene = side::build(&self.calc, w, h);
            render::paint_scene(&s.ctx, &s.canvas, &scene, s.dpr);
        }
    }
}

pub fn side_surface(document: &web::Document) -> Option<Surface> {
    match Surface::from_id(document, ID_SIDE_CANVAS) {
        Ok(s) => Some(s),
        Err(e) => {
            log::info!("side diagram disabled: {e}");
            None
        }
    }
}
