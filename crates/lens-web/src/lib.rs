#![cfg(target_arch = "wasm32")]
use lens_core::Calculator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod form;
mod format;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lens-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let preview = frame::Surface::from_id(&document, constants::ID_PREVIEW_CANVAS)?;
    let side = frame::side_surface(&document);

    let frame = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        calc: Calculator::default(),
        preview,
        side,
    }));

    events::wire_inputs(&document, &frame);
    events::wire_resize(&frame);

    frame.borrow_mut().refresh();
    {
        let f = frame.borrow();
        let r = f.calc.result();
        log::info!(
            "[lens] initial {}mm ({:.1}°) for {:.0}m",
            r.focal_length_mm,
            r.angle_of_view_deg,
            f.calc.params().distance_m
        );
    }
    Ok(())
}
