use crate::constants::INPUT_IDS;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every input change triggers a full recompute and redraw.
pub fn wire_inputs(document: &web::Document, frame: &Rc<RefCell<FrameContext>>) {
    for id in INPUT_IDS {
        // Sliders fire `input` while dragging, selects only fire `change`
        for event in ["input", "change"] {
            let frame = frame.clone();
            dom::add_listener(document, id, event, move || {
                frame.borrow_mut().refresh();
            });
        }
    }
}

pub fn wire_resize(frame: &Rc<RefCell<FrameContext>>) {
    let frame = frame.clone();
    let closure = Closure::wrap(Box::new(move || {
        frame.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
