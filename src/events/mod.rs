pub mod click;
pub mod orientation;
pub mod pointer;
pub mod scroll;

pub use click::wire_clicks;
pub use orientation::wire_orientation;
pub use pointer::wire_pointermove;
pub use scroll::wire_scroll;

use crate::state::Shared;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub state: Shared,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w.document, w.state.clone());
    wire_orientation(&w.window, w.state.clone());
    wire_scroll(&w.window, w.state.clone());
    wire_clicks(&w.document, w.state);
}
