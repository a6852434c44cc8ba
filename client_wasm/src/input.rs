//! Pointer input wiring

use std::cell::RefCell;
use std::rc::Rc;

use game_core::Game;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::error::ClientError;

/// Forward `mousemove` over the canvas to the game's pointer slot
pub fn listen_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), ClientError> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        game.borrow_mut()
            .pointer_moved(event.client_y() as f32, rect.top() as f32);
    });

    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(ClientError::js("addEventListener(mousemove)"))?;

    // Lives as long as the page
    on_move.forget();
    Ok(())
}
