//! Canvas client for Pong
//!
//! Finds the canvas, wires pointer input to the player paddle and drives
//! step + draw from `requestAnimationFrame`.
//! Only compiled for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod input;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::BrowserCanvas;
use error::ClientError;
use game_core::{Config, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

type FrameCallback = Closure<dyn FnMut()>;

/// Start the game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    run(canvas_id).map_err(|err| {
        log::error!("failed to start: {err}");
        err.into()
    })
}

fn run(canvas_id: &str) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let canvas = find_canvas(&window, canvas_id)?;
    let ctx = context_2d(&canvas)?;

    // Field is the canvas size at startup; resizes are not tracked
    let config = Config::for_field(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(Game::new(config, seed)));

    input::listen_pointer(&canvas, game.clone())?;
    start_loop(window, game, BrowserCanvas::new(ctx))
}

fn find_canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement, ClientError> {
    let document = window.document().ok_or(ClientError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::CanvasNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ClientError::NotACanvas(id.to_string()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ClientError> {
    canvas
        .get_context("2d")
        .map_err(ClientError::js("getContext(2d)"))?
        .ok_or(ClientError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::NoContext)
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<(), ClientError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_handle| ())
        .map_err(ClientError::js("requestAnimationFrame"))
}

/// Step then draw once per display refresh, for as long as the page lives
fn start_loop(
    window: Window,
    game: Rc<RefCell<Game>>,
    mut canvas: BrowserCanvas,
) -> Result<(), ClientError> {
    // The callback re-registers itself, so it keeps a handle to its own slot
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let own_slot = slot.clone();
    let loop_window = window.clone();

    let callback = FrameCallback::new(move || {
        {
            let mut game = game.borrow_mut();
            game.step();
            game.draw(&mut canvas);
        }

        if let Some(next) = own_slot.borrow().as_ref() {
            if let Err(err) = request_frame(&loop_window, next) {
                log::error!("frame loop stopped: {err}");
            }
        }
    });

    request_frame(&window, &callback)?;
    *slot.borrow_mut() = Some(callback);

    log::info!("frame loop started");
    Ok(())
}
