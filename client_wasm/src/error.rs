use thiserror::Error;
use wasm_bindgen::JsValue;

/// Startup failures in the browser host
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("{what} failed: {detail}")]
    Js { what: &'static str, detail: String },
}

impl ClientError {
    /// Wrap a JS exception thrown by a browser call
    pub fn js(what: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |err| ClientError::Js {
            what,
            detail: format!("{:?}", err),
        }
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
