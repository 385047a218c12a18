use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a background could not be mounted. None of these reach the page: the
/// background is decoration, so a failed mount just leaves it stopped.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element with id '{0}'")]
    CanvasNotFound(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(format!("{:?}", value))
    }
}
