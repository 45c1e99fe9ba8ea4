use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Everything that can go wrong while bringing the page up.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// Shader failed to compile; carries the driver's info log.
    ShaderCompile(String),
    /// Program failed to link; carries the driver's info log.
    ProgramLink(String),
    /// No WebGL2 context could be obtained from the canvas.
    UnsupportedContext,
    /// A required DOM element is absent (or not of the expected type).
    MissingElement(String),
    EmptyPlaylist,
    InvalidSetting { key: String, value: String },
    /// Anything thrown across the JS boundary.
    Js(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageError::ShaderCompile(log) => write!(f, "shader compile failed: {}", log),
            PageError::ProgramLink(log) => write!(f, "program link failed: {}", log),
            PageError::UnsupportedContext => write!(f, "WebGL2 not supported"),
            PageError::MissingElement(what) => write!(f, "element not found: {}", what),
            PageError::EmptyPlaylist => write!(f, "playlist is empty"),
            PageError::InvalidSetting { key, value } => {
                write!(f, "invalid value {:?} for setting {:?}", value, key)
            }
            PageError::Js(msg) => write!(f, "js error: {}", msg),
        }
    }
}

impl Error for PageError {}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => PageError::Js(s),
            None => PageError::Js(format!("{:?}", value)),
        }
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
