use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("failed to attach '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("invalid lightbox config: {0}")]
    Config(#[from] serde_json::Error),
}

pub fn window() -> Result<web_sys::Window, LightboxError> {
    web_sys::window().ok_or(LightboxError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, LightboxError> {
    window()?.document().ok_or(LightboxError::NoDocument)
}
