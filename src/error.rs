use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("config load failed: {0}")]
    Config(String),
    #[error("dom: {0}")]
    Dom(&'static str),
}

#[cfg(target_arch = "wasm32")]
impl SiteError {
    pub(crate) fn storage(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Storage(format!("{value:?}"))
    }
}
