//! Platform detection and browser/native glue for uploaded images.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("browser refused to create an image URL: {0}")]
    ObjectUrl(String),
}

/// Build a URL the `img` element can display for the given bytes.
///
/// In the browser this is a `blob:` object URL which must be handed back to
/// [`release_image_url`] once the image is no longer shown.
#[cfg(target_arch = "wasm32")]
pub fn image_url(bytes: &[u8], mime: &str) -> Result<String, PlatformError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)
}

/// Native webviews get an inline `data:` URL; nothing needs releasing.
#[cfg(not(target_arch = "wasm32"))]
pub fn image_url(bytes: &[u8], mime: &str) -> Result<String, PlatformError> {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{mime};base64,{encoded}"))
}

#[cfg(target_arch = "wasm32")]
pub fn release_image_url(url: &str) {
    if url.starts_with("blob:") {
        if let Err(err) = web_sys::Url::revoke_object_url(url) {
            tracing::warn!("failed to revoke object URL: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn release_image_url(_url: &str) {}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> PlatformError {
    PlatformError::ObjectUrl(format!("{err:?}"))
}
