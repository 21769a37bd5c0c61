use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, HtmlInputElement};
use crate::mirror::image::UploadedImage;

#[derive(Debug, Error, PartialEq)]
pub enum MirrorError {
    #[error("no file was selected")]
    NoFile,
    #[error("Could not read {name}: {reason}")]
    Read { name: String, reason: String },
}

impl MirrorError {
    fn read(name: &str, err: JsValue) -> Self {
        MirrorError::Read {
            name: name.to_string(),
            reason: describe_js_error(&err),
        }
    }

    /// Cancelling the picker is not worth telling the user about.
    pub fn is_silent(&self) -> bool {
        matches!(self, MirrorError::NoFile)
    }
}

const UNREADABLE: &str = "the browser refused to read the file";

fn describe_js_error(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| UNREADABLE.to_string())
}

/// Reads the first file of `input` into memory.
pub async fn read_selected_file(input: &HtmlInputElement) -> Result<UploadedImage, MirrorError> {
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or(MirrorError::NoFile)?;
    let name = file.name();

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| MirrorError::read(&name, e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let image = UploadedImage::from_bytes(&file.type_(), &bytes);
    log::debug!("Read {} ({} bytes) into memory", name, image.byte_len());
    Ok(image)
}
