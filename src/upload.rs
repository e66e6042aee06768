//! Image Uploads
//!
//! Reads picked files into memory with a data-URL preview. All files of one
//! selection are read concurrently and merged once every read resolves.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::try_join_all;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::{ApiError, ApiResult};

/// A picked image, ready for preview and multipart upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// `data:` URL for the `<img>` preview
    pub preview: String,
}

impl UploadImage {
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = "application/octet-stream".to_string();
        }
        let preview = data_url(&mime, &bytes);
        Self {
            name: name.into(),
            mime,
            bytes,
            preview,
        }
    }
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read every file of a `<input type="file">` selection
pub async fn read_files(files: web_sys::FileList) -> ApiResult<Vec<UploadImage>> {
    let picked: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
    try_join_all(picked.into_iter().map(read_file)).await
}

async fn read_file(file: web_sys::File) -> ApiResult<UploadImage> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::FileRead(format!("{}: {:?}", file.name(), e)))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| ApiError::FileRead(format!("{}: not an ArrayBuffer", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadImage::from_bytes(file.name(), file.type_(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_missing_mime_defaults_to_octet_stream() {
        let image = UploadImage::from_bytes("shoe", "", vec![1, 2, 3]);
        assert_eq!(image.mime, "application/octet-stream");
        assert!(image.preview.starts_with("data:application/octet-stream;base64,"));
    }
}
