//! Multipart Payloads
//!
//! An ordered list of form fields, kept inspectable until it is handed to
//! reqwest at send time.

use reqwest::multipart::{Form, Part};

use super::ApiResult;
use crate::upload::UploadImage;

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(UploadImage),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    fields: Vec<(String, FormValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn file(&mut self, name: impl Into<String>, image: UploadImage) -> &mut Self {
        self.fields.push((name.into(), FormValue::File(image)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field names in insertion order (repeats included)
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// First text value under `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, value)| match value {
            FormValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|(_, value)| matches!(value, FormValue::File(_)))
            .count()
    }

    pub fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(image) => {
                    let part = Part::bytes(image.bytes)
                        .file_name(image.name)
                        .mime_str(&image.mime)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_keeps_order_and_repeats() {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", "Air Max")
            .file("images", UploadImage::from_bytes("a.png", "image/png", vec![1]))
            .file("images", UploadImage::from_bytes("b.png", "image/png", vec![2]));

        assert_eq!(payload.names(), vec!["name", "images", "images"]);
        assert_eq!(payload.text_value("name"), Some("Air Max"));
        assert_eq!(payload.text_value("images"), None);
        assert_eq!(payload.file_count(), 2);
        assert!(payload.into_form().is_ok());
    }
}
