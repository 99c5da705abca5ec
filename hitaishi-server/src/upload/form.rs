use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use bytes::Bytes;
use std::collections::HashMap;

use super::UploadError;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// A multipart body split into text fields and file parts.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Drain `multipart`; `limit` is the body cap the route was mounted with.
    pub async fn read(mut multipart: Multipart, limit: usize) -> Result<Self, UploadError> {
        let mut form = Self::default();
        let fail = |e: MultipartError| UploadError::from_multipart(e, limit);

        while let Some(field) = multipart.next_field().await.map_err(fail)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let data = field.bytes().await.map_err(fail)?;
                    form.files.insert(name, UploadedFile { file_name, data });
                }
                None => {
                    let text = field.text().await.map_err(fail)?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Takes a file part, ignoring parts sent with an empty body.
    pub fn file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name).filter(|f| !f.data.is_empty())
    }

    pub fn require_file(&mut self, name: &'static str) -> Result<UploadedFile, UploadError> {
        match self.files.remove(name) {
            None => Err(UploadError::MissingFile { field: name }),
            Some(f) if f.data.is_empty() => Err(UploadError::EmptyFile { field: name }),
            Some(f) => Ok(f),
        }
    }
}
