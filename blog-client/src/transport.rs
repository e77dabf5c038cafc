//! HTTP capability injected into the store.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BlogClientError;
use crate::model::ImageFile;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, BlogClientError>;
    async fn post(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError>;
    async fn put(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError>;
    async fn delete(&self, url: &str) -> Result<Value, BlogClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Ordered multipart payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, filename: impl Into<String>, image: ImageFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            filename: filename.into(),
            content_type: image.content_type,
            bytes: image.bytes,
        });
        self
    }

    pub fn keys(&self) -> Vec<&str> {
        self.parts.iter().map(FormPart::name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name() == name)
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }
}
