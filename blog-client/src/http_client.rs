use crate::error::BlogClientError;
use crate::transport::{FormPart, MultipartForm, RequestBody, Transport};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct HttpTransport {
    client: Arc<Client>,
}

impl HttpTransport {
    pub fn new() -> Result<Self, BlogClientError> {
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    async fn send(req: RequestBuilder) -> Result<Value, BlogClientError> {
        let resp = req.send().await?;

        if !resp.status().is_success() {
            return Err(BlogClientError::from_http_response(resp).await);
        }

        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn with_body(req: RequestBuilder, body: RequestBody) -> Result<RequestBuilder, BlogClientError> {
        match body {
            RequestBody::Json(value) => Ok(req.json(&value)),
            RequestBody::Multipart(form) => Ok(req.multipart(into_reqwest_form(form)?)),
        }
    }
}

fn into_reqwest_form(form: MultipartForm) -> Result<Form, BlogClientError> {
    let mut out = Form::new();
    for part in form.into_parts() {
        out = match part {
            FormPart::Text { name, value } => out.text(name, value),
            FormPart::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                let mut file = Part::bytes(bytes).file_name(filename);
                if let Some(mime) = content_type {
                    file = file.mime_str(&mime)?;
                }
                out.part(name, file)
            }
        };
    }
    Ok(out)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, BlogClientError> {
        debug!(method = "GET", %url, "sending request");
        Self::send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError> {
        debug!(method = "POST", %url, "sending request");
        let req = Self::with_body(self.client.post(url), body)?;
        Self::send(req).await
    }

    async fn put(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError> {
        debug!(method = "PUT", %url, "sending request");
        let req = Self::with_body(self.client.put(url), body)?;
        Self::send(req).await
    }

    async fn delete(&self, url: &str) -> Result<Value, BlogClientError> {
        debug!(method = "DELETE", %url, "sending request");
        Self::send(self.client.delete(url)).await
    }
}
