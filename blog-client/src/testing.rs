use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::BlogClientError;
use crate::navigation::Navigator;
use crate::transport::{RequestBody, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<RequestBody>,
}

pub enum StubReply {
    Ok(Value),
    Status(u16, String),
}

/// Replays scripted replies in order and records every request it sees.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, reply: StubReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(
        &self,
        method: &'static str,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<Value, BlogClientError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(StubReply::Ok(value)) => Ok(value),
            Some(StubReply::Status(404, _)) => Err(BlogClientError::NotFound),
            Some(StubReply::Status(status, message)) => {
                Err(BlogClientError::Http { status, message })
            }
            None => panic!("no scripted reply for {method} {url}"),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<Value, BlogClientError> {
        self.answer("GET", url, None)
    }

    async fn post(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError> {
        self.answer("POST", url, Some(body))
    }

    async fn put(&self, url: &str, body: RequestBody) -> Result<Value, BlogClientError> {
        self.answer("PUT", url, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<Value, BlogClientError> {
        self.answer("DELETE", url, None)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
