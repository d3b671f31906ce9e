//! In-memory transport shared by the core unit tests.

use crate::domain::model::{HttpRequest, HttpResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{ApiFailure, ApiResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(u16, serde_json::Value),
    Raw(u16, &'static str),
    Unreachable,
    Delayed(Duration, Box<Reply>),
}

#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    completed: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn on(&self, url: &str, reply: Reply) {
        self.replies.lock().await.insert(url.to_string(), reply);
    }

    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn hits(&self, url: &str) -> usize {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    /// Number of sends that ran to completion (were not dropped mid-flight).
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

fn resolve(reply: Reply) -> (Option<Duration>, ApiResult<HttpResponse>) {
    match reply {
        Reply::Json(status, body) => (
            None,
            Ok(HttpResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }),
        ),
        Reply::Raw(status, body) => (
            None,
            Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
        ),
        Reply::Unreachable => (
            None,
            Err(ApiFailure::Network("connection refused".to_string())),
        ),
        Reply::Delayed(delay, inner) => {
            let (_, outcome) = resolve(*inner);
            (Some(delay), outcome)
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let reply = self
            .replies
            .lock()
            .await
            .get(&request.url)
            .cloned()
            .unwrap_or(Reply::Unreachable);
        self.requests.lock().await.push(request);

        let (delay, outcome) = resolve(reply);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}
