//! Canned transport for accessor tests

use super::{ApiRequest, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replies with queued results in order and records every request
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<Result<Bytes>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Queue one JSON body per reply
    pub(crate) fn with_bodies(bodies: &[&str]) -> Self {
        let mock = Self::default();
        for body in bodies {
            mock.push(Ok(Bytes::from(body.to_string())));
        }
        mock
    }

    pub(crate) fn push(&self, reply: Result<Bytes>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Bytes> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no reply queued".to_string())))
    }
}
