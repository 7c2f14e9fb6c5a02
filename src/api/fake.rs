//! Recording transport for tests: replays canned responses in order and
//! keeps every request it was handed.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::transport::ApiResponse;
use super::{ApiClient, ApiRequest, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<ApiResult<ApiResponse>>>,
}

impl RecordingTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, msg: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(msg.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Parsed body of the only request sent
    pub fn single_body(&self) -> Value {
        let requests = self.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        let body = requests[0].body.as_deref().expect("request has a body");
        serde_json::from_str(body).expect("request body is JSON")
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("no canned reply left")
    }
}

pub fn client_replying(status: u16, body: &str) -> ApiClient<RecordingTransport> {
    ApiClient::new(RecordingTransport::default().reply(status, body))
}
