//! In-memory transport for exercising the accessors without a network.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::{
    client::{ApiRequest, ApiResponse, Transport},
    error::{Error, Result},
};

/// Records every request and answers with canned responses, in order.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl MockTransport {
    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_with(ApiResponse::new(status, body))
    }

    pub(crate) fn respond_with(self, response: ApiResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| Error::Transport("no canned response left".to_string()))
    }
}
