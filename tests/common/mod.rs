//! Shared test transport: records every request and replies with a canned
//! response, so tests can verify URL assembly and pre-flight behavior
//! without touching the network.

use async_trait::async_trait;
use cobinhood::transport::{Transport, TransportError, TransportRequest};
use cobinhood::{ClientConfig, Cobinhood};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this JSON value.
    Json(Value),
    /// Simulate a connection failure.
    ConnectionFailure,
    /// Simulate a non-JSON response body.
    DecodeFailure,
}

#[derive(Debug)]
pub struct MockTransport {
    reply: MockReply,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn replying(value: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: MockReply::Json(value),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reply: MockReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Number of round trips the dispatcher attempted.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copy of every recorded request.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single recorded request; panics if there is not exactly one.
    pub fn only_request(&self) -> TransportRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            MockReply::Json(value) => Ok(value.clone()),
            MockReply::ConnectionFailure => {
                Err(TransportError::Connection("connection refused".to_string()))
            }
            MockReply::DecodeFailure => {
                Err(TransportError::Decode("expected value at line 1".to_string()))
            }
        }
    }
}

/// A success envelope with an empty result, good enough for URL checks.
pub fn ok_envelope() -> Value {
    json!({"success": true, "result": {}})
}

/// Anonymous client wired to the given mock.
pub fn anonymous_client(transport: Arc<MockTransport>) -> Cobinhood {
    Cobinhood::with_transport(ClientConfig::default(), transport)
}

/// Authenticated client wired to the given mock.
pub fn authenticated_client(token: &str, transport: Arc<MockTransport>) -> Cobinhood {
    let config = ClientConfig::builder().api_key(token).build();
    Cobinhood::with_transport(config, transport)
}
