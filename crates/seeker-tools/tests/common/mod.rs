//! Common test utilities for tool testing

use seeker_common::{SearchEngineConfig, SearchEngineFields};
use seeker_tools::SearchEngineTool;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Once;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

static INIT: Once = Once::new();

pub const SEARCH_PATH: &str = "/search";

/// Initialize logging for tests
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = seeker_common::logging::init_tracing("debug");
    });
}

/// Mock search endpoint
pub struct MockSearchServer {
    server: MockServer,
}

impl MockSearchServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Base URL the tool should be pointed at
    pub fn search_url(&self) -> String {
        format!("{}{}", self.server.uri(), SEARCH_PATH)
    }

    /// Tool wired to this server, ignoring the process environment
    pub fn tool(&self) -> SearchEngineTool {
        tool_for(&self.search_url())
    }

    /// Respond to any GET on the search path with the given status and raw body
    pub async fn respond_raw(&self, status: u16, body: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if anything at all reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

pub fn tool_for(base_url: &str) -> SearchEngineTool {
    let config = SearchEngineConfig::resolve(
        &SearchEngineFields::with_url(base_url),
        &HashMap::<String, String>::new(),
    );
    SearchEngineTool::with_config(config).expect("tool builds")
}

/// Decoded value of the `q` parameter of a recorded request
pub fn query_param_of(request: &Request) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}

pub fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("tool output is JSON")
}
