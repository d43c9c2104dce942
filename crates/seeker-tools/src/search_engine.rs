//! Search-engine tool
//!
//! Forwards a query to the configured search endpoint as `GET <base>?q=<query>`
//! and hands back the JSON body as text, untouched apart from re-serialization.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use seeker_common::{Result, SearchEngineConfig, SearchEngineFields, SearchQuery, ToolError};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::Tool;

pub const NAME: &str = "search-engine";
pub const DESCRIPTION: &str = "A search engine optimized for comprehensive, accurate, and trusted \
    results. Useful for when you need to answer questions about current events.";

/// Characters `urlencoding` escapes but a URI component may carry bare.
const SUB_DELIMS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query value, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as-is.
pub fn encode_component(value: &str) -> String {
    // `%` itself is always emitted as `%25`, so these sequences only come from the five characters
    SUB_DELIMS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escaped, bare)| {
            encoded.replace(escaped, bare)
        })
}

#[derive(Debug, Clone)]
pub struct SearchEngineTool {
    config: SearchEngineConfig,
    client: Client,
    parameters: Value,
}

impl SearchEngineTool {
    /// Stable type name, independent of the tool name shown to orchestrators.
    pub const TYPE_NAME: &'static str = "SearchEngineResults";

    /// Build from explicit fields, falling back to the process environment.
    pub fn new(fields: &SearchEngineFields) -> Result<Self> {
        Self::with_config(SearchEngineConfig::from_env(fields))
    }

    pub fn with_config(config: SearchEngineConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let parameters = serde_json::to_value(schemars::schema_for!(SearchQuery))?;

        if config.has_endpoint() {
            info!("Initialized search-engine tool: endpoint={}", config.base_url);
        } else {
            warn!(
                "No search engine URL configured; set {} before calling the tool",
                config.env_var
            );
        }

        Ok(Self {
            config,
            client,
            parameters,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Target URL for a query; the query is percent-encoded as the `q` parameter.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}?q={}", self.config.base_url, encode_component(query))
    }

    /// Run one search and return the response body as a JSON string.
    ///
    /// # Errors
    ///
    /// - [`ToolError::Validation`] if the query is empty; nothing is sent
    /// - [`ToolError::MissingEndpoint`] if no base URL was configured
    /// - [`ToolError::Request`] for a non-2xx response carrying `error.message`
    /// - [`ToolError::UnexpectedErrorBody`] for a non-2xx response without it
    /// - [`ToolError::Http`] if the request fails or the body is not JSON
    #[instrument(
        skip_all,
        fields(query_len = request.query.len(), endpoint = %self.config.base_url)
    )]
    pub async fn execute(&self, request: &SearchQuery) -> Result<String> {
        request.validate()?;

        if !self.config.has_endpoint() {
            return Err(ToolError::MissingEndpoint {
                env_var: self.config.env_var.clone(),
            });
        }

        let url = self.request_url(&request.query);
        debug!("Sending search request: query='{}', url={}", request.query, url);

        // Content-Type on a bodyless GET is what the endpoint has always received
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            warn!("Search request failed with status {}", status);
            return Err(match body.pointer("/error/message").and_then(Value::as_str) {
                Some(message) => ToolError::Request {
                    status: status.as_u16(),
                    message: message.to_string(),
                },
                None => ToolError::UnexpectedErrorBody {
                    status: status.as_u16(),
                    body: body.to_string(),
                },
            });
        }

        debug!("Search request succeeded with status {}", status);
        Ok(serde_json::to_string(&body)?)
    }
}

#[async_trait]
impl Tool for SearchEngineTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        self.parameters.clone()
    }

    async fn call(&self, args: Value) -> Result<String> {
        let request = SearchQuery::from_args(&args)?;
        self.execute(&request).await
    }
}
