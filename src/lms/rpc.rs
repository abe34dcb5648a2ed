use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::ServerConfig;

/// The standard JSON-RPC path of the LMS web interface.
const JSONRPC_PATH: &str = "/jsonrpc.js";

/// Request timeout. A hung server should fail the command, not wedge it.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Player id used for server-level commands that are not scoped to a player.
pub(crate) const SERVER_SCOPE: &str = "0";

/// Errors that can occur when talking to the LMS JSON-RPC API.
#[derive(Debug, Error)]
pub enum LmsError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LMS server error: {0}")]
    Server(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize)]
struct SlimRequest {
    id: u32,
    method: &'static str,
    params: (String, Vec<Value>),
}

#[derive(Debug, Deserialize)]
struct SlimResponse {
    #[serde(default)]
    result: Value,
}

/// JSON-RPC client for one Lyrion Music Server.
///
/// Cheap to construct and stateless beyond the underlying connection pool;
/// one instance lives for the duration of a single command invocation.
#[derive(Debug, Clone)]
pub struct LmsClient {
    base_url: String,
    http: Client,
}

impl LmsClient {
    /// Creates a client for the given server configuration.
    pub fn new(server: &ServerConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        LmsClient {
            base_url: server.base_url(),
            http,
        }
    }

    /// Sends one `slim.request` command and returns the `result` payload.
    ///
    /// `player_id` is the target player's MAC address, or [`SERVER_SCOPE`]
    /// for server-level commands. `command` is the raw term array, e.g.
    /// `["playlist", "index", "+1"]`.
    pub(crate) async fn request(
        &self,
        player_id: &str,
        command: Vec<Value>,
    ) -> Result<Value, LmsError> {
        let request = SlimRequest {
            id: 1,
            method: "slim.request",
            params: (player_id.to_string(), command),
        };

        let url = format!("{}{}", self.base_url, JSONRPC_PATH);
        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LmsError::Server(format!("HTTP {}: {}", status, body)));
        }

        let parsed: SlimResponse = response
            .json()
            .await
            .map_err(|e| LmsError::Parse(e.to_string()))?;
        Ok(parsed.result)
    }

    /// Convenience wrapper for commands whose terms are all strings.
    pub(crate) async fn command(
        &self,
        player_id: &str,
        terms: &[&str],
    ) -> Result<Value, LmsError> {
        let command = terms
            .iter()
            .map(|t| Value::String((*t).to_string()))
            .collect();
        self.request(player_id, command).await
    }

    /// Issues a `<field> ?` query and returns the `_<field>` answer, e.g.
    /// `["title", "?"]` → `result["_title"]`.
    pub(crate) async fn scalar_query(
        &self,
        player_id: &str,
        field: &str,
    ) -> Result<Value, LmsError> {
        let result = self.command(player_id, &[field, "?"]).await?;
        let key = format!("_{field}");
        Ok(result.get(key.as_str()).cloned().unwrap_or(Value::Null))
    }
}
