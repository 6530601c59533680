//! Task board API client (minimal adapter).
//!
//! Provides the two calls the simulator needs against a locally running task
//! board server: task creation and log submission. No retries and no timeout
//! tuning; transport faults surface as errors to the caller.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Server-assigned task identifier.
///
/// The board may hand back a JSON number or a stringified chain event ID;
/// either way it is echoed verbatim into log lines and the completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(serde_json::Value);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(serde_json::Value::from(id))
    }
}

/// Parsed response of `POST /task`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskCreated {
    pub success: bool,

    #[serde(rename = "taskId")]
    pub task_id: Option<TaskId>,

    /// Raw response body, kept so rejections can be reported verbatim.
    #[serde(skip)]
    pub raw: String,
}

#[derive(Clone)]
pub struct TaskBoardClient {
    base_url: String,
    client: reqwest::Client,
}

impl TaskBoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the board to create a task with the given description.
    pub async fn create_task(&self, description: &str) -> anyhow::Result<TaskCreated> {
        let url = format!("{}/task", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "description": description }))
            .send()
            .await
            .context("Failed to call task board /task")?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("task board /task failed: {} - {}", status, text);
        }

        let mut created: TaskCreated = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse /task response: {}", text))?;
        created.raw = text;
        Ok(created)
    }

    /// Submit the combined encrypted log payload for a task.
    ///
    /// The payload is opaque to this client; the board decides what to do
    /// with it. The response is returned unvalidated.
    pub async fn complete_task(
        &self,
        task_id: &TaskId,
        log_data: &str,
    ) -> anyhow::Result<serde_json::Value> {
        let url = format!("{}/complete", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "taskId": task_id, "logData": log_data }))
            .send()
            .await
            .context("Failed to call task board /complete")?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("task board /complete failed: {} - {}", status, text);
        }

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse /complete response: {}", text))
    }
}
