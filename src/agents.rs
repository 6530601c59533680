//! Simulated agent roster.
//!
//! "Agents" here are a fixed roster of names, each contributing one log line
//! for the task. Processing is sequential string generation: there is no
//! concurrency and no inter-agent communication. Each line is encrypted on
//! its own and the blobs are joined positionally, so roster order is part of
//! the observable contract.

use anyhow::Context;
use tracing::{debug, info};

use crate::cipher::{CipherError, LogCipher};
use crate::config::Config;
use crate::taskboard::{TaskBoardClient, TaskId};

/// Fixed agent roster, in submission order.
pub const AGENT_ROSTER: [&str; 3] = ["AgentA", "AgentB", "AgentC"];

/// Outcome of one simulation run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Task was created and logs were submitted; holds the board's response.
    Completed(serde_json::Value),
    /// The board rejected task creation; holds its raw response body.
    Rejected { response: String },
}

/// Plaintext log line for one agent processing one task.
pub fn log_line(agent: &str, task_id: &TaskId) -> String {
    format!("{} is processing task ID: {}", agent, task_id)
}

/// Encrypt one log line per roster entry, preserving roster order.
pub fn encrypt_agent_logs(
    cipher: &LogCipher,
    task_id: &TaskId,
) -> Result<Vec<String>, CipherError> {
    AGENT_ROSTER
        .iter()
        .map(|agent| cipher.encrypt(&log_line(agent, task_id)))
        .collect()
}

/// Join blobs with single newlines, no trailing separator.
pub fn combined_log_payload(blobs: &[String]) -> String {
    blobs.join("\n")
}

/// Encrypt the roster's logs for `task_id` and submit them in one call.
///
/// The joined string is an opaque payload to the completion endpoint and is
/// submitted verbatim.
pub async fn simulate_task(
    client: &TaskBoardClient,
    cipher: &LogCipher,
    task_id: &TaskId,
) -> anyhow::Result<serde_json::Value> {
    let blobs = encrypt_agent_logs(cipher, task_id)?;
    let payload = combined_log_payload(&blobs);

    debug!(agents = AGENT_ROSTER.len(), "submitting encrypted agent logs");
    client.complete_task(task_id, &payload).await
}

/// Run the whole flow: create the task, then simulate and submit the logs.
///
/// On a logical rejection from the board no further call is made. The cipher
/// is constructed here and threaded down by reference, so one key covers all
/// of a run's log lines and nothing outside this call ever holds it.
pub async fn run(config: &Config) -> anyhow::Result<RunOutcome> {
    let client = TaskBoardClient::new(config.base_url.clone());

    let created = client.create_task(&config.task_description).await?;
    if !created.success {
        return Ok(RunOutcome::Rejected {
            response: created.raw,
        });
    }

    let task_id = created
        .task_id
        .context("task board reported success without a taskId")?;
    info!(%task_id, "task created");

    let cipher = LogCipher::generate();
    let response = simulate_task(&client, &cipher, &task_id).await?;

    Ok(RunOutcome::Completed(response))
}
