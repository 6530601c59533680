//! # agentsim
//!
//! Simulated multi-agent client for a local task board.
//!
//! The flow is three sequential steps:
//! 1. Ask the board to create a task (`POST /task`) and take the assigned ID.
//! 2. Have each agent in a fixed roster produce one log line for the task,
//!    encrypting every line with a key that lives only for this run.
//! 3. Submit the joined encrypted blobs (`POST /complete`) and surface the
//!    board's response.
//!
//! ## Modules
//! - `agents`: roster simulation and the end-to-end run flow
//! - `cipher`: AES-256-GCM context covering one run's log lines
//! - `taskboard`: task board API client
//! - `config`: environment-based configuration

pub mod agents;
pub mod cipher;
pub mod config;
pub mod taskboard;

pub use agents::RunOutcome;
pub use cipher::LogCipher;
pub use config::Config;
pub use taskboard::{TaskBoardClient, TaskId};
