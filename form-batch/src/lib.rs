//! Form Batch - batch client for a remote form-data API
//!
//! Builds a batch of tagged records, submits them one by one with bearer
//! authentication, then reads the saved records back and checks that every
//! tag is present.
//!
//! ## Example
//!
//! ```ignore
//! use form_batch::{Config, NetworkFormClient, RecordTemplate, BATCH_SIZE, run_batch};
//! use std::sync::Arc;
//!
//! let config = Config::load("config.yaml")?;
//! let api = Arc::new(NetworkFormClient::new(&config)?);
//! let summary = run_batch(api, &RecordTemplate::default(), BATCH_SIZE, &mut rand::thread_rng()).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod record;
pub mod response;
pub mod runner;
pub mod submit;
pub mod verify;

pub use client::{FormApi, NetworkFormClient};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use error::{BatchError, BatchResult, ClientError, ClientResult, ConfigError, ConfigResult};
pub use logger::init_logger;
pub use record::{BATCH_SIZE, Batch, Record, RecordQuery, RecordTemplate, Tag};
pub use response::{FormRow, FormsResponse};
pub use runner::{CONFIRMATION, RunSummary, run_batch};
pub use submit::{SubmitGuard, SubmitReport, submit_batch};
pub use verify::{Verification, scan_rows};
