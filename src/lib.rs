//! Event-to-issue translation adapter.
//!
//! Receives a trigger event carrying optional `summary` / `description`
//! fields and creates one Task issue in a Jira-compatible tracker via a
//! single authenticated POST. Non-2xx tracker replies pass through to the
//! caller unchanged; only transport-level failures are adapter errors.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::jira::JiraClient;
pub use config::settings::Credentials;
pub use errors::AdapterError;
pub use models::event::{AdapterResponse, InboundEvent, IssuePayload};
