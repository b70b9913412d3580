//! learnlog-core library.
//!
//! Interaction-log records, item-scoped filtering, and the JSON / JSON Lines
//! reader used by the `learnlog` CLI.
//!
//! # Conventions
//!
//! - **Errors**: library operations return [`error::LearnlogError`]; config
//!   loading uses `anyhow::Result` with context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod source;

pub use error::{ErrorCode, LearnlogError};
pub use filter::{InteractionFilter, filter_by_item_id, matching_item};
pub use model::interaction::InteractionLog;
