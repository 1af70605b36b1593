//! # acronym-service
//!
//! Answers the `/acronym` Slack slash command.
//!
//! Each request fetches the glossary, builds a fresh index, searches it
//! and replies with ephemeral text. No state survives a request.
//!
//! ## Modules
//! - `slack`: slash-command payload and response types
//! - `handler`: the fetch, index, search and format pipeline
//! - `server`: axum router, health check and server lifecycle

pub mod error;
pub mod handler;
pub mod server;
pub mod slack;

pub use error::ServiceError;
pub use handler::{format_results, SlashCommandHandler};
pub use server::{build_router, run_server_with_shutdown, serve, AppState};
pub use slack::{ResponseType, SlashCommandRequest, SlashCommandResponse};
