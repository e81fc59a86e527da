//! strategy-server: HTTP and WebSocket front end for the advisory team.
//!
//! The REST API lists and toggles personas, manages the task board and
//! serves the structured reports. The WebSocket endpoint (`/ws`) carries
//! the chat: one acknowledgement, then one frame per persona reply.

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod web;
pub mod ws;
