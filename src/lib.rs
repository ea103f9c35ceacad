//! feedback-board - collect feedback over HTTP, validate it, keep it in memory
//!
//! Request path: [`schema`] validation, then [`storage`], exposed through
//! [`service`] and the axum routes in [`http_server`].

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod service;
pub mod storage;
