//! Backend worker: owns the tokio runtime and the HTTP client.

pub mod avatar;
pub mod commands;
pub mod runtime;
