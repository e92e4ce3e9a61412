// src/lib.rs
// file-export - turn workflow outputs into downloadable file artifacts

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod export;
pub mod mcp;

pub use error::{ExportError, Result};
