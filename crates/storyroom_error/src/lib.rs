//! Error types for the Storyroom library.
//!
//! This crate provides the foundation error types used throughout the Storyroom workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyroom_error::{StoryroomResult, HttpError};
//!
//! fn fetch_data() -> StoryroomResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod http;
mod json;
mod models;
mod roundtable;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{StoryroomError, StoryroomErrorKind, StoryroomResult};
pub use http::HttpError;
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult, RetryableError};
pub use roundtable::{RoundtableError, RoundtableErrorKind};
