//! Backend services.
//!
//! This module provides the HTTP calls to the invoice backend:
//!
//! # Services
//!
//! - [`upload`] - Multipart PDF upload (`POST /upload`)
//! - [`download`] - Processed PDF download (`GET /download/{session}/{file}`)
//! - [`session`] - Health probe and session cleanup

pub mod upload;
pub mod download;
pub mod session;

pub use upload::*;
pub use download::*;
pub use session::*;
