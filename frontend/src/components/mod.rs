//! UI Components for the invoice processor.
//!
//! # Layout Components
//! - [`Header`] - Title and backend status
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`FileUpload`] - PDF selection with drag & drop, then upload
//! - [`ProcessingResults`] - Per-file outcomes and downloads

mod header;
mod upload;
mod results;
mod footer;

pub use header::*;
pub use upload::*;
pub use results::*;
pub use footer::*;
