//! autotext - auto-refreshing text overlay stage for frame pipelines.
//!
//! autotext keeps a text value loaded from a file and republishes it
//! into each processed frame's metadata, reloading the file on a fixed
//! interval either from a background poller or inline from the
//! per-frame call. The source file can be swapped at runtime through
//! the frame metadata without restarting the stage.
//!
//! # Modules
//!
//! - [`cache`] - The refreshable text cache and its background poller
//! - [`error`] - Error types and result aliases
//! - [`stage`] - Pipeline boundary: stage trait, frame metadata, registry
//!
//! # Example
//!
//! ```no_run
//! use autotext::{AutoUpdateTextStage, Metadata, PostProcessStage};
//! use serde_json::json;
//!
//! let mut stage = AutoUpdateTextStage::new();
//! stage.configure(&json!({ "file": "/run/overlay.txt" })).unwrap();
//! stage.start();
//!
//! // Once per frame:
//! let mut metadata = Metadata::new();
//! let discard = stage.process(&mut metadata);
//! assert!(!discard);
//!
//! stage.stop();
//! ```

pub mod cache;
pub mod error;
pub mod stage;

pub use cache::TextCache;
pub use error::{AutotextError, Result};
pub use stage::{AutoUpdateTextStage, Metadata, PostProcessStage, StageRegistry};
