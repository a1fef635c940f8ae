//! Pipeline boundary: stage trait, per-frame metadata, and registry.
//!
//! The host pipeline drives a stage through a fixed lifecycle
//! (configure once from JSON parameters, start, process one frame at a
//! time, stop) and communicates with it per frame through a keyed
//! [`Metadata`] bag.

pub mod auto_update_text;
pub mod registry;

pub use auto_update_text::AutoUpdateTextStage;
pub use registry::StageRegistry;

use std::collections::HashMap;

use crate::error::Result;

/// A post-processing stage invoked once per frame.
pub trait PostProcessStage {
    /// The name the stage is registered under.
    fn name(&self) -> &'static str;

    /// Apply JSON parameters at setup time. No I/O is performed here.
    fn configure(&mut self, params: &serde_json::Value) -> Result<()>;

    /// Called once when the pipeline starts.
    fn start(&mut self);

    /// Process one frame. Returns true to discard the frame.
    fn process(&mut self, metadata: &mut Metadata) -> bool;

    /// Called once when the pipeline stops.
    fn stop(&mut self);
}

/// The per-frame keyed side-channel shared between stages.
#[derive(Debug, Default, Clone)]
pub struct Metadata {
    values: HashMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value, replacing any previous one under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
