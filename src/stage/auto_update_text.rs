//! The auto-updating text stage.
//!
//! Keeps an overlay text fresh from a file and hands it to a downstream
//! annotation stage through the per-frame metadata bag. The file can be
//! swapped at runtime by writing a new path under
//! [`FILE_KEY`] before the frame reaches this stage.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Metadata, PostProcessStage};
use crate::cache::TextCache;
use crate::error::{AutotextError, Result};

/// Name the stage registers under.
pub const STAGE_NAME: &str = "auto_update_text";

/// Metadata key an upstream stage may use to redirect the source file.
pub const FILE_KEY: &str = "auto_update_text.file";

/// Metadata key the cached text is published under for the annotator.
pub const TEXT_KEY: &str = "annotate.text";

/// Stage parameters.
#[derive(Debug, Default, Deserialize)]
struct StageParams {
    /// Initial source file. Optional; the path can also arrive later
    /// through the metadata redirect key.
    #[serde(default)]
    file: Option<PathBuf>,
}

/// Publishes auto-refreshing text from a file into frame metadata.
pub struct AutoUpdateTextStage {
    cache: TextCache,
}

impl AutoUpdateTextStage {
    pub fn new() -> Self {
        Self {
            cache: TextCache::new(),
        }
    }

    /// Build the stage around a preconfigured cache (used by tests to
    /// shorten the refresh timing).
    pub fn with_cache(cache: TextCache) -> Self {
        Self { cache }
    }

    /// The current source path (empty if none configured).
    pub fn source_path(&self) -> PathBuf {
        self.cache.path()
    }
}

impl PostProcessStage for AutoUpdateTextStage {
    fn name(&self) -> &'static str {
        STAGE_NAME
    }

    fn configure(&mut self, params: &serde_json::Value) -> Result<()> {
        let params: StageParams =
            serde_json::from_value(params.clone()).map_err(|err| AutotextError::Config {
                message: err.to_string(),
            })?;

        let path = params.file.unwrap_or_default();
        tracing::debug!(path = %path.display(), "configured text source");
        self.cache.set_path(path);
        Ok(())
    }

    fn start(&mut self) {
        self.cache.start();
    }

    fn process(&mut self, metadata: &mut Metadata) -> bool {
        if let Some(file) = metadata.get(FILE_KEY) {
            self.cache.redirect(Path::new(file));
        }

        let text = self.cache.tick();
        if !text.is_empty() {
            metadata.set(TEXT_KEY, text);
        }

        // Never discard the frame.
        false
    }

    fn stop(&mut self) {
        self.cache.stop();
    }
}

impl Default for AutoUpdateTextStage {
    fn default() -> Self {
        Self::new()
    }
}
