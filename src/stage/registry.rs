//! Stage registry.
//!
//! Maps stage names to constructors so the host pipeline can
//! instantiate stages from configuration by name.

use std::collections::HashMap;

use super::auto_update_text::{AutoUpdateTextStage, STAGE_NAME};
use super::PostProcessStage;

/// Constructor for a registered stage.
pub type StageFactory = fn() -> Box<dyn PostProcessStage>;

/// Name-keyed collection of stage constructors.
pub struct StageRegistry {
    factories: HashMap<&'static str, StageFactory>,
}

impl StageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a stage constructor under a name. Replaces any previous
    /// registration for the same name.
    pub fn register(&mut self, name: &'static str, factory: StageFactory) {
        self.factories.insert(name, factory);
    }

    /// Instantiate a stage by name.
    pub fn create(&self, name: &str) -> Option<Box<dyn PostProcessStage>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Names of all registered stages.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for StageRegistry {
    /// A registry with the built-in stages registered.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(STAGE_NAME, || Box::new(AutoUpdateTextStage::new()));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_knows_the_builtin_stage() {
        let registry = StageRegistry::default();
        let stage = registry.create("auto_update_text").unwrap();
        assert_eq!(stage.name(), "auto_update_text");
    }

    #[test]
    fn unknown_name_yields_none() {
        let registry = StageRegistry::default();
        assert!(registry.create("annotate_cv").is_none());
    }

    #[test]
    fn register_replaces_existing_factory() {
        let mut registry = StageRegistry::new();
        registry.register(STAGE_NAME, || Box::new(AutoUpdateTextStage::new()));
        registry.register(STAGE_NAME, || Box::new(AutoUpdateTextStage::new()));
        assert_eq!(registry.names().count(), 1);
    }
}
