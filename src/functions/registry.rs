use super::definitions::{DEFINITIONS, FunctionDefinition};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Static registry keyed by lower-case function name
static REGISTRY: OnceLock<FxHashMap<&'static str, &'static FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, &'static FunctionDefinition> {
    let mut map = FxHashMap::with_capacity_and_hasher(DEFINITIONS.len(), Default::default());
    for def in &DEFINITIONS {
        map.insert(def.name, def);
    }
    map
}

/// Central registry for getting function definitions
pub(crate) struct Registry;

impl Registry {
    /// Get a function definition by its lower-case name - O(1) lookup
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name).copied()
    }
}
