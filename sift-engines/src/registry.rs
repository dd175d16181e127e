//! Engine registry keyed by name and category.
//!
//! A registry is populated once at startup and only read afterwards. Hosts
//! either keep their own [`EngineRegistry`] or publish one process-wide with
//! [`install_global`].

use crate::engine::Engine;
use crate::engines::BingVideosEngine;
use crate::types::Category;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Lookup of engines by name and by category.
#[derive(Default)]
pub struct EngineRegistry {
    engines: BTreeMap<&'static str, Arc<dyn Engine>>,
    /// Engine names per category, in registration order.
    categories: BTreeMap<Category, Vec<&'static str>>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `engine` under `category`.
    ///
    /// The first engine registered under a name is kept. Registering the
    /// same name under a category it is already listed in is a no-op.
    pub fn register(&mut self, engine: Arc<dyn Engine>, category: Category) {
        let name = engine.name();
        self.engines.entry(name).or_insert(engine);

        let names = self.categories.entry(category).or_default();
        if !names.contains(&name) {
            names.push(name);
            tracing::debug!(engine = name, %category, "engine registered");
        }
    }

    /// Register `engine` under every category it advertises.
    pub fn register_engine(&mut self, engine: Arc<dyn Engine>) {
        for &category in engine.categories() {
            self.register(Arc::clone(&engine), category);
        }
    }

    /// Look up an engine by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Engine>> {
        self.engines.get(name)
    }

    /// Engines listed under `category`, in registration order.
    pub fn in_category(&self, category: Category) -> Vec<&Arc<dyn Engine>> {
        self.categories
            .get(&category)
            .map(|names| names.iter().filter_map(|name| self.engines.get(name)).collect())
            .unwrap_or_default()
    }

    /// Categories `name` is listed under.
    pub fn categories_of(&self, name: &str) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|(_, names)| names.contains(&name))
            .map(|(category, _)| *category)
            .collect()
    }

    /// Registered engine names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engines.keys().copied()
    }

    /// Number of distinct engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.engines.keys().collect::<Vec<_>>())
            .field("categories", &self.categories)
            .finish()
    }
}

/// Register every adapter this crate ships with its default settings.
pub fn register_default_engines(registry: &mut EngineRegistry) {
    registry.register_engine(Arc::new(BingVideosEngine::new()));
}

/// A registry holding every shipped adapter.
pub fn default_registry() -> EngineRegistry {
    let mut registry = EngineRegistry::new();
    register_default_engines(&mut registry);
    registry
}

/// Process-wide registry, written at most once.
static GLOBAL_REGISTRY: OnceLock<EngineRegistry> = OnceLock::new();

/// Publish `registry` as the process-wide registry.
///
/// # Errors
///
/// Hands `registry` back if a global registry was already installed or
/// [`global`] has already initialised the default one.
pub fn install_global(registry: EngineRegistry) -> Result<&'static EngineRegistry, EngineRegistry> {
    GLOBAL_REGISTRY.set(registry)?;
    Ok(global())
}

/// Access the process-wide registry.
///
/// Initialised with [`default_registry`] on first access if nothing was
/// installed before.
pub fn global() -> &'static EngineRegistry {
    GLOBAL_REGISTRY.get_or_init(default_registry)
}
