use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset `{0}` not loaded")]
    NotFound(String),
    #[error("failed to load asset `{name}` from {src}: {reason}")]
    Load {
        name: String,
        src: String,
        reason: String,
    },
}

/// Named assets of one kind (images, sounds)
///
/// Sources are registered by name first and loaded in one batch during scene
/// setup. Lookups of anything not loaded fail with [`AssetError::NotFound`].
#[derive(Debug)]
pub struct AssetStore<T> {
    sources: BTreeMap<String, String>,
    loaded: BTreeMap<String, T>,
}

impl<T> Default for AssetStore<T> {
    fn default() -> Self {
        AssetStore {
            sources: BTreeMap::new(),
            loaded: BTreeMap::new(),
        }
    }
}

impl<T> AssetStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember where `name` should be loaded from
    pub fn register(&mut self, name: impl Into<String>, src: impl Into<String>) {
        self.sources.insert(name.into(), src.into());
    }

    /// Registered `(name, src)` pairs that are not loaded yet
    pub fn pending(&self) -> Vec<(String, String)> {
        self.sources
            .iter()
            .filter(|(name, _)| !self.loaded.contains_key(*name))
            .map(|(name, src)| (name.clone(), src.clone()))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, asset: T) {
        self.loaded.insert(name.into(), asset);
    }

    /// Load every pending source with `loader`, stopping at the first failure
    pub fn load_with<F>(&mut self, mut loader: F) -> Result<(), AssetError>
    where
        F: FnMut(&str, &str) -> Result<T, String>,
    {
        for (name, src) in self.pending() {
            let asset = loader(&name, &src).map_err(|reason| AssetError::Load {
                name: name.clone(),
                src: src.clone(),
                reason,
            })?;
            debug!(%name, %src, "loaded asset");
            self.loaded.insert(name, asset);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&T, AssetError> {
        self.loaded
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    pub fn source(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
