use crate::assets::AssetOracle;
use std::collections::HashSet;

/// Asset oracle backed by a fixed set of paths, e.g. embedded assets.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetOracle {
    paths: HashSet<String>,
}

impl MemoryAssetOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryAssetOracle {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetOracle for MemoryAssetOracle {
    fn exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}
