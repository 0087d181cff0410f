use crate::models::{Asset, AssetKey};
use std::collections::HashSet;

/// Ordered accumulator which keeps the first asset seen for each `AssetKey`.
#[derive(Debug, Default)]
pub struct AssetCollector {
    assets: Vec<Asset>,
    seen_keys: HashSet<AssetKey>,
}

impl AssetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the asset unless an asset with the same key was already collected.
    ///
    /// Returns `true` if the asset was appended.
    pub fn push(&mut self, asset: Asset) -> bool {
        if self.seen_keys.insert(asset.key()) {
            self.assets.push(asset);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }
}
