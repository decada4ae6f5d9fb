//! Pluggable icon sets for non-built-in prefixes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Icon data returned by a custom icon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomIcon {
    pub path: String,
    pub secondary_path: Option<String>,
    pub view_box: Option<String>,
}

/// A provider of icons for one prefix.
#[async_trait]
pub trait IconSet: Send + Sync {
    /// Resolves one icon name to its path data.
    async fn get_icon(&self, name: &str) -> Result<CustomIcon, String>;

    /// Names this set can resolve, for listing UIs. Defaults to none.
    async fn icon_list(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Two-tier prefix → icon-set map.
///
/// Lookup prefers the primary tier. The legacy tier holds sets registered
/// through the older registration surface and answers only when the primary
/// tier has no entry for the prefix.
#[derive(Clone, Default)]
pub struct IconSetRegistry {
    inner: Arc<RwLock<Tiers>>,
}

#[derive(Default)]
struct Tiers {
    primary: HashMap<String, Arc<dyn IconSet>>,
    legacy: HashMap<String, Arc<dyn IconSet>>,
}

impl IconSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a set for `prefix`, replacing any previous primary entry.
    pub async fn register(&self, prefix: impl Into<String>, set: Arc<dyn IconSet>) {
        self.inner.write().await.primary.insert(prefix.into(), set);
    }

    /// Registers a set in the legacy tier.
    pub async fn register_legacy(&self, prefix: impl Into<String>, set: Arc<dyn IconSet>) {
        self.inner.write().await.legacy.insert(prefix.into(), set);
    }

    /// Finds the set serving `prefix`, primary tier first.
    pub async fn lookup(&self, prefix: &str) -> Option<Arc<dyn IconSet>> {
        let tiers = self.inner.read().await;
        tiers
            .primary
            .get(prefix)
            .or_else(|| tiers.legacy.get(prefix))
            .cloned()
    }

    /// Prefixes with a registered set in either tier, sorted.
    pub async fn prefixes(&self) -> Vec<String> {
        let tiers = self.inner.read().await;
        let mut prefixes: Vec<String> = tiers.primary.keys().cloned().collect();
        for prefix in tiers.legacy.keys() {
            if !tiers.primary.contains_key(prefix) {
                prefixes.push(prefix.clone());
            }
        }
        prefixes.sort();
        prefixes
    }
}
