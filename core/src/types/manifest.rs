use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Alphabetical partitioning of the built-in icon set into chunk files.
///
/// `version` doubles as the persistent store's version marker: bumping it
/// invalidates every cached record on the next open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    pub version: String,
    pub parts: Vec<ChunkPart>,
}

/// One chunk file and the first icon name it covers.
///
/// A part without `start` covers everything before the next boundary;
/// parts are sorted by their start name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub file: String,
}

static BUILTIN: LazyLock<ChunkManifest> = LazyLock::new(|| {
    serde_json::from_str(include_str!("manifest/builtin.json")).expect("invalid builtin manifest")
});

impl ChunkManifest {
    /// The manifest shipped with the crate, generated alongside the icon
    /// pack chunks it describes.
    pub fn builtin() -> &'static ChunkManifest {
        &BUILTIN
    }

    /// The chunk file covering `name`: the last part whose start boundary
    /// is at or before the name, or the first part when the name sorts
    /// before every boundary.
    pub fn chunk_for(&self, name: &str) -> Option<&str> {
        let mut selected = self.parts.first()?;

        for part in &self.parts {
            match part.start.as_deref() {
                None => selected = part,
                Some(start) if start <= name => selected = part,
                Some(_) => break,
            }
        }
        Some(&selected.file)
    }
}
