use anyhow::{Context, Result};
use grasshunt_types::SceneCatalog;
use serde::Deserialize;
use std::path::Path;

/// On-disk shape of the master scene catalog:
///
/// ```toml
/// scenes = ["Glade", "Meadow", "Cliffs"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub scenes: Vec<String>,
}

/// Load the master scene catalog. No path means an empty catalog; the
/// report then only enumerates scenes that appear in the logs.
pub fn load_catalog(path: Option<&Path>) -> Result<SceneCatalog> {
    let Some(path) = path else {
        return Ok(SceneCatalog::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(SceneCatalog::new(file.scenes))
}
