use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::LookupError;

/// Fan id to display name table loaded from `fans.json`.
#[derive(Debug, Clone, Default)]
pub struct FanCatalog {
    names: BTreeMap<i32, String>,
}

impl FanCatalog {
    pub fn new(names: impl IntoIterator<Item = (i32, String)>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Parses the `{"<id>": "<name>", ...}` form. Keys that are not integers are skipped.
    pub fn from_json_str(json: &str, path: &str) -> Result<Self, LookupError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|source| LookupError::Parse {
                path: path.to_string(),
                source,
            })?;

        Ok(Self::new(raw.into_iter().filter_map(|(id, name)| {
            id.trim().parse::<i32>().ok().map(|id| (id, name))
        })))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let path_text = path.display().to_string();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LookupError::Io {
                path: path_text.clone(),
                source,
            })?;

        let catalog = Self::from_json_str(&json, &path_text)?;
        info!(path = %path_text, fans = catalog.names.len(), "Loaded fan catalog");
        Ok(catalog)
    }

    /// Name of a fan, or `#<id>` when the catalog has no entry for it.
    pub fn name(&self, fan_id: i32) -> String {
        self.names
            .get(&fan_id)
            .cloned()
            .unwrap_or_else(|| format!("#{fan_id}"))
    }
}
