//! Plugin discovery from a local directory.
//!
//! Layout: `<root>/<plugin>/manifest.json`. Only immediate subdirectories of
//! the root are considered; anything nested deeper is ignored.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::infrastructure::ports::{PluginManifests, PluginSourcePort};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Default plugin root, relative to the working directory.
pub const DEFAULT_PLUGIN_DIR: &str = "plugins";

/// Why one plugin was left out of a listing.
#[derive(Debug, thiserror::Error)]
pub enum PluginScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("manifest {path} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

/// Scans a directory tree for plugin manifests on every call.
pub struct DirectoryPluginSource {
    root: PathBuf,
}

impl DirectoryPluginSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn plugin_dirs(&self) -> Result<Vec<PathBuf>, PluginScanError> {
        let io_err = |source| PluginScanError::Io {
            path: self.root.clone(),
            source,
        };

        let mut read_dir = fs::read_dir(&self.root).await.map_err(io_err)?;
        let mut dirs = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(io_err)? {
            // `metadata` follows symlinks, so linked plugin directories count.
            let path = entry.path();
            let is_dir = fs::metadata(&path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_dir {
                dirs.push(path);
            }
        }

        // Directory order is platform-dependent; name order makes duplicate
        // registry names resolve the same way everywhere.
        dirs.sort();
        Ok(dirs)
    }
}

#[async_trait]
impl PluginSourcePort for DirectoryPluginSource {
    async fn scan(&self) -> PluginManifests {
        let mut plugins = PluginManifests::new();

        if !fs::try_exists(&self.root).await.unwrap_or(false) {
            debug!(root = ?self.root, "Plugin directory does not exist");
            return plugins;
        }

        let dirs = match self.plugin_dirs().await {
            Ok(dirs) => dirs,
            Err(e) => {
                warn!(error = %e, "Failed to list plugin directory");
                return plugins;
            }
        };

        for dir in dirs {
            let manifest_path = dir.join(MANIFEST_FILE_NAME);
            if !fs::try_exists(&manifest_path).await.unwrap_or(false) {
                continue;
            }

            match read_manifest(&manifest_path).await {
                Ok(manifest) => {
                    let name = registry_name(&manifest, &dir);
                    debug!(plugin = %name, path = ?dir, "Loaded plugin manifest");
                    plugins.insert(name, manifest);
                }
                Err(e) => {
                    warn!(error = %e, path = ?dir, "Skipping plugin with unreadable manifest");
                }
            }
        }

        plugins
    }
}

async fn read_manifest(path: &Path) -> Result<serde_json::Value, PluginScanError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| PluginScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| PluginScanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if !manifest.is_object() {
        return Err(PluginScanError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    Ok(manifest)
}

/// The manifest's string `name`, else the plugin directory's name.
fn registry_name(manifest: &serde_json::Value, dir: &Path) -> String {
    manifest
        .get("name")
        .and_then(|name| name.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_plugin(root: &Path, dir: &str, manifest: &str) {
        let plugin_dir = root.join(dir);
        std::fs::create_dir_all(&plugin_dir).unwrap();
        std::fs::write(plugin_dir.join(MANIFEST_FILE_NAME), manifest).unwrap();
    }

    #[tokio::test]
    async fn missing_root_yields_empty_listing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = DirectoryPluginSource::new(temp_dir.path().join("nope"));
        assert!(source.scan().await.is_empty());
    }

    #[tokio::test]
    async fn keys_by_declared_name_then_directory_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_plugin(
            temp_dir.path(),
            "weather",
            r#"{"name": "Weather System", "version": "1.0.0"}"#,
        );
        write_plugin(temp_dir.path(), "shops", r#"{"version": "0.2.0"}"#);

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins["Weather System"]["version"], json!("1.0.0"));
        assert_eq!(plugins["shops"], json!({"version": "0.2.0"}));
    }

    #[tokio::test]
    async fn bad_manifest_does_not_block_others() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_plugin(temp_dir.path(), "broken", "{ not json");
        write_plugin(temp_dir.path(), "list", "[1, 2]");
        write_plugin(temp_dir.path(), "good", r#"{"name": "good"}"#);

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert_eq!(plugins.keys().collect::<Vec<_>>(), vec!["good"]);
    }

    #[tokio::test]
    async fn ignores_files_and_dirs_without_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(MANIFEST_FILE_NAME), r#"{"name": "root"}"#).unwrap();
        std::fs::create_dir_all(temp_dir.path().join("empty")).unwrap();
        write_plugin(temp_dir.path(), "nested/deeper", r#"{"name": "deep"}"#);

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert!(plugins.is_empty());
    }

    #[tokio::test]
    async fn non_string_name_falls_back_to_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_plugin(temp_dir.path(), "numbered", r#"{"name": 42}"#);

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert!(plugins.contains_key("numbered"));
    }

    #[tokio::test]
    async fn later_directory_wins_on_duplicate_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_plugin(temp_dir.path(), "a", r#"{"name": "dup", "from": "a"}"#);
        write_plugin(temp_dir.path(), "b", r#"{"name": "dup", "from": "b"}"#);

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins["dup"]["from"], json!("b"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_plugin_directory_is_listed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        write_plugin(elsewhere.path(), "linked", r#"{"name": "linked"}"#);
        std::os::unix::fs::symlink(
            elsewhere.path().join("linked"),
            temp_dir.path().join("linked"),
        )
        .unwrap();

        let plugins = DirectoryPluginSource::new(temp_dir.path()).scan().await;

        assert_eq!(plugins.keys().collect::<Vec<_>>(), vec!["linked"]);
    }

    #[tokio::test]
    async fn each_scan_reflects_current_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = DirectoryPluginSource::new(temp_dir.path());
        write_plugin(temp_dir.path(), "first", "{}");
        assert_eq!(source.scan().await.len(), 1);

        std::fs::remove_dir_all(temp_dir.path().join("first")).unwrap();
        write_plugin(temp_dir.path(), "second", "{}");
        let plugins = source.scan().await;
        assert_eq!(plugins.keys().collect::<Vec<_>>(), vec!["second"]);
    }
}
