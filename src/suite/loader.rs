//! @ai:module:intent TOML loader for extra benchmark targets
//! @ai:module:layer infrastructure
//! @ai:module:public_api TargetLoader, TargetLoaderTrait
//! @ai:module:stateless true

use crate::error::Result;
use crate::suite::target::BenchmarkTarget;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for loading target definitions
pub trait TargetLoaderTrait: Send + Sync {
    /// @ai:intent Load every target defined under a directory
    fn load_all(&self, dir: &Path) -> Result<Vec<BenchmarkTarget>>;
}

/// @ai:intent Loads target definitions from `*.toml` files, one target per file
pub struct TargetLoader;

impl TargetLoader {
    /// @ai:intent Create a new target loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse a single target file
    /// @ai:pre path points to a valid TOML file
    /// @ai:effects fs:read
    fn parse_target_file(path: &Path) -> Result<BenchmarkTarget> {
        let content = std::fs::read_to_string(path)?;
        let target: BenchmarkTarget = toml::from_str(&content)?;
        Ok(target)
    }

    /// @ai:intent Find all TOML files in directory, sorted for a stable target order
    /// @ai:effects fs:read
    fn find_target_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<_> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "toml")
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

impl Default for TargetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetLoaderTrait for TargetLoader {
    /// @ai:intent Load every target, failing on the first malformed file
    /// @ai:effects fs:read
    fn load_all(&self, dir: &Path) -> Result<Vec<BenchmarkTarget>> {
        let files = Self::find_target_files(dir);
        let mut targets = Vec::with_capacity(files.len());

        for path in files {
            match Self::parse_target_file(&path) {
                Ok(target) => {
                    tracing::debug!("Loaded target '{}' from {}", target.name, path.display());
                    targets.push(target);
                }
                Err(e) => {
                    tracing::error!("Invalid target file {}: {}", path.display(), e);
                    return Err(e);
                }
            }
        }

        Ok(targets)
    }
}
