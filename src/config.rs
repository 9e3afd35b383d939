//! Fixed file locations, resolved against a working root

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Name of the JSON sidecar holding the tags
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Directory (relative to the root) scanned for images
pub const IMAGES_DIR: &str = "images";

/// Only files with this extension are reviewed
pub const IMAGE_EXTENSION: &str = "png";

/// Where a review session reads and writes its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Use `root` as the working directory
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Use the process's current directory as the root
    pub fn current_dir() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::from_root(root))
    }

    /// Build from an optional `--root` flag
    pub fn resolve(root: Option<PathBuf>) -> Result<Self> {
        match root {
            Some(root) => {
                if !root.is_dir() {
                    anyhow::bail!("Root is not a directory: {}", root.display());
                }
                Ok(Self::from_root(root))
            }
            None => Self::current_dir(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/preferences.json`
    pub fn preferences_file(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    /// `<root>/images`
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Absolute location of an image key such as `images/foo.png`
    pub fn image_location(&self, image_path: &str) -> PathBuf {
        self.root.join(image_path)
    }
}
