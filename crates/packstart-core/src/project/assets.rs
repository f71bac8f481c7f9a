//! Location of the bundled scaffold assets: shared base files and the
//! per-framework template trees.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the asset root, mainly for development.
pub const ASSET_ROOT_ENV: &str = "PACKSTART_TEMPLATE_DIR";

/// Roots of the scaffold assets.
///
/// Layout contract:
/// - `<root>/base-files/` - shared files (`gitignore`, `prettierrc`,
///   `wtr.config.mjs`, `postcss.config.js`, `snowpack.config.mjs`,
///   `licenses/<id>`)
/// - `<root>/templates/<framework>[-typescript]/` - template trees with
///   `README.md`, `public/`, `src/` and optional `types/`,
///   `tsconfig.json`, `babel.config.json`
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the asset root: env override first, then an `assets`
    /// directory next to the executable.
    pub fn discover() -> Result<Self> {
        if let Ok(root) = std::env::var(ASSET_ROOT_ENV) {
            return Ok(Self::new(PathBuf::from(root)));
        }
        let exe = std::env::current_exe().context("could not locate the packstart executable")?;
        let beside_exe = exe
            .parent()
            .map(|dir| dir.join("assets"))
            .filter(|p| p.is_dir());
        beside_exe.map(Self::new).with_context(|| {
            format!("no scaffold assets found; set {ASSET_ROOT_ENV} to the asset directory")
        })
    }

    pub fn base_file(&self, name: &str) -> PathBuf {
        self.root.join("base-files").join(name)
    }

    pub fn license_file(&self, license: &str) -> PathBuf {
        self.root.join("base-files").join("licenses").join(license)
    }

    pub fn template_dir(&self, template_name: &str) -> PathBuf {
        self.root.join("templates").join(template_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
