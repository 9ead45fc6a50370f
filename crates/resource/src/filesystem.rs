//! Logos read from a directory on disk.
//!
//! Records name their logo by file name (`logo_bb.jpg`); the name is resolved
//! against a single asset directory and never allowed to leave it.

use boleto_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct AssetDirectory {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl AssetDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self { root, canonical_root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` inside the directory, or `None` when it would escape.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full = self.root.join(relative);
        match (full.canonicalize(), &self.canonical_root) {
            // Symlinks may still point outside.
            (Ok(canonical), Some(root)) => canonical.starts_with(root).then_some(canonical),
            _ => Some(full),
        }
    }
}

impl ResourceProvider for AssetDirectory {
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError> {
        let path = self.resolve(name).ok_or_else(|| {
            log::warn!("Refusing asset name '{}' outside {}", name, self.root.display());
            ResourceError::NotFound(name.to_string())
        })?;

        log::debug!("Reading asset {}", path.display());
        std::fs::read(&path).map(Arc::new).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResourceError::NotFound(name.to_string()),
            _ => ResourceError::LoadFailed {
                name: name.to_string(),
                message: e.to_string(),
            },
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "AssetDirectory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_logo_by_file_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo_bb.jpg"), b"jpeg").unwrap();

        let assets = AssetDirectory::new(dir.path());
        assert_eq!(&*assets.load("logo_bb.jpg").unwrap(), b"jpeg");
        assert!(assets.exists("logo_bb.jpg"));
        assert_eq!(assets.root(), dir.path());
    }

    #[test]
    fn test_missing_logo_is_not_found() {
        let dir = tempdir().unwrap();
        let assets = AssetDirectory::new(dir.path());

        assert!(matches!(assets.load("logo_itau.jpg"), Err(ResourceError::NotFound(_))));
        assert!(!assets.exists("logo_itau.jpg"));
    }

    #[test]
    fn test_directories_are_not_assets() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("logos")).unwrap();
        let assets = AssetDirectory::new(dir.path());

        assert!(!assets.exists("logos"));
        assert!(matches!(assets.load("logos"), Err(ResourceError::LoadFailed { .. })));
    }

    #[test]
    fn test_names_cannot_escape_the_directory() {
        let dir = tempdir().unwrap();
        let inner = dir.path().join("assets");
        fs::create_dir(&inner).unwrap();
        fs::write(dir.path().join("secret.jpg"), b"x").unwrap();

        let assets = AssetDirectory::new(&inner);
        assert!(matches!(assets.load("../secret.jpg"), Err(ResourceError::NotFound(_))));
        assert!(!assets.exists("../secret.jpg"));
        assert!(!assets.exists("bancos/../../secret.jpg"));
        assert!(!assets.exists("/etc/passwd"));
    }

    #[test]
    fn test_nested_names_are_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("bancos")).unwrap();
        fs::write(dir.path().join("bancos").join("caixa.png"), b"png").unwrap();

        let assets = AssetDirectory::new(dir.path());
        assert_eq!(&*assets.load("bancos/caixa.png").unwrap(), b"png");
    }
}
