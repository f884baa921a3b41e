//! Locating the packaged data directory.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/
//!   specification.md
//!   skills-template/
//!   scripts/
//! ```

use std::path::{Path, PathBuf};

pub const SPEC_FILE: &str = "specification.md";
pub const SKILLS_TEMPLATE_DIR: &str = "skills-template";
pub const SCRIPTS_DIR: &str = "scripts";

/// Data directory bundled with the crate sources
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/spec");

/// Paths inside a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the data directory.
    /// Priority: explicit (flag, env or config) > installed next to the
    /// executable > bundled crate sources.
    ///
    /// An explicit path is used even if it does not exist, so the install
    /// step reports the missing file against the path the user asked for.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }

        let candidates = exe_candidates();
        for candidate in &candidates {
            if candidate.is_dir() {
                return Self::new(candidate);
            }
        }

        Self::new(BUNDLED_DATA_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn spec_file(&self) -> PathBuf {
        self.root.join(SPEC_FILE)
    }

    pub fn skills_template_dir(&self) -> PathBuf {
        self.root.join(SKILLS_TEMPLATE_DIR)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }
}

/// Install locations relative to the running binary
fn exe_candidates() -> Vec<PathBuf> {
    let Ok(exe) = std::env::current_exe() else {
        return Vec::new();
    };
    let Some(bin_dir) = exe.parent() else {
        return Vec::new();
    };

    let mut candidates = vec![bin_dir.join("data")];
    if let Some(prefix) = bin_dir.parent() {
        candidates.insert(0, prefix.join("share").join("prose"));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = DataDir::resolve(Some(Path::new("/nonexistent/prose-data")));
        assert_eq!(dir.root(), Path::new("/nonexistent/prose-data"));
        assert_eq!(
            dir.spec_file(),
            PathBuf::from("/nonexistent/prose-data/specification.md")
        );
        assert_eq!(
            dir.skills_template_dir(),
            PathBuf::from("/nonexistent/prose-data/skills-template")
        );
        assert_eq!(
            dir.scripts_dir(),
            PathBuf::from("/nonexistent/prose-data/scripts")
        );
    }

    #[test]
    fn test_bundled_data_dir_has_spec() {
        let dir = DataDir::new(BUNDLED_DATA_DIR);
        assert!(dir.spec_file().is_file());
        assert!(dir.skills_template_dir().is_dir());
    }
}
