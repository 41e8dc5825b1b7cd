//! Fixed locations for one run of the tool

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::build::BuildType;

/// Name of the primary binary the compile phase produces
pub const ARTIFACT_NAME: &str = "SimpleChat";

/// Name of the build output root under the source root
pub const BUILD_DIR_NAME: &str = "build";

/// Paths derived once at startup and handed to the lifecycle manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Repository root holding the top-level CMakeLists.txt
    pub source_root: PathBuf,
    /// Parent of every per-build-type output directory
    pub build_root: PathBuf,
}

impl BuildContext {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        let source_root = source_root.into();
        Self {
            build_root: source_root.join(BUILD_DIR_NAME),
            source_root,
        }
    }

    /// Context for the running executable.
    ///
    /// The tool lives one directory below the repository root
    /// (`<repo>/scripts/<tool>`), so the source root is the parent of the
    /// executable's directory.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let exe = exe.canonicalize().unwrap_or(exe);
        Self::from_exe_path(&exe)
    }

    pub fn from_exe_path(exe: &Path) -> Result<Self> {
        let root = exe
            .parent()
            .and_then(Path::parent)
            .with_context(|| format!("No repository root above {}", exe.display()))?;
        Ok(Self::new(root))
    }

    /// `<build_root>/<lowercase build type>`
    pub fn output_dir(&self, build_type: BuildType) -> PathBuf {
        self.build_root.join(build_type.dir_name())
    }

    /// Where a successful compile leaves the SimpleChat binary
    pub fn artifact_path(&self, build_type: BuildType) -> PathBuf {
        self.output_dir(build_type).join(ARTIFACT_NAME)
    }
}
