//! Native build orchestration
//!
//! ## Architecture
//!
//! ```text
//! commands → build/lifecycle.rs → build/cmake.rs → cmake (configure, --build)
//! ```
//!
//! ## Modules
//!
//! - `cmake` - The external CMake collaborator behind the [`cmake::BuildTool`] seam
//! - `lifecycle` - Output directory management, clean and configure+compile sequencing

pub mod cmake;
pub mod lifecycle;

/// CMake build type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl BuildType {
    /// Parse a build type name case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "debug" => Some(BuildType::Debug),
            "release" => Some(BuildType::Release),
            _ => None,
        }
    }

    /// Canonical name passed to CMAKE_BUILD_TYPE
    pub fn name(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }

    /// Output directory name under the build root
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
