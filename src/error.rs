//! Error types and helpers for user-friendly error messages
//!
//! Every failure surfaces to `main`, which picks the process exit status
//! from [`BuildError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

use crate::build::BuildType;

/// External build phase that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configure,
    Compile,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Configure => write!(f, "configure"),
            Phase::Compile => write!(f, "compile"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    /// Command token outside the known vocabulary
    #[error("Unknown command: {token}")]
    UnknownCommand { token: String },

    /// Configure or compile subprocess exited unsuccessfully
    #[error("CMake {phase} failed for {build_type} (exit code: {})", display_code(.exit_code))]
    ToolFailed {
        phase: Phase,
        build_type: BuildType,
        exit_code: Option<i32>,
    },

    /// Directory creation or removal failed
    #[error("Failed to {action} {}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tool/executable not found
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: &'static str },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| c.to_string())
}

impl BuildError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// A failing CMake phase hands its own exit code through when it is a
    /// valid non-zero status; everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::ToolFailed {
                exit_code: Some(code),
                ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            BuildError::MissingTool { hint, .. } => Some(*hint),
            BuildError::UnknownCommand { .. } => Some(hints::commands()),
            _ => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("ERROR:").red().bold(), self);
        if let Some(source) = std::error::Error::source(self) {
            eprintln!("  caused by: {}", source);
        }
        if let Some(hint) = self.hint() {
            eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
        }
    }
}

pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }

    pub fn commands() -> &'static str {
        "Valid commands are: clean, debug, release, all (no command builds release)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_failed(exit_code: Option<i32>) -> BuildError {
        BuildError::ToolFailed {
            phase: Phase::Compile,
            build_type: BuildType::Debug,
            exit_code,
        }
    }

    #[test]
    fn test_unknown_command_message() {
        let err = BuildError::UnknownCommand {
            token: "deploy".into(),
        };
        assert_eq!(err.to_string(), "Unknown command: deploy");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_tool_failure_passes_exit_code_through() {
        assert_eq!(tool_failed(Some(2)).exit_code(), 2);
        assert_eq!(tool_failed(Some(0)).exit_code(), 1);
        assert_eq!(tool_failed(Some(-1)).exit_code(), 1);
        assert_eq!(tool_failed(Some(300)).exit_code(), 1);
        assert_eq!(tool_failed(None).exit_code(), 1);
    }

    #[test]
    fn test_tool_failure_message() {
        assert_eq!(
            tool_failed(Some(2)).to_string(),
            "CMake compile failed for Debug (exit code: 2)"
        );
        assert!(tool_failed(None).to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_filesystem_error_keeps_path() {
        let err = BuildError::filesystem(
            "remove",
            "/tmp/build",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "Failed to remove /tmp/build");
        assert_eq!(err.exit_code(), 1);
    }
}
