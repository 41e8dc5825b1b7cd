//! CMake configuration and execution
//!
//! This module handles invoking CMake for the configure and build steps.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::BuildType;
use crate::error::{hints, BuildError, Phase};
use crate::exec::subprocess::{command_line, run_command};
use crate::utils::terminal;

/// The two external build phases the lifecycle manager depends on.
pub trait BuildTool {
    /// Generate build files for `build_type` from `source_dir` into `build_dir`.
    /// Must be safe to repeat against an existing `build_dir`.
    fn configure(&self, source_dir: &Path, build_dir: &Path, build_type: BuildType) -> Result<()>;

    /// Compile an already configured `build_dir`.
    fn compile(&self, build_dir: &Path, build_type: BuildType) -> Result<()>;
}

/// CMake found on PATH
#[derive(Debug, Default)]
pub struct CMake {
    verbose: bool,
}

impl CMake {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Find CMake executable
    fn find_cmake() -> Result<PathBuf> {
        which::which("cmake").map_err(|_| {
            BuildError::MissingTool {
                tool: "cmake".into(),
                hint: hints::cmake(),
            }
            .into()
        })
    }

    /// Arguments for `cmake -S <source> -B <build> -DCMAKE_BUILD_TYPE=<type>`
    pub fn configure_args(source_dir: &Path, build_dir: &Path, build_type: BuildType) -> Vec<OsString> {
        vec![
            "-S".into(),
            source_dir.into(),
            "-B".into(),
            build_dir.into(),
            format!("-DCMAKE_BUILD_TYPE={}", build_type).into(),
        ]
    }

    /// Arguments for `cmake --build <build> -j`.
    ///
    /// `-j` without a count leaves the job count to the native build tool.
    pub fn compile_args(build_dir: &Path) -> Vec<OsString> {
        vec!["--build".into(), build_dir.into(), "-j".into()]
    }

    fn run(&self, phase: Phase, build_type: BuildType, args: &[OsString]) -> Result<()> {
        let cmake = Self::find_cmake()?;
        println!(">> {}", command_line(&cmake, args));

        let result = run_command(&cmake, args)?;
        if self.verbose {
            terminal::print_info(&format!(
                "{} finished in {:.2}s",
                phase,
                result.duration.as_secs_f64()
            ));
        }

        if !result.success {
            return Err(BuildError::ToolFailed {
                phase,
                build_type,
                exit_code: result.exit_code,
            }
            .into());
        }
        Ok(())
    }
}

impl BuildTool for CMake {
    fn configure(&self, source_dir: &Path, build_dir: &Path, build_type: BuildType) -> Result<()> {
        let args = Self::configure_args(source_dir, build_dir, build_type);
        self.run(Phase::Configure, build_type, &args)
    }

    fn compile(&self, build_dir: &Path, build_type: BuildType) -> Result<()> {
        let args = Self::compile_args(build_dir);
        self.run(Phase::Compile, build_type, &args)
    }
}
