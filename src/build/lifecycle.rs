//! Build directory lifecycle
//!
//! Owns the mapping from build type to output directory and runs the two
//! external phases against it. Each build goes
//! `Start → DirectoryEnsured → Configured → Compiled → Done`; a failing phase
//! stops the action and the error propagates to the caller.

use anyhow::Result;

use super::cmake::BuildTool;
use super::BuildType;
use crate::config::BuildContext;
use crate::utils::{paths, terminal};

/// What `clean` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed,
    NothingToClean,
}

pub struct BuildManager<T: BuildTool> {
    context: BuildContext,
    tool: T,
}

impl<T: BuildTool> BuildManager<T> {
    pub fn new(context: BuildContext, tool: T) -> Self {
        Self { context, tool }
    }

    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    #[cfg(test)]
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Remove the whole build root, every build type with it.
    pub fn clean(&self) -> Result<CleanOutcome> {
        let build_root = &self.context.build_root;
        if !build_root.exists() {
            terminal::print_info("Nothing to clean");
            return Ok(CleanOutcome::NothingToClean);
        }

        terminal::print_info(&format!("Removing {}", build_root.display()));
        paths::remove_dir(build_root)?;
        Ok(CleanOutcome::Removed)
    }

    /// Configure then compile one build type into its output directory.
    ///
    /// Configure always runs, even when the directory is already configured.
    pub fn build(&self, build_type: BuildType) -> Result<()> {
        let out_dir = self.context.output_dir(build_type);
        paths::ensure_dir(&out_dir)?;

        println!();
        terminal::print_banner(&format!("Building {}", build_type));

        self.tool
            .configure(&self.context.source_root, &out_dir, build_type)?;
        self.tool.compile(&out_dir, build_type)?;

        terminal::print_banner(&format!(
            "Done: {}",
            self.context.artifact_path(build_type).display()
        ));
        println!();
        Ok(())
    }
}
