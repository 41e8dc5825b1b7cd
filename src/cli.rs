//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::build::cmake::CMake;
use crate::build::lifecycle::BuildManager;
use crate::commands;
use crate::config::BuildContext;
use crate::utils::terminal;

/// SimpleChat build tool
///
/// Configures and compiles SimpleChat with CMake, one build type at a time,
/// into build/<type>/ at the repository root.
#[derive(Parser, Debug)]
#[command(name = "simplechat-build")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "COMMANDS:\n  \
    clean    Remove the whole build/ directory\n  \
    debug    Configure and compile the Debug build\n  \
    release  Configure and compile the Release build (default)\n  \
    all      Release, then Debug\n\n\
    Options must come before the first command; anything after it is read as a command.")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Commands to run in order (case-insensitive)
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub commands: Vec<String>,
}

impl Cli {
    /// Execute the requested commands
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            terminal::disable_colors();
        }

        let context = BuildContext::from_current_exe()?;
        let manager = BuildManager::new(context, CMake::new(self.verbose));
        if self.verbose {
            let context = manager.context();
            terminal::print_info(&format!("Source root: {}", context.source_root.display()));
            terminal::print_info(&format!("Build root: {}", context.build_root.display()));
        }

        commands::run(&manager, &self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_commands() {
        let cli = Cli::try_parse_from(["simplechat-build"]).unwrap();
        assert!(cli.commands.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_commands_keep_order_and_case() {
        let cli = Cli::try_parse_from(["simplechat-build", "-v", "Clean", "all", "debug"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.commands, ["Clean", "all", "debug"]);
    }

    #[test]
    fn test_flags_after_first_command_are_commands() {
        let cli = Cli::try_parse_from(["simplechat-build", "debug", "-v"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.commands, ["debug", "-v"]);
    }

    #[test]
    fn test_help_mentions_option_order() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Options must come before the first command"));
    }

    #[test]
    fn test_hyphen_tokens_are_commands() {
        let cli = Cli::try_parse_from(["simplechat-build", "release", "-x"]).unwrap();
        assert_eq!(cli.commands, ["release", "-x"]);
    }
}
