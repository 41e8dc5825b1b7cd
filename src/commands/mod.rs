//! Command token resolution and dispatch
//!
//! Tokens are resolved and executed one at a time, left to right. Actions
//! for tokens before an unknown one have already run when the unknown token
//! aborts the run.

use anyhow::Result;

use crate::build::cmake::BuildTool;
use crate::build::lifecycle::BuildManager;
use crate::build::BuildType;
use crate::error::BuildError;

/// One unit of work derived from a command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clean,
    Build(BuildType),
}

/// Map one token to its actions, ignoring case.
///
/// `all` expands to Release followed by Debug.
pub fn resolve_token(token: &str) -> Result<Vec<Action>, BuildError> {
    let token = token.to_lowercase();
    match token.as_str() {
        "clean" => Ok(vec![Action::Clean]),
        "all" => Ok(vec![
            Action::Build(BuildType::Release),
            Action::Build(BuildType::Debug),
        ]),
        name => match BuildType::from_name(name) {
            Some(build_type) => Ok(vec![Action::Build(build_type)]),
            None => Err(BuildError::UnknownCommand {
                token: name.to_string(),
            }),
        },
    }
}

pub fn execute<T: BuildTool>(manager: &BuildManager<T>, action: Action) -> Result<()> {
    match action {
        Action::Clean => manager.clean().map(|_| ()),
        Action::Build(build_type) => manager.build(build_type),
    }
}

/// Run every token in order, stopping at the first failure.
pub fn run<T: BuildTool, S: AsRef<str>>(manager: &BuildManager<T>, tokens: &[S]) -> Result<()> {
    if tokens.is_empty() {
        return execute(manager, Action::Build(BuildType::default()));
    }

    for token in tokens {
        for action in resolve_token(token.as_ref())? {
            execute(manager, action)?;
        }
    }
    Ok(())
}
