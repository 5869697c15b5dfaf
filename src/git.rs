use std::process::{Command, Output};

use tracing::debug;

use crate::error::AppError;

/// Dispatches a program invocation built by the workflow.
///
/// Arguments travel as a vector, never as a shell string, so user-supplied
/// commit messages cannot break quoting.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[String]) -> Result<(), AppError>;
}

/// Runs commands through `std::process`, surfacing stderr on failure
pub struct GitRunner;

impl CommandRunner for GitRunner {
    fn run(&mut self, program: &str, args: &[String]) -> Result<(), AppError> {
        debug!("dispatching: {program} {}", args.join(" "));
        let output: Output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            return Err(AppError::GitCommand(
                String::from_utf8(output.stderr)?.trim().to_string(),
            ));
        }

        debug!("{}", String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }
}

/// Builds the argument vector for a placeholder commit, optionally routed
/// through an identity alias.
pub fn work_commit_args(alias: Option<&str>, message: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    if let Some(alias) = alias {
        args.push(alias.to_string());
    }
    args.extend(["commit", "--allow-empty", "-m"].map(String::from));
    args.push(message.to_string());
    args
}

/// Checks if the current directory is inside a Git work tree
pub fn is_inside_git_repo() -> Result<bool, AppError> {
    let output: Output = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()?;

    if !output.status.success() {
        return Ok(false);
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim() == "true")
}
