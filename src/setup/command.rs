use std::process::{Command, Stdio};

/// Runs external tools for the setup steps; every call blocks until the
/// process exits.
pub trait CommandRunner {
    /// Captured stdout of a successful run, `None` on failure.
    fn output(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Runs with inherited stdio, returning whether it exited successfully.
    fn run(&self, program: &str, args: &[&str]) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| tracing::debug!(program, error = %e, "failed to spawn"))
            .ok()?;

        if !output.status.success() {
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run(&self, program: &str, args: &[&str]) -> bool {
        tracing::debug!(program, ?args, "running");

        match Command::new(program).args(args).status() {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!(program, error = %e, "failed to spawn");
                false
            }
        }
    }
}
