//! Batch execution of shell commands.

use crate::shell::{Outcome, Shell, ShellError};

/// Everything a script produced, in order.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Command output, one entry per command that printed something
    pub outputs: Vec<String>,
    /// Failed lines as (1-based line number, error)
    pub errors: Vec<(usize, ShellError)>,
    /// True if the script stopped at an EXIT command
    pub exited: bool,
}

impl ScriptReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs every line of `source` through `shell`.
///
/// Lines starting with `#` are comments. A failing line is recorded and
/// execution continues with the next one; `EXIT` stops the script.
pub fn run_script(shell: &mut Shell, source: &str) -> ScriptReport {
    let mut report = ScriptReport::default();

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        match shell.execute(line) {
            Ok(Outcome::Output(text)) => report.outputs.push(text),
            Ok(Outcome::Empty) => {}
            Ok(Outcome::Exit) => {
                report.exited = true;
                break;
            }
            Err(err) => report.errors.push((number + 1, err)),
        }
    }

    report
}
