//! Executes an assembled pipeline as one child process.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;

/// Exit status and wall-clock timing for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub elapsed: Duration,
}

/// Run the pipeline's shell line as a single process group with inherited
/// stdio, so interactive password prompts and progress counters reach the
/// operator directly. Output is never captured or reinterpreted.
///
/// A non-zero exit is fatal. A partial transfer is unreliable and must be
/// re-run from scratch; the drop stage makes that restart idempotent. No
/// timeout is enforced, so a hung remote stage blocks indefinitely.
pub fn run(pipeline: &Pipeline) -> Result<ExecutionResult> {
    let command_line = pipeline.command_line();

    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", &command_line]);
        cmd
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", &command_line]);
        cmd
    };

    let start = Instant::now();

    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    let elapsed = start.elapsed();
    let exit_code = status.code().unwrap_or(-1);

    log_status!("pipe", "Piping time: {}ms", elapsed.as_millis());

    if exit_code != 0 {
        return Err(Error::PipelineFailed { exit_code });
    }

    Ok(ExecutionResult { exit_code, elapsed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineStage;

    fn pipeline_of(commands: &[&str]) -> Pipeline {
        Pipeline {
            stages: commands
                .iter()
                .map(|command| PipelineStage {
                    name: "stage",
                    command: command.to_string(),
                    optional: false,
                })
                .collect(),
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_reports_success_for_zero_exit() {
        let result = run(&pipeline_of(&["true", "cat >/dev/null"])).unwrap();
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    #[cfg(unix)]
    fn run_maps_signal_termination_to_nonzero_exit() {
        // SIGKILL leaves no exit code; the CLI must still fail.
        let err = run(&pipeline_of(&["kill -9 $$"])).unwrap_err();
        assert!(err.exit_code() >= 1);
        match err {
            Error::PipelineFailed { exit_code } => assert_ne!(exit_code, 0),
            other => panic!("expected PipelineFailed, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_surfaces_pipeline_exit_code() {
        // The shell reports the last stage's status.
        let err = run(&pipeline_of(&["true", "exit 7"])).unwrap_err();
        match err {
            Error::PipelineFailed { exit_code } => assert_eq!(exit_code, 7),
            other => panic!("expected PipelineFailed, got {:?}", other),
        }
    }
}
