use crate::cli::{Command, ResolvedCommand, resolve_command, run_fetch};
use crate::report::Reporter;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Resolves and runs `command`, reporting a fatal error as an `[ERR]` line.
///
/// Exits with success once the batch completes, however many entries failed,
/// and with failure when the run could not start or the manifest is unusable.
pub async fn run_command<R: BufRead, W: Write>(
    command: Command,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> io::Result<ExitCode> {
    let outcome = match resolve_command(command, input, reporter) {
        Ok(ResolvedCommand::Fetch(params)) => run_fetch(params, reporter).await.map(drop),
        Err(err) => Err(err),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!("Run failed: {:?}", err);
            reporter.fatal(&err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
