use modfetch_lib::cli::{parse_args, run_command};
use modfetch_lib::report::Reporter;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, color_eyre::Report> {
    color_eyre::install()?;

    let args = parse_args();
    let mut reporter = Reporter::stdout();
    let mut stdin = std::io::stdin().lock();

    Ok(run_command(args.command, &mut stdin, &mut reporter).await?)
}
