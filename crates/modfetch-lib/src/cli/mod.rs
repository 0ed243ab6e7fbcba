mod args;
mod fetch;
mod params;
mod prompt;
mod resolved_command;
mod run;

pub use args::{Args, Command, parse_args};
pub use fetch::run_fetch;
pub use params::FetchParams;
pub use prompt::{ensure_default_manifest, prompt_manifest_path};
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use run::run_command;
