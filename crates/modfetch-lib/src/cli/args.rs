use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: String,
        manifest_path: Option<String>,
        output_dir: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "modfetch",
    version,
    about = "Download the external files listed in a Modrinth modpack index"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Sets a custom settings file (ignored when missing)",
        default_value = "modfetch.toml"
    )]
    config: String,

    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Reads this manifest instead of prompting for one"
    )]
    manifest: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Overrides the directory downloaded files are written under"
    )]
    output_dir: Option<String>,
}

fn log_level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = log_level_for(cli.verbose);

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = Command::Fetch {
        config_path: cli.config,
        manifest_path: cli.manifest,
        output_dir: cli.output_dir,
    };

    Args { command, log_level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["modfetch"]).unwrap();

        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.config, "modfetch.toml");
        assert_eq!(cli.manifest, None);
        assert_eq!(cli.output_dir, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "modfetch",
            "-vv",
            "--manifest",
            "pack/modrinth.index.json",
            "-o",
            "out",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.manifest.as_deref(), Some("pack/modrinth.index.json"));
        assert_eq!(cli.output_dir.as_deref(), Some("out"));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level_for(0), Level::WARN);
        assert_eq!(log_level_for(1), Level::INFO);
        assert_eq!(log_level_for(2), Level::DEBUG);
        assert_eq!(log_level_for(7), Level::TRACE);
    }
}
