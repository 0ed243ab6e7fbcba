use crate::cli::args::Command;
use crate::cli::params::FetchParams;
use crate::cli::prompt::{ensure_default_manifest, prompt_manifest_path};
use crate::config::load_settings;
use crate::download::HttpClientOptions;
use crate::error::ModFetchError;
use crate::report::Reporter;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
}

/// Merges settings with command-line overrides. Without an explicit manifest
/// the user is prompted on `input`.
pub fn resolve_command<R: BufRead, W: Write>(
    command: Command,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<ResolvedCommand, ModFetchError> {
    match command {
        Command::Fetch {
            config_path,
            manifest_path,
            output_dir,
        } => {
            let settings = load_settings(&config_path)?;

            if output_dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
                return Err(ModFetchError::CliArgumentValidation {
                    details: "--output-dir must not be empty.".to_string(),
                });
            }

            let output_root = output_dir
                .map(PathBuf::from)
                .unwrap_or(settings.output_root);

            let manifest_path = match manifest_path {
                Some(path) => PathBuf::from(path),
                None => {
                    ensure_default_manifest(&settings.default_manifest)?;
                    prompt_manifest_path(&settings.default_manifest, input, reporter)?
                }
            };

            Ok(ResolvedCommand::Fetch(FetchParams {
                manifest_path,
                output_root,
                http: HttpClientOptions {
                    user_agent: settings.user_agent,
                    request_timeout: settings.request_timeout_secs.map(Duration::from_secs),
                    use_system_proxy: settings.use_system_proxy,
                },
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings_file(dir: &tempfile::TempDir, default_manifest: &std::path::Path) -> String {
        let path = dir.path().join("modfetch.toml");
        std::fs::write(
            &path,
            format!(
                "output_root = \"from-config\"\ndefault_manifest = {:?}\nrequest_timeout_secs = 12\n",
                default_manifest.display().to_string()
            ),
        )
        .unwrap();
        path.to_str().unwrap().to_string()
    }

    fn fetch_params(resolved: ResolvedCommand) -> FetchParams {
        match resolved {
            ResolvedCommand::Fetch(params) => params,
        }
    }

    #[test]
    fn test_explicit_manifest_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let default_manifest = dir.path().join("modrinth.index.json");
        let config_path = settings_file(&dir, &default_manifest);
        let mut reporter = Reporter::new(Vec::new());

        let params = fetch_params(
            resolve_command(
                Command::Fetch {
                    config_path,
                    manifest_path: Some("pack.json".to_string()),
                    output_dir: None,
                },
                &mut Cursor::new(""),
                &mut reporter,
            )
            .unwrap(),
        );

        assert_eq!(params.manifest_path, PathBuf::from("pack.json"));
        assert_eq!(params.output_root, PathBuf::from("from-config"));
        assert_eq!(params.http.request_timeout, Some(Duration::from_secs(12)));
        assert!(reporter.into_inner().is_empty());
        assert!(!default_manifest.exists());
    }

    #[test]
    fn test_prompt_creates_default_and_uses_it() {
        let dir = tempfile::tempdir().unwrap();
        let default_manifest = dir.path().join("modrinth.index.json");
        let config_path = settings_file(&dir, &default_manifest);
        let mut reporter = Reporter::new(Vec::new());

        let params = fetch_params(
            resolve_command(
                Command::Fetch {
                    config_path,
                    manifest_path: None,
                    output_dir: Some("from-flag".to_string()),
                },
                &mut Cursor::new("\n"),
                &mut reporter,
            )
            .unwrap(),
        );

        assert_eq!(params.manifest_path, default_manifest);
        assert_eq!(params.output_root, PathBuf::from("from-flag"));
        assert!(default_manifest.exists());
        assert!(!reporter.into_inner().is_empty());
    }

    #[test]
    fn test_empty_output_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let default_manifest = dir.path().join("modrinth.index.json");
        let config_path = settings_file(&dir, &default_manifest);
        let mut reporter = Reporter::new(Vec::new());

        let result = resolve_command(
            Command::Fetch {
                config_path,
                manifest_path: Some("pack.json".to_string()),
                output_dir: Some(" ".to_string()),
            },
            &mut Cursor::new(""),
            &mut reporter,
        );

        assert!(matches!(
            result,
            Err(ModFetchError::CliArgumentValidation { .. })
        ));
    }
}
