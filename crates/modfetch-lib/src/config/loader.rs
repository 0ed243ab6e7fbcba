use super::Settings;
use super::model::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_ROOT, default_user_agent};
use crate::error::ModFetchError;
use config::{Config as ConfigBuilder, Environment, File, Map};

pub const ENV_PREFIX: &str = "MODFETCH";

/// Settings keys that may be overridden from the environment.
const ENV_KEYS: [&str; 5] = [
    "output_root",
    "default_manifest",
    "user_agent",
    "request_timeout_secs",
    "use_system_proxy",
];

/// Layers built-in defaults, an optional settings file and `MODFETCH_*`
/// environment variables, in that order.
pub fn load_settings(config_path: &str) -> Result<Settings, ModFetchError> {
    load_settings_with_env(config_path, std::env::vars())
}

fn load_settings_with_env(
    config_path: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Settings, ModFetchError> {
    let settings = ConfigBuilder::builder()
        .set_default("output_root", DEFAULT_OUTPUT_ROOT)?
        .set_default("default_manifest", DEFAULT_MANIFEST_PATH)?
        .set_default("user_agent", default_user_agent())?
        .set_default("use_system_proxy", true)?
        .add_source(File::with_name(config_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(settings_env_vars(vars))),
        )
        .build()?;

    settings.try_deserialize().map_err(Into::into)
}

/// Keeps only the `MODFETCH_*` variables that name a settings key, so
/// unrelated variables sharing the prefix (such as `MODFETCH_LOG`) are ignored.
fn settings_env_vars(vars: impl IntoIterator<Item = (String, String)>) -> Map<String, String> {
    vars.into_iter()
        .filter(|(name, _)| {
            name.strip_prefix(ENV_PREFIX)
                .and_then(|rest| rest.strip_prefix('_'))
                .is_some_and(|key| {
                    ENV_KEYS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(key))
                })
        })
        .collect()
}
