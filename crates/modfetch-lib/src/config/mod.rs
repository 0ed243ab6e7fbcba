mod loader;
mod model;

pub use loader::{ENV_PREFIX, load_settings};
pub use model::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_ROOT, Settings, default_user_agent};
