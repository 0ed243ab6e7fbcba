mod loader;
mod model;

pub use loader::load_manifest;
pub use model::{Manifest, ManifestEntry};
