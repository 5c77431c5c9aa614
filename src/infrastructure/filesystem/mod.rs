pub mod manifest_store;
pub mod repository_dirs;

pub use manifest_store::{ManifestStore, ManifestStoreError};
pub use repository_dirs::{list_root_entries, remove_root, RootEntry};
