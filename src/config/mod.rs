pub mod loader;
pub mod provider;
pub mod spec;
pub mod storage_config;

pub use provider::StorageProvider;
pub use spec::{ProviderBackend, prepare_storage_backend, prepare_storage_config};
pub use storage_config::StorageConfig;
