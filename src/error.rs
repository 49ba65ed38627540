use snafu::Snafu;
use std::path::PathBuf;
use toml::de::Error as TomlDeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Missing required configuration field '{field}' for provider '{provider}'"))]
    MissingConfigField { provider: String, field: String },

    #[snafu(display("Unsupported storage provider: {provider}. Allowed: 'fs' | 'memory' | 's3'"))]
    UnsupportedProvider { provider: String },

    #[snafu(display("Failed to read config file '{}': {source}", path.display()))]
    ConfigFileIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file '{}': {source}", path.display()))]
    ConfigFileParse { path: PathBuf, source: TomlDeError },

    #[snafu(display("Failed to query field collection items: {source}"))]
    QueryFailed { source: Box<Error> },

    #[snafu(display("Failed to load items '{ids}': {source}"))]
    LoadFailed { ids: String, source: Box<Error> },

    #[snafu(display("Failed to delete item {item_id}: {source}"))]
    DeleteFailed { item_id: u64, source: Box<Error> },

    #[snafu(display("Item document '{path}' is corrupt: {source}"))]
    CorruptItem {
        path: String,
        source: serde_json::Error,
    },

    #[snafu(display("Item document '{path}' holds item {found}"))]
    ItemIdMismatch { path: String, found: u64 },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("OpenDAL error: {source}"))]
    OpenDal { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("JSON serialization error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::OpenDal { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl Error {
    pub fn non_interactive(action: &str) -> Self {
        Error::InvalidArgument {
            message: format!(
                "{action} requires interactive input. Hint: rerun without --non-interactive or pass the ids as an argument."
            ),
        }
    }
}
