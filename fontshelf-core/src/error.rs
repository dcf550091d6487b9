use std::path::PathBuf;

/// Errors produced by the fontshelf core.
///
/// Catalog building and filtering never fail; everything here comes from the
/// edges: reading configuration and loading font sources.
#[derive(thiserror::Error, Debug)]
pub enum FontshelfError {
    #[error("config not found at {0:?}")]
    ConfigNotFound(PathBuf),

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file (invalid TOML): {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read font list {path:?}: {source}")]
    FontListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font directory {0:?} is not a directory")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, FontshelfError>;
