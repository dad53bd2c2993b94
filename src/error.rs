use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 运行外壳的错误（游戏逻辑本身不会出错）
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("cannot locate the user {0} directory")]
    NoPlatformDir(&'static str),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
