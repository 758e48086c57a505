//! Errors of the plugin configuration layer.
//!
//! Menu parsing never fails; malformed lines are skipped. Only loading the
//! configuration can produce an [`Error`].

/// An error produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path as given to the host.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An option is not known.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A boolean option has an unrecognized value.
    #[error("invalid value for {key}: {value:?}")]
    InvalidBoolean {
        /// The option name.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// A RON document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),
}
