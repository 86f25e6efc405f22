//! Error types for smgres.

/// Result type alias for smgres operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for smgres.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a parameter file.
    #[error("failed to read parameter file '{path}'")]
    ParamFileRead {
        /// Path to the parameter file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a parameter file.
    #[error("failed to parse parameter file '{path}'")]
    ParamFileParse {
        /// Path to the parameter file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Parameter file contains a value the key store cannot represent.
    #[error("unsupported value for key '{key}': expected string, integer or float")]
    UnsupportedValue {
        /// Offending key.
        key: String,
    },

    /// A required configuration key is absent.
    #[error("required key '{key}' not read, you should specify one")]
    MissingRequiredKey {
        /// Name of the missing key.
        key: String,
    },

    /// The registry does not recognize the supplied model name.
    #[error("unknown {kind} model '{name}'")]
    UnknownModel {
        /// Model category ("gravity" or "expansion").
        kind: &'static str,
        /// Name that failed to resolve.
        name: String,
    },

    /// Cross-field contradiction in the supplied configuration.
    #[error("inconsistent configuration: {message}")]
    InconsistentConfiguration {
        /// Description of the contradiction.
        message: String,
    },

    /// Tuning index does not address the model's parameter vector.
    #[error(
        "tuning index tuning_index_smg = {index} is larger than the number of entries {size} in the model parameters, check your parameter file"
    )]
    TuningIndexOutOfRange {
        /// Supplied tuning index.
        index: usize,
        /// Length of the model's parameter vector.
        size: usize,
    },

    /// Failed to serialize resolved output to JSON.
    #[error("failed to serialize resolved configuration")]
    OutputSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
